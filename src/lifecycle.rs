//! Repository lifecycle: absence, creation, deletion
//!
//! The steps share the state of a real GitHub account and only make sense in
//! [`Step::ORDER`]. Deleting before creating is a broken precondition, not a
//! GitHub bug.
use std::fmt;

use reqwest::{header::HeaderMap, StatusCode};

use crate::config::EnvConfig;
use crate::errors::{RepoCheckError, RepoCheckErrorKind};
use crate::github::client::GithubClient;
use crate::github::headers::request_headers;

/// One step of the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The repository doesn't exist yet
    Absence,

    /// The repository gets created
    Creation,

    /// The repository gets deleted
    Deletion,
}

impl Step {
    /// The only valid order
    pub const ORDER: [Step; 3] = [Step::Absence, Step::Creation, Step::Deletion];

    /// Status GitHub answers when the step succeeds
    pub fn expected_status(self) -> StatusCode {
        match self {
            Step::Absence => StatusCode::NOT_FOUND,
            Step::Creation => StatusCode::CREATED,
            Step::Deletion => StatusCode::NO_CONTENT,
        }
    }

    /// Message of the failed check
    pub fn failure_message(self) -> &'static str {
        match self {
            Step::Absence => "The repository exists",
            Step::Creation => "The repository has not been created!",
            Step::Deletion => "The repository has not been deleted!",
        }
    }

    /// Build the error of a failed check
    fn failed(self, status: StatusCode, name: Option<&str>) -> RepoCheckError {
        let text = match name {
            Some(name) => format!(
                "{} (status {status}, name '{name}', expected {})",
                self.failure_message(),
                self.expected_status()
            ),
            None => format!(
                "{} (status {status}, expected {})",
                self.failure_message(),
                self.expected_status()
            ),
        };
        RepoCheckError::new(RepoCheckErrorKind::Assertion).with_text(&text)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Absence => write!(f, "absence"),
            Step::Creation => write!(f, "creation"),
            Step::Deletion => write!(f, "deletion"),
        }
    }
}

/// Why a lifecycle run stopped
#[derive(Debug)]
pub(crate) struct LifecycleFailure {
    /// Step that failed
    pub(crate) step: Step,

    /// The repository is still on the account
    pub(crate) leftover: bool,

    /// What went wrong
    pub(crate) error: RepoCheckError,
}

/// 404 and no name
fn verify_absence(status: StatusCode, name: Option<&str>) -> Result<(), RepoCheckError> {
    if status == Step::Absence.expected_status() && name.is_none() {
        return Ok(());
    }
    Err(Step::Absence.failed(status, name))
}

/// 201 and the configured name
fn verify_creation(
    config: &EnvConfig,
    status: StatusCode,
    name: Option<&str>,
) -> Result<(), RepoCheckError> {
    if status == Step::Creation.expected_status() && name == Some(config.repo.as_str()) {
        return Ok(());
    }
    Err(Step::Creation.failed(status, name))
}

/// 204
fn verify_deletion(status: StatusCode) -> Result<(), RepoCheckError> {
    if status == Step::Deletion.expected_status() {
        return Ok(());
    }
    Err(Step::Deletion.failed(status, None))
}

/// Check the repository doesn't exist: 404 and no name
/// # Errors
/// Error if the request fails or the repository exists
pub async fn check_absence(
    client: &GithubClient,
    config: &EnvConfig,
    headers: &HeaderMap,
) -> Result<(), RepoCheckError> {
    let (status, name) = client
        .get_repository(&config.owner, &config.repo, headers)
        .await?;
    verify_absence(status, name.as_deref())
}

/// Check the repository gets created: 201 and the configured name
/// # Errors
/// Error if the request fails or the repository is not created
pub async fn check_creation(
    client: &GithubClient,
    config: &EnvConfig,
    headers: &HeaderMap,
) -> Result<(), RepoCheckError> {
    let (status, name) = client.create_repository(&config.repo, headers).await?;
    verify_creation(config, status, name.as_deref())
}

/// Check the repository gets deleted: 204
/// # Errors
/// Error if the request fails or the repository is not deleted
pub async fn check_deletion(
    client: &GithubClient,
    config: &EnvConfig,
    headers: &HeaderMap,
) -> Result<(), RepoCheckError> {
    let status = client
        .delete_repository(&config.owner, &config.repo, headers)
        .await?;
    verify_deletion(status)
}

/// Run the steps in order and remember whether the repository stays behind
///
/// A 201 leaves a repository on the account even when the returned name is
/// not the configured one, only a passed deletion clears it.
pub(crate) async fn run_steps(
    client: &GithubClient,
    config: &EnvConfig,
    headers: &HeaderMap,
) -> Result<(), LifecycleFailure> {
    let mut leftover = false;
    for step in Step::ORDER {
        log::info!(
            "Checking {step} of {}/{} on {}",
            config.owner,
            config.repo,
            client.base_url()
        );
        let outcome = match step {
            Step::Absence => check_absence(client, config, headers).await,
            Step::Creation => match client.create_repository(&config.repo, headers).await {
                Ok((status, name)) => {
                    leftover = status == StatusCode::CREATED;
                    verify_creation(config, status, name.as_deref())
                }
                Err(e) => Err(e),
            },
            Step::Deletion => {
                let outcome = check_deletion(client, config, headers).await;
                if outcome.is_ok() {
                    leftover = false;
                }
                outcome
            }
        };
        if let Err(error) = outcome {
            return Err(LifecycleFailure {
                step,
                leftover,
                error,
            });
        }
    }
    Ok(())
}

/// Run every step in order, stopping at the first failure
///
/// Nothing is cleaned up: if the repository got created and the run stops
/// before it is deleted, it stays on the account and a warning names it.
/// # Errors
/// Error of the first failing step
pub async fn run_lifecycle(
    client: &GithubClient,
    config: &EnvConfig,
) -> Result<(), RepoCheckError> {
    let headers = request_headers(&config.token)?;
    match run_steps(client, config, &headers).await {
        Ok(()) => {
            log::info!(
                "Repository lifecycle checked for {}/{}",
                config.owner,
                config.repo
            );
            Ok(())
        }
        Err(failure) => {
            if failure.leftover {
                log::warn!(
                    "Repository {}/{} is still on the account after the failed {} step, \
                     remove it before the next run",
                    config.owner,
                    config.repo,
                    failure.step
                );
            }
            Err(failure.error)
        }
    }
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config() -> EnvConfig {
        EnvConfig {
            token: "test_token".to_string(),
            owner: "octocat".to_string(),
            repo: "demo".to_string(),
        }
    }

    async fn mount_get(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/repos/octocat/demo"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn mount_create(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn mount_delete(server: &MockServer, status: u16, expected_calls: u64) {
        Mock::given(method("DELETE"))
            .and(path("/repos/octocat/demo"))
            .respond_with(ResponseTemplate::new(status))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[test]
    fn steps_order_and_statuses() {
        let statuses: Vec<u16> = Step::ORDER
            .iter()
            .map(|s| s.expected_status().as_u16())
            .collect();
        assert_eq!(statuses, vec![404, 201, 204]);
    }

    #[tokio::test]
    async fn absence_fails_when_repository_exists() {
        let server = MockServer::start().await;
        mount_get(&server, 200, serde_json::json!({"name": "demo"})).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();
        let headers = request_headers("test_token").unwrap();

        let err = check_absence(&client, &config(), &headers)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &RepoCheckErrorKind::Assertion);
        assert!(err.to_string().contains("The repository exists"));
    }

    #[tokio::test]
    async fn creation_fails_on_other_name() {
        let server = MockServer::start().await;
        mount_create(&server, 201, serde_json::json!({"name": "other"})).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();
        let headers = request_headers("test_token").unwrap();

        let err = check_creation(&client, &config(), &headers)
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("The repository has not been created!"));
        assert!(err.to_string().contains("'other'"));
    }

    #[tokio::test]
    async fn deletion_fails_on_not_found() {
        let server = MockServer::start().await;
        mount_delete(&server, 404, 1).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();
        let headers = request_headers("test_token").unwrap();

        let err = check_deletion(&client, &config(), &headers)
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("The repository has not been deleted!"));
    }

    #[tokio::test]
    async fn full_lifecycle_passes() {
        let server = MockServer::start().await;
        mount_get(&server, 404, serde_json::json!({"message": "Not Found"})).await;
        mount_create(&server, 201, serde_json::json!({"name": "demo"})).await;
        mount_delete(&server, 204, 1).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();

        run_lifecycle(&client, &config()).await.unwrap();
    }

    #[tokio::test]
    async fn lifecycle_stops_at_first_failure() {
        let server = MockServer::start().await;
        mount_get(&server, 200, serde_json::json!({"name": "demo"})).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        mount_delete(&server, 204, 0).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();
        let headers = request_headers("test_token").unwrap();

        let failure = run_steps(&client, &config(), &headers).await.unwrap_err();
        assert_eq!(failure.step, Step::Absence);
        assert!(!failure.leftover);
        assert!(failure.error.to_string().contains("The repository exists"));
    }

    #[tokio::test]
    async fn renamed_creation_leaves_repository() {
        let server = MockServer::start().await;
        mount_get(&server, 404, serde_json::json!({"message": "Not Found"})).await;
        mount_create(&server, 201, serde_json::json!({"name": "other"})).await;
        mount_delete(&server, 204, 0).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();
        let headers = request_headers("test_token").unwrap();

        let failure = run_steps(&client, &config(), &headers).await.unwrap_err();
        assert_eq!(failure.step, Step::Creation);
        assert!(failure.leftover);
        assert_eq!(failure.error.kind(), &RepoCheckErrorKind::Assertion);
    }

    #[tokio::test]
    async fn rejected_creation_leaves_nothing() {
        let server = MockServer::start().await;
        mount_get(&server, 404, serde_json::json!({"message": "Not Found"})).await;
        mount_create(
            &server,
            422,
            serde_json::json!({"message": "Repository creation failed."}),
        )
        .await;
        mount_delete(&server, 204, 0).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();
        let headers = request_headers("test_token").unwrap();

        let failure = run_steps(&client, &config(), &headers).await.unwrap_err();
        assert_eq!(failure.step, Step::Creation);
        assert!(!failure.leftover);
    }

    #[tokio::test]
    async fn failed_deletion_leaves_repository() {
        let server = MockServer::start().await;
        mount_get(&server, 404, serde_json::json!({"message": "Not Found"})).await;
        mount_create(&server, 201, serde_json::json!({"name": "demo"})).await;
        mount_delete(&server, 403, 1).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();
        let headers = request_headers("test_token").unwrap();

        let failure = run_steps(&client, &config(), &headers).await.unwrap_err();
        assert_eq!(failure.step, Step::Deletion);
        assert!(failure.leftover);
        assert!(failure.error.to_string().contains("403"));
    }

    #[tokio::test]
    async fn lifecycle_returns_step_error() {
        let server = MockServer::start().await;
        mount_get(&server, 404, serde_json::json!({"message": "Not Found"})).await;
        mount_create(&server, 201, serde_json::json!({"name": "demo"})).await;
        mount_delete(&server, 403, 1).await;
        let client = GithubClient::with_base_url(&server.uri()).unwrap();

        let err = run_lifecycle(&client, &config()).await.unwrap_err();
        assert_eq!(err.kind(), &RepoCheckErrorKind::Assertion);
        assert!(err
            .to_string()
            .contains("The repository has not been deleted!"));
    }
}

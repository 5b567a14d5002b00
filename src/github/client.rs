//! Repository calls against the GitHub REST API
use reqwest::{header::HeaderMap, StatusCode};
use url::Url;
use urlencoding::encode;

use super::{repo::CreateRepoGithub, repo::RepoGithub, GITHUB_API_URL, USER_AGENT};
use crate::errors::RepoCheckError;

/// Github client
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// Reqwest client
    client: reqwest::Client,

    /// API base URL, without trailing slash
    base_url: String,
}

impl GithubClient {
    /// Create a client talking to api.github.com
    /// # Errors
    /// Error if the HTTP client can't be built
    pub fn new() -> Result<Self, RepoCheckError> {
        Self::with_base_url(GITHUB_API_URL)
    }

    /// Create a client talking to another API root
    /// # Errors
    /// Error if `base_url` is not a valid URL or the HTTP client can't be built
    pub fn with_base_url(base_url: &str) -> Result<Self, RepoCheckError> {
        let base_url = Url::parse(base_url)?;
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of one repository
    fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.base_url, encode(owner), encode(repo))
    }

    /// Get a repository, returns the status and the name found in the body
    /// # Errors
    /// Error if the request fails or the body is not JSON
    pub async fn get_repository(
        &self,
        owner: &str,
        repo: &str,
        headers: &HeaderMap,
    ) -> Result<(StatusCode, Option<String>), RepoCheckError> {
        let url = self.repo_url(owner, repo);
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .headers(headers.clone())
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        let found = RepoGithub::from_body(&text)?;
        log::info!("Get repository {owner}/{repo}: {status}");
        Ok((status, found.name))
    }

    /// Create a repository for the authenticated user
    /// # Errors
    /// Error if the request fails or the body is not JSON
    pub async fn create_repository(
        &self,
        repo: &str,
        headers: &HeaderMap,
    ) -> Result<(StatusCode, Option<String>), RepoCheckError> {
        let url = format!("{}/user/repos", self.base_url);
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .headers(headers.clone())
            .json(&CreateRepoGithub { name: repo })
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        let created = RepoGithub::from_body(&text)?;
        log::info!("Create repository {repo}: {status}");
        Ok((status, created.name))
    }

    /// Delete a repository, only the status is returned
    /// # Errors
    /// Error if the request fails
    pub async fn delete_repository(
        &self,
        owner: &str,
        repo: &str,
        headers: &HeaderMap,
    ) -> Result<StatusCode, RepoCheckError> {
        let url = self.repo_url(owner, repo);
        log::debug!("DELETE {url}");
        let response = self
            .client
            .delete(&url)
            .headers(headers.clone())
            .send()
            .await?;
        let status = response.status();
        log::info!("Delete repository {owner}/{repo}: {status}");
        Ok(status)
    }
}

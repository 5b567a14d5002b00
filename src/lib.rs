//! # repo-lifecycle
//!
//! Check the lifecycle of a GitHub repository through the REST API:
//! the repository is absent, then created, then deleted.
//!
//! ## Configuration
//!
//! Read from the environment, or from a `.env` file:
//!
//! ```txt
//! GITHUB_TOKEN=ghp_...        personal access token allowed to create and delete repositories
//! GITHUB_OWNER=octocat        owner of the repository
//! REPOSITORY_NAME=scratch     repository that must not exist yet
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), repo_lifecycle::RepoCheckError> {
//! use repo_lifecycle::{run_lifecycle, EnvConfig, GithubClient};
//!
//! let config = EnvConfig::from_env()?;
//! let client = GithubClient::new()?;
//! run_lifecycle(&client, &config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod lifecycle;

mod github;

pub use config::EnvConfig;
pub use errors::{RepoCheckError, RepoCheckErrorKind};
pub use github::client::GithubClient;
pub use github::headers::request_headers;
pub use github::repo::RepoGithub;
pub use github::GITHUB_API_URL;
pub use lifecycle::{check_absence, check_creation, check_deletion, run_lifecycle, Step};

//! Configuration handling
use std::fmt;

use crate::errors::{RepoCheckError, RepoCheckErrorKind};

/// Environment key holding the GitHub token
pub(crate) const TOKEN_KEY: &str = "GITHUB_TOKEN";

/// Environment key holding the repository owner
pub(crate) const OWNER_KEY: &str = "GITHUB_OWNER";

/// Environment key holding the repository name
pub(crate) const REPO_KEY: &str = "REPOSITORY_NAME";

/// Configuration data, read once from the environment
#[derive(Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// GitHub token
    pub token: String,

    /// Owner of the repository
    pub owner: String,

    /// Name of the repository
    pub repo: String,
}

impl EnvConfig {
    /// Load `.env` if there is one, then read the configuration from the process environment
    /// # Errors
    /// Error if one of the variables is missing or empty
    pub fn from_env() -> Result<Self, RepoCheckError> {
        if let Ok(path) = dotenv::dotenv() {
            log::debug!("Loaded {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`
    /// # Errors
    /// Error if one of the variables is missing or empty
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RepoCheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| match lookup(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => {
                let text = format!("{key} is not set");
                Err(RepoCheckError::new(RepoCheckErrorKind::Env).with_text(&text))
            }
        };
        Ok(Self {
            token: required(TOKEN_KEY)?,
            owner: required(OWNER_KEY)?,
            repo: required(REPO_KEY)?,
        })
    }
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfig")
            .field("token", &"***")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish()
    }
}

//! Github repository payloads
use serde::{Deserialize, Serialize};

/// Body of a repository response, only the name is read
///
/// Error bodies (`{"message": ...}`) deserialize with `name` set to `None`.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct RepoGithub {
    /// Repository name
    #[serde(default)]
    pub name: Option<String>,
}

impl RepoGithub {
    /// Parse a response body, an empty body has no name
    pub(crate) fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(body)
    }
}

/// Body of the repository creation request
#[derive(Serialize, Debug, Clone)]
pub struct CreateRepoGithub<'a> {
    /// Repository name
    pub name: &'a str,
}

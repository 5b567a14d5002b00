//! Error handling for the repo-lifecycle crate.
use std::{error::Error as StdError, fmt};

/// Error type for the repo-lifecycle crate.
#[derive(Debug)]
pub struct RepoCheckError {
    /// Inner error.
    inner: Box<Inner>,
}

impl RepoCheckError {
    /// Create a new error.
    pub(crate) fn new(kind: RepoCheckErrorKind) -> Self {
        Self {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    /// Attach a text source to the error.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Kind of the error
    pub fn kind(&self) -> &RepoCheckErrorKind {
        &self.inner.kind
    }

    /// Build an error of the given kind wrapping `source`.
    fn from_source(kind: RepoCheckErrorKind, source: impl Into<BoxError>) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                source: Some(source.into()),
            }),
        }
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the repo-lifecycle crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: RepoCheckErrorKind,

    /// Source error.
    source: Option<BoxError>,
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoCheckErrorKind {
    /// A required environment variable is missing or empty.
    Env,

    /// The token can't be used as a header value.
    Header,

    /// The API base URL is invalid.
    Url,

    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,

    /// A lifecycle step got an unexpected answer from GitHub.
    Assertion,
}

impl fmt::Display for RepoCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.source {
            Some(source) => write!(f, "{:?}: {}", self.inner.kind, source),
            None => write!(f, "{:?}", self.inner.kind),
        }
    }
}

impl StdError for RepoCheckError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for RepoCheckError {
    fn from(e: reqwest::Error) -> Self {
        Self::from_source(RepoCheckErrorKind::Reqwest, e)
    }
}

impl From<serde_json::Error> for RepoCheckError {
    fn from(e: serde_json::Error) -> Self {
        Self::from_source(RepoCheckErrorKind::Serde, e)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for RepoCheckError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        Self::from_source(RepoCheckErrorKind::Header, e)
    }
}

impl From<url::ParseError> for RepoCheckError {
    fn from(e: url::ParseError) -> Self {
        Self::from_source(RepoCheckErrorKind::Url, e)
    }
}

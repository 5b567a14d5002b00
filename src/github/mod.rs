//! GitHub API module.
pub(crate) mod client;
pub(crate) mod headers;
pub(crate) mod repo;

/// GitHub API URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub API Header
const GITHUB_API_HEADER: &str = "x-github-api-version";

/// GitHub API Version
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub media type
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// User agent sent with every request, GitHub rejects requests without one
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

//! Request headers
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};

use super::{GITHUB_API_HEADER, GITHUB_API_VERSION, GITHUB_MEDIA_TYPE};
use crate::errors::RepoCheckError;

/// Build the headers sent with every repository call
/// # Errors
/// Error if the token contains characters not allowed in a header
pub fn request_headers(token: &str) -> Result<HeaderMap, RepoCheckError> {
    let mut authorization = HeaderValue::from_str(&format!("token {token}"))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
    headers.insert(AUTHORIZATION, authorization);
    let version_header = HeaderName::from_static(GITHUB_API_HEADER);
    headers.insert(version_header, HeaderValue::from_static(GITHUB_API_VERSION));
    Ok(headers)
}

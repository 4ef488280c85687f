//! Bearer credential extraction.
//!
//! The authenticator itself never touches the credential; it hands the whole
//! request head to the verifier. Verifier implementations use this module to
//! pull the token out.

use std::borrow::Cow;

use http::request::Parts;

/// Query parameter consulted when no Authorization header is present.
const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Extract the bearer credential from a request head.
///
/// The `Authorization: Bearer` header wins; otherwise the first
/// `access_token` query parameter is used, percent-decoded. Returns `None`
/// when the request carries neither.
pub fn bearer_token(parts: &Parts) -> Option<Cow<'_, str>> {
    if let Some(token) = header_token(parts) {
        return Some(Cow::Borrowed(token));
    }
    query_token(parts)
}

fn header_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn query_token(parts: &Parts) -> Option<Cow<'_, str>> {
    let query = parts.uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == ACCESS_TOKEN_PARAM)
        .map(|(_, value)| value)
}

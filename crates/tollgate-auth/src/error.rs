//! Auth-specific error types.

/// Fatal request-pipeline errors.
///
/// These mean the host router never attached the per-request metadata the
/// authenticator depends on. They are configuration bugs, not authentication
/// outcomes, and are surfaced to the caller instead of being collapsed into
/// "no user".
#[derive(Debug, thiserror::Error)]
pub enum RequestStateError {
    /// No [`MethodInfo`](crate::MethodInfo) extension on the request.
    #[error("method info is not set in the request")]
    MissingMethodInfo,

    /// No [`ServiceIdentity`](crate::ServiceIdentity) extension on the request.
    #[error("service identity is not set in the request")]
    MissingServiceIdentity,
}

/// Failure signals a [`Verifier`](crate::Verifier) may return.
///
/// The authenticator treats both variants as "could not establish identity"
/// and collapses them into the same no-user outcome; the split only feeds
/// the warning log.
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    /// The credential was missing, malformed, expired, or rejected.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// The verifier's own machinery failed (key fetch, cache lookup, ...).
    #[error("verifier failure: {0}")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl VerifierError {
    /// Wrap an arbitrary error as an internal verifier failure.
    pub fn internal<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        VerifierError::Internal(Box::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_state_error_display() {
        assert_eq!(
            RequestStateError::MissingMethodInfo.to_string(),
            "method info is not set in the request"
        );
        assert_eq!(
            RequestStateError::MissingServiceIdentity.to_string(),
            "service identity is not set in the request"
        );
    }

    #[test]
    fn test_verifier_error_display() {
        let e = VerifierError::Unauthenticated("token expired".to_string());
        assert_eq!(e.to_string(), "unauthenticated: token expired");
    }

    #[test]
    fn test_verifier_error_internal_keeps_source() {
        let e = VerifierError::internal(std::io::Error::other("cache lookup failed"));
        assert_eq!(e.to_string(), "verifier failure: cache lookup failed");
        assert!(std::error::Error::source(&e).is_some());
    }
}

//! Per-request authentication entry point.

use std::sync::Arc;

use http::request::Parts;

use crate::error::RequestStateError;
use crate::identity::{IdentityMapper, SubjectEmailMapper};
use crate::policy;
use crate::user::User;
use crate::Verifier;

/// Authenticates one request against the resolved method's auth policy.
///
/// Reads the [`MethodInfo`](crate::MethodInfo) and
/// [`ServiceIdentity`](crate::ServiceIdentity) the host router attached,
/// decides whether authentication applies, and if so forwards the request
/// head to the verifier. Holds no cross-request state; one value behind an
/// `Arc` serves concurrent requests.
pub struct EndpointAuthenticator<V, M = SubjectEmailMapper> {
    verifier: Arc<V>,
    mapper: M,
}

impl<V: Verifier> EndpointAuthenticator<V> {
    /// Create an authenticator with the default subject/email mapping.
    pub fn new(verifier: Arc<V>) -> Self {
        Self::with_mapper(verifier, SubjectEmailMapper)
    }
}

impl<V: Verifier, M: IdentityMapper> EndpointAuthenticator<V, M> {
    /// Create an authenticator with a custom claims-to-user mapping.
    pub fn with_mapper(verifier: Arc<V>, mapper: M) -> Self {
        Self { verifier, mapper }
    }

    /// Authenticate the request, returning the user or `None`.
    ///
    /// `Ok(None)` covers both the public-method path and every verifier
    /// failure; the two failure signals a verifier can emit are collapsed
    /// into the same outcome, and callers cannot tell them apart. An error
    /// is returned only when the request is missing the metadata the host
    /// router is required to attach, which is a broken pipeline rather than
    /// a missing credential.
    pub async fn authenticate(&self, parts: &Parts) -> Result<Option<User>, RequestStateError> {
        let method_info =
            policy::method_info(parts).ok_or(RequestStateError::MissingMethodInfo)?;

        let Some(auth_policy) = method_info.auth.as_ref() else {
            log::info!("auth is not configured for {}", method_info.selector);
            return Ok(None);
        };

        let service =
            policy::service_identity(parts).ok_or(RequestStateError::MissingServiceIdentity)?;

        match self.verifier.verify(parts, auth_policy, &service.name).await {
            Ok(identity) => Ok(Some(self.mapper.map(&identity))),
            Err(err) => {
                log::warn!("authentication failed: {err}");
                Ok(None)
            }
        }
    }
}

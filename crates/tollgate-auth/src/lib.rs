//! Endpoint authentication primitives for Tollgate.
//!
//! Provides:
//! - [`User`] — Identity handed to application code after verification
//! - [`Verifier`] — Trait for async credential verification (implement per identity provider)
//! - [`IdentityMapper`] — Pluggable claims-to-[`User`] mapping strategy
//! - [`EndpointAuthenticator`] — Per-request authentication entry point
//! - [`AuthnLayer`] / [`AuthnService`] — Tower middleware exposing the authenticator to a router
//!
//! The authenticator runs behind a host router that resolves which API method
//! a request targets and attaches [`MethodInfo`] and [`ServiceIdentity`] to
//! the request extensions; see [`policy`].

mod authenticator;
mod error;
mod identity;
mod middleware;
pub mod policy;
pub mod token;
mod user;

pub use authenticator::EndpointAuthenticator;
pub use error::{RequestStateError, VerifierError};
pub use identity::{IdentityMapper, SubjectEmailMapper, VerifiedIdentity};
pub use middleware::{AuthnLayer, AuthnService};
pub use policy::{AuthPolicy, MethodInfo, ServiceIdentity};
pub use user::{user_from_parts, User};

/// Trait for verifying a bearer credential and producing identity claims.
///
/// Implement this for each identity provider. The authenticator calls
/// `verify()` with the request head, the auth policy of the resolved method,
/// and the name of the service handling the request. Implementations extract
/// the credential themselves (see [`token::bearer_token`]) and check it
/// against the provider; any caching or remote lookup is theirs to manage.
pub trait Verifier: Send + Sync + 'static {
    /// Verify the request's credential and return the identity claims.
    fn verify<'a>(
        &'a self,
        parts: &'a http::request::Parts,
        policy: &'a AuthPolicy,
        service_name: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<VerifiedIdentity, VerifierError>> + Send + 'a>,
    >;
}

//! Verified identity claims and the claims-to-user mapping seam.

use crate::user::User;

/// Claims produced by a successful credential verification.
///
/// Request-scoped: a value exists only between verification and mapping.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// Subject identifier (the `sub` claim).
    pub subject: String,
    /// Email address associated with the credential.
    pub email: String,
}

/// Strategy for converting verified claims into the internal [`User`].
///
/// This is the customization point for deployments that populate the user
/// record from different claim fields. Implementations must be pure: no
/// validation, no I/O. Trust decisions already happened in the verifier.
///
/// Any `Fn(&VerifiedIdentity) -> User` closure qualifies as a mapper.
pub trait IdentityMapper: Send + Sync + 'static {
    /// Build the user record for a verified identity.
    fn map(&self, identity: &VerifiedIdentity) -> User;
}

impl<F> IdentityMapper for F
where
    F: Fn(&VerifiedIdentity) -> User + Send + Sync + 'static,
{
    fn map(&self, identity: &VerifiedIdentity) -> User {
        self(identity)
    }
}

/// Default mapper: subject becomes [`User::id`], email carries over unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectEmailMapper;

impl IdentityMapper for SubjectEmailMapper {
    fn map(&self, identity: &VerifiedIdentity) -> User {
        User::new(identity.subject.clone(), identity.email.clone())
    }
}

//! Authenticated user record and extraction helper.

/// The user record produced by a successful authentication.
///
/// Carries exactly what downstream application code gets to see of the
/// caller: the subject identifier and email from the verified credential.
/// Stored in request extensions by the auth middleware for the lifetime of
/// the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable identifier of the authenticated principal.
    pub id: String,
    /// Email address of the authenticated principal.
    pub email: String,
}

impl User {
    /// Create a user record from its parts.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// Extract the authenticated [`User`] from HTTP request `Parts`, if present.
///
/// Absence means the method was public or the credential did not verify;
/// whether that is acceptable is the handler's decision.
pub fn user_from_parts(parts: &http::request::Parts) -> Option<&User> {
    parts.extensions.get::<User>()
}

//! Per-request metadata attached by the host router.
//!
//! The authenticator does not route requests. It expects an upstream
//! component of the host router to have resolved which API method the
//! request targets and to have attached a [`MethodInfo`] and a
//! [`ServiceIdentity`] to the request extensions before the authenticator
//! runs. A request arriving without them is a pipeline bug, reported as
//! [`RequestStateError`](crate::RequestStateError).

use serde::Deserialize;

/// Authentication policy for a single API method.
///
/// Materialized from the host's service configuration. The authenticator
/// consumes only its presence; the fields are interpreted by the verifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthPolicy {
    /// Identity providers accepted for this method.
    #[serde(default)]
    pub provider_ids: Vec<String>,
    /// Audiences a credential may be issued for.
    #[serde(default)]
    pub audiences: Vec<String>,
}

/// Routing metadata for the API method a request resolved to.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodInfo {
    /// Fully-qualified method selector, e.g. `"library.books.get"`.
    pub selector: String,
    /// Auth policy for the method. `None` means the method is public.
    #[serde(default)]
    pub auth: Option<AuthPolicy>,
}

impl MethodInfo {
    /// Metadata for a method with no authentication configured.
    pub fn public(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            auth: None,
        }
    }

    /// Metadata for a method guarded by the given policy.
    pub fn authenticated(selector: impl Into<String>, policy: AuthPolicy) -> Self {
        Self {
            selector: selector.into(),
            auth: Some(policy),
        }
    }
}

/// Name of the API service handling the request, used as verification scope.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceIdentity {
    /// Service name, e.g. `"library.example.com"`.
    pub name: String,
}

impl ServiceIdentity {
    /// Create a service identity from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Extract the [`MethodInfo`] the host router attached, if any.
pub fn method_info(parts: &http::request::Parts) -> Option<&MethodInfo> {
    parts.extensions.get::<MethodInfo>()
}

/// Extract the [`ServiceIdentity`] the host router attached, if any.
pub fn service_identity(parts: &http::request::Parts) -> Option<&ServiceIdentity> {
    parts.extensions.get::<ServiceIdentity>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_info_accessor() {
        let (mut parts, _body) = http::Request::new(()).into_parts();
        assert!(method_info(&parts).is_none());

        parts.extensions.insert(MethodInfo::public("library.books.list"));
        let info = method_info(&parts).unwrap();
        assert_eq!(info.selector, "library.books.list");
        assert!(info.auth.is_none());
    }

    #[test]
    fn test_service_identity_accessor() {
        let (mut parts, _body) = http::Request::new(()).into_parts();
        assert!(service_identity(&parts).is_none());

        parts.extensions.insert(ServiceIdentity::new("library.example.com"));
        assert_eq!(service_identity(&parts).unwrap().name, "library.example.com");
    }

    #[test]
    fn test_auth_policy_from_config() {
        let policy: AuthPolicy = serde_json::from_str(
            r#"{"provider_ids": ["google"], "audiences": ["client-id-1"]}"#,
        )
        .unwrap();
        assert_eq!(policy.provider_ids, vec!["google"]);
        assert_eq!(policy.audiences, vec!["client-id-1"]);
    }

    #[test]
    fn test_method_info_from_config_defaults_to_public() {
        let info: MethodInfo =
            serde_json::from_str(r#"{"selector": "library.books.get"}"#).unwrap();
        assert!(info.auth.is_none());
    }
}

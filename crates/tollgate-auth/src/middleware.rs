//! Tower authentication middleware.
//!
//! `AuthnLayer` and `AuthnService` expose an [`EndpointAuthenticator`] to an
//! axum router. The host must attach [`MethodInfo`](crate::MethodInfo) and
//! [`ServiceIdentity`](crate::ServiceIdentity) upstream of this layer.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use http::{Request, StatusCode};
use tower::{Layer, Service};

use crate::authenticator::EndpointAuthenticator;
use crate::identity::IdentityMapper;
use crate::Verifier;

/// Tower `Layer` that wraps services with endpoint authentication.
pub struct AuthnLayer<V, M> {
    authenticator: Arc<EndpointAuthenticator<V, M>>,
}

impl<V: Verifier, M: IdentityMapper> AuthnLayer<V, M> {
    /// Create a new layer around the given authenticator.
    pub fn new(authenticator: EndpointAuthenticator<V, M>) -> Self {
        Self {
            authenticator: Arc::new(authenticator),
        }
    }
}

impl<V, M> Clone for AuthnLayer<V, M> {
    fn clone(&self) -> Self {
        Self {
            authenticator: self.authenticator.clone(),
        }
    }
}

impl<V: Verifier, M: IdentityMapper, S> Layer<S> for AuthnLayer<V, M> {
    type Service = AuthnService<V, M, S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthnService {
            inner,
            authenticator: self.authenticator.clone(),
        }
    }
}

/// Tower `Service` that authenticates requests before forwarding them.
///
/// On a verified credential the resulting [`User`](crate::User) lands in the
/// request extensions, where handlers and extractors pick it up. A request
/// with no user is forwarded untouched; a public method or a failed
/// credential is not a rejection at this layer. Only a request the host
/// router never annotated is short-circuited, with a 500.
pub struct AuthnService<V, M, S> {
    inner: S,
    authenticator: Arc<EndpointAuthenticator<V, M>>,
}

impl<V, M, S: Clone> Clone for AuthnService<V, M, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            authenticator: self.authenticator.clone(),
        }
    }
}

impl<V, M, S> Service<Request<Body>> for AuthnService<V, M, S>
where
    V: Verifier,
    M: IdentityMapper,
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let authenticator = self.authenticator.clone();

        Box::pin(async move {
            let (mut parts, body) = req.into_parts();

            match authenticator.authenticate(&parts).await {
                Ok(Some(user)) => {
                    parts.extensions.insert(user);
                }
                Ok(None) => {}
                Err(state_err) => {
                    log::error!("request pipeline misconfigured: {state_err}");
                    return Ok(misconfigured_response(&state_err.to_string()));
                }
            }

            let req = Request::from_parts(parts, body);
            let resp = inner
                .call(req)
                .await
                .unwrap_or_else(|infallible| match infallible {});
            Ok(resp.into_response())
        })
    }
}

/// Build a 500 response for a request the host router never annotated.
fn misconfigured_response(message: &str) -> axum::response::Response {
    let body = serde_json::json!({
        "error": {
            "category": "configuration",
            "message": message,
        }
    });

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(http::header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(&body).unwrap_or_default(),
    )
        .into_response()
}

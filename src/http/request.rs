//! Request identification.
//!
//! # Responsibilities
//! - Assign every request a unique ID (UUID v4) as early as possible
//! - Preserve IDs supplied by an upstream caller
//! - Make the ID available to handlers for log correlation
//!
//! # Design Decisions
//! - Implemented as a tower layer so it composes with the middleware stack
//! - The inbound header wins; generation happens only when absent

use std::task::{Context, Poll};

use axum::http::{HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that stamps requests with an `x-request-id` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service produced by [`RequestIdLayer`].
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        if !req.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                req.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[tokio::test]
    async fn test_generates_id_when_absent() {
        let mut svc = RequestIdLayer.layer(tower::service_fn(|req: Request<Body>| async move {
            Ok::<_, std::convert::Infallible>(req.headers().get(X_REQUEST_ID).cloned())
        }));

        let req = Request::builder().body(Body::empty()).unwrap();
        let seen = svc.call(req).await.unwrap();
        let seen = seen.expect("request id should be stamped");
        assert_eq!(seen.to_str().unwrap().len(), 36); // uuid v4 text form
    }

    #[tokio::test]
    async fn test_preserves_upstream_id() {
        let mut svc = RequestIdLayer.layer(tower::service_fn(|req: Request<Body>| async move {
            Ok::<_, std::convert::Infallible>(req.headers().get(X_REQUEST_ID).cloned())
        }));

        let req = Request::builder()
            .header(X_REQUEST_ID, "trace-me")
            .body(Body::empty())
            .unwrap();
        let seen = svc.call(req).await.unwrap().unwrap();
        assert_eq!(seen, "trace-me");
    }
}

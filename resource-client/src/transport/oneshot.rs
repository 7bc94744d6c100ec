//! In-process transport (Tower oneshot into an axum Router)
//!
//! Serves requests straight from a `Router` without a socket. Used to embed
//! a local API and as the backbone of the client tests.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use http::header::CONTENT_TYPE;
use tower::ServiceExt;

use super::{ApiRequest, RawResponse, Transport};
use crate::{ClientError, ClientResult};

/// Oneshot transport (in-memory calls)
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use resource_client::OneshotTransport;
///
/// let router: Router = build_api();
/// let transport = OneshotTransport::new(router);
/// ```
#[derive(Debug, Clone)]
pub struct OneshotTransport {
    router: Router,
}

impl OneshotTransport {
    /// # Arguments
    /// * `router` - a Router with its state already applied
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl Transport for OneshotTransport {
    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let mut builder = Request::builder()
            .method(request.method)
            .uri(format!("/{}", request.path));

        let body = match request.body {
            Some(bytes) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        let request = builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

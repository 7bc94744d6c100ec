//! Transport layer
//!
//! A [`Transport`] performs exactly one HTTP exchange. It does not judge the
//! response status; the resource clients decide what a non-success status
//! means for each operation.

mod network;
mod oneshot;

pub use network::NetworkTransport;
pub use oneshot::OneshotTransport;

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use http::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A request relative to the API root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the API root, without leading slash (e.g. "salas/5")
    pub path: String,
    /// Serialized JSON body
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            method,
            path: path.trim_start_matches('/').to_string(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Attach a JSON body, serialized as-is
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Turn a non-success status into [`ClientError::Status`]
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.status.is_success() {
            return Ok(self);
        }
        Err(ClientError::Status {
            status: self.status,
            body: String::from_utf8_lossy(&self.body).into_owned(),
        })
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Err(ClientError::InvalidResponse(format!(
                "empty body with status {}",
                self.status
            )));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as text, untouched
    pub fn text(self) -> ClientResult<String> {
        String::from_utf8(self.body)
            .map_err(|e| ClientError::InvalidResponse(format!("body is not UTF-8: {}", e)))
    }
}

/// Executes API requests
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse>;
}

/// Execute one request and reject non-success statuses
pub(crate) async fn send(
    transport: &dyn Transport,
    request: ApiRequest,
) -> ClientResult<RawResponse> {
    tracing::debug!(method = %request.method, path = %request.path, "Sending request");
    let response = transport.execute(request).await?;
    tracing::debug!(
        status = %response.status,
        bytes = response.body.len(),
        "Received response"
    );
    response.error_for_status()
}

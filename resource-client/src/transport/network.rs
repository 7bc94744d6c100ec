//! Network transport backed by reqwest

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use super::{ApiRequest, RawResponse, Transport};
use crate::{ClientConfig, ClientResult};

/// Network HTTP transport
///
/// No timeout and no retry are configured: each request is sent once and
/// its outcome is handed back as-is.
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    client: Client,
    config: ClientConfig,
}

impl NetworkTransport {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// API root URL
    pub fn api_root(&self) -> &str {
        &self.config.api_root
    }

    /// Full URL a request path resolves to
    pub fn url_for(&self, path: &str) -> String {
        self.config.url_for(path)
    }
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        let url = self.url_for(&request.path);
        let mut req = self.client.request(request.method, &url);
        if let Some(body) = request.body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

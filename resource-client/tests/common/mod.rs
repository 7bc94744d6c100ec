//! In-process mock of the REST API
//!
//! Every request hits a fallback handler that records it and replays the
//! canned response registered for its method and path (404 otherwise).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE};

/// A request as the server saw it
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("recorded body is not JSON")
    }
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

#[derive(Debug, Default)]
struct Inner {
    routes: HashMap<(Method, String), Canned>,
    requests: Vec<Recorded>,
}

#[derive(Debug, Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for `method path`
    pub fn respond(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: impl Into<String>,
    ) -> &Self {
        self.insert(method, path, status, body.into(), None);
        self
    }

    /// Register a 200 response that is only sent after `delay`
    pub fn respond_after(
        &self,
        method: Method,
        path: &str,
        delay: Duration,
        body: impl Into<String>,
    ) -> &Self {
        self.insert(method, path, StatusCode::OK, body.into(), Some(delay));
        self
    }

    fn insert(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: String,
        delay: Option<Duration>,
    ) {
        self.inner
            .lock()
            .unwrap()
            .routes
            .insert((method, path.to_string()), Canned { status, body, delay });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn router(&self) -> Router {
        Router::new().fallback(handle).with_state(self.clone())
    }

    /// Serve on a loopback socket and return the base URL
    pub async fn serve(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = self.router();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn handle(
    State(api): State<MockApi>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let canned = {
        let mut inner = api.inner.lock().unwrap();
        inner.requests.push(Recorded {
            method: method.clone(),
            path: uri.path().to_string(),
            body: body.to_vec(),
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
        inner.routes.get(&(method, uri.path().to_string())).cloned()
    };

    match canned {
        Some(canned) => {
            if let Some(delay) = canned.delay {
                tokio::time::sleep(delay).await;
            }
            (canned.status, canned.body)
        }
        None => (StatusCode::NOT_FOUND, "no route".to_string()),
    }
}

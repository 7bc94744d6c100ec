//! Generic resource-collection client
//!
//! [`ResourceClient`] maps the CRUD intents of one collection onto the
//! API's path conventions:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list` | GET `{endpoint}/list` |
//! | `paginate` | GET `{endpoint}/{page}/{page_size}` |
//! | `get` | GET `{endpoint}/{id}` |
//! | `create` | POST `{endpoint}` |
//! | `update` | PUT or PATCH `{endpoint}/{id}` (per [`EditMethod`]) |
//! | `update_status` | PATCH `{endpoint}/{id}/estatus` |
//! | `delete` | DELETE `{endpoint}/{id}` |
//!
//! Every operation is an `async fn`: nothing is sent until the future is
//! polled, and dropping it abandons the result.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{Page, PageRequest, StatusUpdate};

use crate::interceptor::{ErrorInterceptor, InterceptContext, Rethrow};
use crate::transport::{self, ApiRequest, Transport};
use crate::{ClientResult, ResourceEndpoint};

/// HTTP verb used for general edits of a collection
///
/// Collections differ here (rooms replace with PUT, zones edit with
/// PATCH), so it is configured per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMethod {
    #[default]
    Put,
    Patch,
}

impl EditMethod {
    pub fn method(self) -> Method {
        match self {
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
        }
    }
}

/// Client for one resource collection, typed by its record `T`
pub struct ResourceClient<T> {
    transport: Arc<dyn Transport>,
    endpoint: ResourceEndpoint,
    edit_method: EditMethod,
    interceptor: Arc<dyn ErrorInterceptor>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
            edit_method: self.edit_method,
            interceptor: Arc::clone(&self.interceptor),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("endpoint", &self.endpoint)
            .field("edit_method", &self.edit_method)
            .field("interceptor", &self.interceptor)
            .finish_non_exhaustive()
    }
}

impl<T: DeserializeOwned> ResourceClient<T> {
    /// Create a client with PUT edits and the pass-through interceptor
    pub fn new(transport: Arc<dyn Transport>, endpoint: ResourceEndpoint) -> Self {
        Self {
            transport,
            endpoint,
            edit_method: EditMethod::default(),
            interceptor: Arc::new(Rethrow),
            _record: PhantomData,
        }
    }

    /// Set the verb used by [`update`](Self::update)
    pub fn with_edit_method(mut self, edit_method: EditMethod) -> Self {
        self.edit_method = edit_method;
        self
    }

    /// Install the hook applied to status-mutation failures
    pub fn with_interceptor(mut self, interceptor: Arc<dyn ErrorInterceptor>) -> Self {
        self.interceptor = interceptor;
        self
    }

    pub fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    pub fn edit_method(&self) -> EditMethod {
        self.edit_method
    }

    /// Full collection, as the server returns it
    pub async fn list(&self) -> ClientResult<Vec<T>> {
        self.send(ApiRequest::get(self.endpoint.list_path()))
            .await?
            .json()
    }

    /// One page of the collection; bounds are checked by the server
    pub async fn paginate(&self, page: u32, page_size: u32) -> ClientResult<Page<T>> {
        let request = PageRequest::new(page, page_size);
        self.send(ApiRequest::get(self.endpoint.page_path(request)))
            .await?
            .json()
    }

    /// Single record; a 404 surfaces as a status error
    pub async fn get(&self, id: i64) -> ClientResult<T> {
        self.send(ApiRequest::get(self.endpoint.item_path(id)))
            .await?
            .json()
    }

    /// Create a record; identity fields are assigned by the server
    pub async fn create<B: Serialize + ?Sized>(&self, payload: &B) -> ClientResult<T> {
        let request =
            ApiRequest::new(Method::POST, self.endpoint.collection_path()).with_json(payload)?;
        self.send(request).await?.json()
    }

    /// General edit, sent with the configured [`EditMethod`]
    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, payload: &B) -> ClientResult<T> {
        let request = ApiRequest::new(self.edit_method.method(), self.endpoint.item_path(id))
            .with_json(payload)?;
        self.send(request).await?.json()
    }

    /// Change the `estatus` flag; resolves to the server's confirmation text
    pub async fn update_status(&self, id: i64, estatus: i32) -> ClientResult<String> {
        let result = async {
            let request = ApiRequest::new(Method::PATCH, self.endpoint.status_path(id))
                .with_json(&StatusUpdate::new(estatus))?;
            self.send(request).await?.text()
        }
        .await;

        result.map_err(|error| {
            let ctx = InterceptContext {
                endpoint: self.endpoint.as_str(),
                operation: "update_status",
                id: Some(id),
            };
            self.interceptor.intercept(&ctx, error)
        })
    }

    /// Delete a record; the response body is ignored
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.send(ApiRequest::new(Method::DELETE, self.endpoint.item_path(id)))
            .await?;
        Ok(())
    }

    async fn send(&self, request: ApiRequest) -> ClientResult<transport::RawResponse> {
        transport::send(self.transport.as_ref(), request).await
    }
}

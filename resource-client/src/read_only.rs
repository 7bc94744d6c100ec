//! Read-only resource client
//!
//! For collections the API only exposes for reading (shifts, ledger).

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::transport::{self, ApiRequest, Transport};
use crate::{ClientResult, ResourceEndpoint};

/// `list` / `get` accessors over one collection, no mutations
pub struct ReadOnlyResourceClient<T> {
    transport: Arc<dyn Transport>,
    endpoint: ResourceEndpoint,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for ReadOnlyResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ReadOnlyResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOnlyResourceClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl<T: DeserializeOwned> ReadOnlyResourceClient<T> {
    pub fn new(transport: Arc<dyn Transport>, endpoint: ResourceEndpoint) -> Self {
        Self {
            transport,
            endpoint,
            _record: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// GET `{endpoint}/list`
    pub async fn list(&self) -> ClientResult<Vec<T>> {
        transport::send(self.transport.as_ref(), ApiRequest::get(self.endpoint.list_path()))
            .await?
            .json()
    }

    /// GET `{endpoint}/{id}`
    pub async fn get(&self, id: i64) -> ClientResult<T> {
        transport::send(self.transport.as_ref(), ApiRequest::get(self.endpoint.item_path(id)))
            .await?
            .json()
    }

    /// GET an arbitrary path below the API root
    ///
    /// For lookups that don't follow the `{endpoint}/{id}` shape, such as
    /// `ledger/saldo/caja/{id}`. The path is used as given.
    pub async fn get_path<R: DeserializeOwned>(&self, path: impl Into<String>) -> ClientResult<R> {
        transport::send(self.transport.as_ref(), ApiRequest::get(path))
            .await?
            .json()
    }
}

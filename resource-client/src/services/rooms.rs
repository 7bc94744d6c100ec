//! Rooms (salas)

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::resources::ROOMS;
use shared::{Page, Room};

use crate::interceptor::ErrorInterceptor;
use crate::transport::Transport;
use crate::{ClientResult, EditMethod, ResourceClient, ResourceEndpoint};

/// Room CRUD; general edits replace the record with PUT
#[derive(Debug, Clone)]
pub struct RoomService<T = Room> {
    client: ResourceClient<T>,
}

impl<T: DeserializeOwned> RoomService<T> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            client: ResourceClient::new(transport, ResourceEndpoint::from_static(ROOMS))
                .with_edit_method(EditMethod::Put),
        }
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn ErrorInterceptor>) -> Self {
        self.client = self.client.with_interceptor(interceptor);
        self
    }

    /// Underlying generic client
    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    pub async fn list(&self) -> ClientResult<Vec<T>> {
        self.client.list().await
    }

    pub async fn paginate(&self, page: u32, page_size: u32) -> ClientResult<Page<T>> {
        self.client.paginate(page, page_size).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<T> {
        self.client.get(id).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, payload: &B) -> ClientResult<T> {
        self.client.create(payload).await
    }

    /// PUT `salas/{id}`
    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, payload: &B) -> ClientResult<T> {
        self.client.update(id, payload).await
    }

    pub async fn update_status(&self, id: i64, estatus: i32) -> ClientResult<String> {
        self.client.update_status(id, estatus).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(id).await
    }
}

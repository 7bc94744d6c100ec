//! Active shifts (turnos)

use std::sync::Arc;

use serde::de::DeserializeOwned;
use shared::Shift;
use shared::resources::SHIFTS;

use crate::transport::Transport;
use crate::{ClientResult, ReadOnlyResourceClient, ResourceEndpoint};

/// Read-only access to the shifts the server reports as active
#[derive(Debug, Clone)]
pub struct ShiftService<T = Shift> {
    client: ReadOnlyResourceClient<T>,
}

impl<T: DeserializeOwned> ShiftService<T> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            client: ReadOnlyResourceClient::new(transport, ResourceEndpoint::from_static(SHIFTS)),
        }
    }

    pub fn client(&self) -> &ReadOnlyResourceClient<T> {
        &self.client
    }

    /// GET `turnos/list`
    pub async fn list(&self) -> ClientResult<Vec<T>> {
        self.client.list().await
    }

    pub async fn get(&self, id: i64) -> ClientResult<T> {
        self.client.get(id).await
    }
}

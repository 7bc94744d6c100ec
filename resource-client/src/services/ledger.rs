//! Ledger balances

use std::sync::Arc;

use serde::de::DeserializeOwned;
use shared::resources::LEDGER;
use shared::{CashBalance, Record};

use crate::transport::Transport;
use crate::{ClientResult, ReadOnlyResourceClient, ResourceEndpoint};

/// Read-only ledger access
#[derive(Debug, Clone)]
pub struct LedgerService<T = Record> {
    client: ReadOnlyResourceClient<T>,
}

impl<T: DeserializeOwned> LedgerService<T> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            client: ReadOnlyResourceClient::new(transport, ResourceEndpoint::from_static(LEDGER)),
        }
    }

    pub fn client(&self) -> &ReadOnlyResourceClient<T> {
        &self.client
    }

    pub async fn list(&self) -> ClientResult<Vec<T>> {
        self.client.list().await
    }

    pub async fn get(&self, id: i64) -> ClientResult<T> {
        self.client.get(id).await
    }

    /// Balance of one cash register: GET `ledger/saldo/caja/{id}`
    pub async fn cash_balance(&self, caja_id: i64) -> ClientResult<CashBalance> {
        self.client
            .get_path(format!("{}/saldo/caja/{}", LEDGER, caja_id))
            .await
    }
}

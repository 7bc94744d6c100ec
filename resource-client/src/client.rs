//! API client facade
//!
//! Owns one transport and hands out the per-collection services.

use std::sync::Arc;

use axum::Router;

use crate::interceptor::{ErrorInterceptor, Rethrow};
use crate::services::{LedgerService, RoomService, ShiftService, ZoneService};
use crate::transport::{NetworkTransport, OneshotTransport, Transport};
use crate::{ClientConfig, ClientResult};

/// Entry point for the back-office API
///
/// Cloning is cheap; every clone shares the same transport. The services
/// it returns use the default record types.
///
/// # Example
///
/// ```no_run
/// use resource_client::{ApiClient, ClientConfig};
///
/// # async fn example() -> Result<(), resource_client::ClientError> {
/// let api = ApiClient::connect(&ClientConfig::new("https://api.example.com"))?;
/// let page = api.rooms().paginate(0, 20).await?;
/// api.zones().update_status(5, 1).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    interceptor: Arc<dyn ErrorInterceptor>,
}

impl ApiClient {
    /// Client over an arbitrary transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            interceptor: Arc::new(Rethrow),
        }
    }

    /// Client over the network transport
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(Arc::new(NetworkTransport::new(config)?)))
    }

    /// Client dispatching into an in-process router
    pub fn in_process(router: Router) -> Self {
        Self::new(Arc::new(OneshotTransport::new(router)))
    }

    /// Interceptor installed on every mutable service handed out
    pub fn with_interceptor(mut self, interceptor: Arc<dyn ErrorInterceptor>) -> Self {
        self.interceptor = interceptor;
        self
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    pub fn rooms(&self) -> RoomService {
        RoomService::new(self.transport()).with_interceptor(Arc::clone(&self.interceptor))
    }

    pub fn zones(&self) -> ZoneService {
        ZoneService::new(self.transport()).with_interceptor(Arc::clone(&self.interceptor))
    }

    pub fn shifts(&self) -> ShiftService {
        ShiftService::new(self.transport())
    }

    pub fn ledger(&self) -> LedgerService {
        LedgerService::new(self.transport())
    }
}

//! Resource Client - typed client for the back-office REST API
//!
//! A generic resource-collection client ([`ResourceClient`]) and its
//! read-only variant, instantiated for rooms, zones, active shifts and the
//! ledger. Requests go through a [`Transport`]: the network one built on
//! reqwest, or an in-process one dispatching into an axum `Router`.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod interceptor;
pub mod read_only;
pub mod resource;
pub mod services;
pub mod transport;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use endpoint::ResourceEndpoint;
pub use error::{ClientError, ClientResult};
pub use interceptor::{ErrorInterceptor, InterceptContext, LogErrors, Rethrow};
pub use read_only::ReadOnlyResourceClient;
pub use resource::{EditMethod, ResourceClient};
pub use services::{LedgerService, RoomService, ShiftService, ZoneService};
pub use transport::{ApiRequest, NetworkTransport, OneshotTransport, RawResponse, Transport};

// Re-export shared types for convenience
pub use shared::{CashBalance, Page, PageRequest, Record, Room, Shift, StatusUpdate, Zone};

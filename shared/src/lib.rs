//! Shared types for the resource client
//!
//! Wire types exchanged with the back-office REST API: opaque records,
//! server pages, pagination and status-update requests.

pub mod models;
pub mod page;
pub mod request;
pub mod resources;

// Re-exports
pub use models::{CashBalance, Record, Room, Shift, Zone};
pub use page::Page;
pub use request::{PageRequest, StatusUpdate};
pub use serde::{Deserialize, Serialize};

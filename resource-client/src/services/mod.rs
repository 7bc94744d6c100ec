//! Resource services
//!
//! One service per collection the back office works with. Each is a thin
//! instantiation of [`ResourceClient`](crate::ResourceClient) or
//! [`ReadOnlyResourceClient`](crate::ReadOnlyResourceClient) with the
//! collection's endpoint and edit verb filled in.

mod ledger;
mod rooms;
mod shifts;
mod zones;

pub use ledger::LedgerService;
pub use rooms::RoomService;
pub use shifts::ShiftService;
pub use zones::ZoneService;

//! Data models
//!
//! The API owns the record shapes. Every collection is addressed by an
//! integer `id`; the remaining fields travel through unchanged.

pub mod ledger;
pub mod record;

// Re-exports
pub use ledger::CashBalance;
pub use record::Record;

/// Room record (sala)
pub type Room = Record;

/// Zone record (zona)
pub type Zone = Record;

/// Active shift record (turno)
pub type Shift = Record;

//! Resource path segments served by the API

/// Rooms (salas)
pub const ROOMS: &str = "salas";

/// Zones (zonas)
pub const ZONES: &str = "zonas";

/// Active shifts (turnos)
pub const SHIFTS: &str = "turnos";

/// Ledger balances
pub const LEDGER: &str = "ledger";

/// Sub-path of the status mutation: `{resource}/{id}/estatus`
pub const STATUS_SEGMENT: &str = "estatus";

/// Sub-path of the list endpoint: `{resource}/list`
pub const LIST_SEGMENT: &str = "list";

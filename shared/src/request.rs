//! Request types
//!
//! Small request payloads shared by every resource collection.

use serde::{Deserialize, Serialize};

/// Pagination parameters (path-positional: `{resource}/{page}/{page_size}`)
///
/// Not validated client-side; the server is authoritative on bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

/// Status mutation body, serialized exactly as `{"estatus": n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub estatus: i32,
}

impl StatusUpdate {
    pub fn new(estatus: i32) -> Self {
        Self { estatus }
    }
}

//! Resource endpoint and its path shapes

use std::fmt;

use shared::PageRequest;
use shared::resources::{LIST_SEGMENT, STATUS_SEGMENT};

use crate::{ClientError, ClientResult};

/// Base path segment of a resource collection (e.g. "salas")
///
/// Immutable once built. Every path it produces is relative to the API
/// root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceEndpoint {
    segment: String,
}

impl ResourceEndpoint {
    /// Leading and trailing slashes are dropped; an empty segment is an error.
    pub fn new(segment: impl AsRef<str>) -> ClientResult<Self> {
        let segment = segment.as_ref().trim().trim_matches('/');
        if segment.is_empty() {
            return Err(ClientError::Config("resource endpoint is empty".into()));
        }
        Ok(Self {
            segment: segment.to_string(),
        })
    }

    /// Endpoint from a compile-time constant such as [`shared::resources::ROOMS`]
    ///
    /// The constant must already be a bare, non-empty segment.
    pub fn from_static(segment: &'static str) -> Self {
        debug_assert!(!segment.is_empty() && !segment.starts_with('/') && !segment.ends_with('/'));
        Self {
            segment: segment.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.segment
    }

    /// `{endpoint}`
    pub fn collection_path(&self) -> String {
        self.segment.clone()
    }

    /// `{endpoint}/list`
    pub fn list_path(&self) -> String {
        format!("{}/{}", self.segment, LIST_SEGMENT)
    }

    /// `{endpoint}/{page}/{page_size}`
    pub fn page_path(&self, request: PageRequest) -> String {
        format!("{}/{}/{}", self.segment, request.page, request.page_size)
    }

    /// `{endpoint}/{id}`
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.segment, id)
    }

    /// `{endpoint}/{id}/estatus`
    pub fn status_path(&self, id: i64) -> String {
        format!("{}/{}/{}", self.segment, id, STATUS_SEGMENT)
    }
}

impl fmt::Display for ResourceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let salas = ResourceEndpoint::new("salas").unwrap();
        assert_eq!(salas.collection_path(), "salas");
        assert_eq!(salas.list_path(), "salas/list");
        assert_eq!(salas.page_path(PageRequest::new(2, 10)), "salas/2/10");
        assert_eq!(salas.item_path(7), "salas/7");
        assert_eq!(salas.status_path(5), "salas/5/estatus");
    }

    #[test]
    fn test_list_path_has_no_page_parameters() {
        let zonas = ResourceEndpoint::new("zonas").unwrap();
        assert_eq!(zonas.list_path().matches('/').count(), 1);
    }

    #[test]
    fn test_slashes_trimmed() {
        let endpoint = ResourceEndpoint::new("/zonas/").unwrap();
        assert_eq!(endpoint.as_str(), "zonas");
        assert_eq!(endpoint.to_string(), "zonas");
    }

    #[test]
    fn test_from_static() {
        let endpoint = ResourceEndpoint::from_static(shared::resources::LEDGER);
        assert_eq!(endpoint.item_path(3), "ledger/3");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(ResourceEndpoint::new("").is_err());
        assert!(ResourceEndpoint::new(" / ").is_err());
    }
}

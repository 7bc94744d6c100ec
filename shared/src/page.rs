//! Server page object
//!
//! Returned by `GET {resource}/{page}/{page_size}`. The server owns the
//! shape. Items under `content` are typed; every other field, counters
//! included, is kept as sent and read through accessors, so a page
//! serializes back to the body it came from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One slice of a resource collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items of this page, when the server lists them under `content`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<T>>,
    /// Every other server field (`totalElements`, `pageable`, `data`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Page<T> {
    /// Typed items, `None` when the server used another key
    pub fn items(&self) -> Option<&[T]> {
        self.content.as_deref()
    }

    /// Untyped field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    fn u64_field(&self, keys: &[&str]) -> Option<u64> {
        keys.iter().find_map(|key| self.field(key).and_then(Value::as_u64))
    }

    /// Total number of records (`totalElements` or `total`)
    pub fn total_elements(&self) -> Option<u64> {
        self.u64_field(&["totalElements", "total"])
    }

    /// Total number of pages (`totalPages` or `total_pages`)
    pub fn total_pages(&self) -> Option<u64> {
        self.u64_field(&["totalPages", "total_pages"])
    }

    /// Page number as echoed by the server (`number` or `page`)
    pub fn number(&self) -> Option<u64> {
        self.u64_field(&["number", "page"])
    }

    /// Page size as echoed by the server (`size` or `limit`)
    pub fn size(&self) -> Option<u64> {
        self.u64_field(&["size", "limit"])
    }

    /// Whether the server reports more pages after this one
    ///
    /// Falls back to comparing `number` against `total_pages` when `last`
    /// is absent; `None` when the server sent neither.
    pub fn has_next(&self) -> Option<bool> {
        if let Some(last) = self.field("last").and_then(Value::as_bool) {
            return Some(!last);
        }
        match (self.number(), self.total_pages()) {
            (Some(number), Some(total)) => Some(number + 1 < total),
            _ => None,
        }
    }
}

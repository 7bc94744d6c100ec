//! Opaque resource record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A server-defined record identified by an integer id
///
/// Only `id` is typed; every other field (`estatus` included) is kept
/// verbatim so a record read from the server can be sent back without
/// losing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Set a field (builder style)
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up an untyped field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a string field
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    /// `estatus` flag, when the server sent it as an integer
    pub fn estatus(&self) -> Option<i64> {
        self.field("estatus").and_then(Value::as_i64)
    }
}

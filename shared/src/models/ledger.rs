//! Ledger balance model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Balance of a cash register (`GET ledger/saldo/caja/{id}`)
///
/// The balance object is not guaranteed to carry an id, so it is kept as
/// a plain field map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashBalance {
    pub fields: Map<String, Value>,
}

impl CashBalance {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Numeric field, accepting both JSON numbers and numeric strings
    pub fn amount(&self, key: &str) -> Option<f64> {
        match self.field(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

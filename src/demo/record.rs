use serde::{Deserialize, Serialize};

/// Two-field key/value object serialized as `{"id":..,"name":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Record {
    pub id: i64,
    pub name: String,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Compact JSON, no whitespace. Field order follows the struct.
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new(1, "Alice")
    }
}

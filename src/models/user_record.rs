use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{NewUser, Role};

/// A user as returned by the remote collection.
///
/// The identifier travels as `_id` and is kept opaque: numeric ids are
/// turned into their decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl UserRecord {
    /// Replace every editable field, keeping the identifier.
    pub fn apply_fields(&mut self, fields: NewUser) {
        self.name = fields.name;
        self.email = fields.email;
        self.role = fields.role;
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number identifier, got {}",
            other
        ))),
    }
}

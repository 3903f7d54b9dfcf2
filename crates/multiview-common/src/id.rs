use serde::{Deserialize, Serialize};
use std::fmt;

/// Fresh v4 UUID string, used to tag a replayed session in logs.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identifies one mounted player embed. Unique among mounted players and
/// meaningful only for the lifetime of the page session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SlotId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&SlotId> for SlotId {
    fn from(id: &SlotId) -> Self {
        id.clone()
    }
}

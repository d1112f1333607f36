//! Item record.
//!
//! `created_at` is captured once at construction and serialized as an
//! ISO-8601 instant with millisecond precision (`createdAt` on the wire).

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-created named record. Immutable after insertion; the only
/// lifecycle transitions are created and deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Opaque unique id, generated by the store, never caller-supplied.
    pub id: String,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Item {
    /// Build a fresh item with a generated id and current timestamp.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_camel_case_timestamp() {
        let item = Item::new("coffee");
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["name"], "coffee");
        assert!(v["createdAt"].as_str().unwrap().ends_with('Z'));
        assert!(v.get("created_at").is_none());
    }

    #[test]
    fn ids_are_parseable_uuids() {
        let item = Item::new("x");
        assert!(uuid::Uuid::parse_str(&item.id).is_ok());
    }
}

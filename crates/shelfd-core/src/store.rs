//! In-memory item store.
//!
//! The sole stateful component of the system. Backed by `DashMap` so every
//! create/get/remove is atomic with respect to concurrent callers, and a
//! listing never observes a partially-inserted item. Unbounded, no eviction,
//! lifetime = process lifetime.

use dashmap::DashMap;

use crate::error::{Result, ShelfError};
use crate::model::Item;

#[derive(Default)]
pub struct ItemStore {
    items: DashMap<String, Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items currently stored. Order is unspecified.
    pub fn list(&self) -> Vec<Item> {
        self.items.iter().map(|r| r.value().clone()).collect()
    }

    /// Insert a new item under a freshly generated id.
    ///
    /// The store owns id generation; callers never supply one, so concurrent
    /// creates cannot collide.
    pub fn create(&self, name: &str) -> Result<Item> {
        if name.is_empty() {
            return Err(ShelfError::Validation(
                "Field 'name' is required and must be a string.".into(),
            ));
        }
        let item = Item::new(name);
        self.items.insert(item.id.clone(), item.clone());
        tracing::debug!(id = %item.id, "item created");
        Ok(item)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Result<Item> {
        self.items
            .get(id)
            .map(|r| r.value().clone())
            .ok_or_else(|| ShelfError::NotFound("Item not found.".into()))
    }

    /// Remove an item by id. Permanent; no tombstones.
    pub fn remove(&self, id: &str) -> Result<()> {
        self.items
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ShelfError::NotFound("Item not found.".into()))
    }

    /// Current item count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn create_then_get_round_trips() {
        let store = ItemStore::new();
        let created = store.create("coffee").unwrap();
        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "coffee");
    }

    #[test]
    fn created_ids_are_unique() {
        let store = ItemStore::new();
        let a = store.create("a").unwrap();
        let b = store.create("a").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn empty_name_is_rejected_and_not_stored() {
        let store = ItemStore::new();
        let err = store.create("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_is_permanent() {
        let store = ItemStore::new();
        let item = store.create("x").unwrap();
        store.remove(&item.id).unwrap();
        assert_eq!(store.get(&item.id).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(store.remove(&item.id).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn list_tracks_creates_minus_removes() {
        let store = ItemStore::new();
        let a = store.create("a").unwrap();
        let _b = store.create("b").unwrap();
        let c = store.create("c").unwrap();
        store.remove(&a.id).unwrap();
        store.remove(&c.id).unwrap();
        let names: Vec<_> = store.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["b".to_string()]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = ItemStore::new();
        assert_eq!(
            store.get("does-not-exist").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }
}

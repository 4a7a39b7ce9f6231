//! Keyed record collections
//!
//! [`RecordStore`] is the ordered container behind every dashboard list
//! (leads, brokers, plots, inventory, staff, messages, notifications).

use crate::error::StoreError;
use crate::subscribe::{SubscriptionId, Subscribers};
use sitedesk_model::{
    Broker, CostCategory, DocumentFolder, Employee, InventoryItem, Lead, Message, Notification,
    Plot,
};
use std::fmt;
use tracing::debug;

/// A value with a stable key
pub trait Record {
    /// Key type
    type Key: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Key of this record
    fn key(&self) -> Self::Key;
}

/// Change notification from a [`RecordStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent<K> {
    /// Record added
    Inserted(K),
    /// Record changed in place
    Updated(K),
    /// Record removed
    Removed(K),
}

/// Ordered collection of records with unique keys
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    subscribers: Subscribers<RecordEvent<R::Key>>,
}

impl<R: Record> RecordStore<R> {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            subscribers: Subscribers::new(),
        }
    }

    /// Create a store from seed records, keeping their order
    ///
    /// # Errors
    /// [`StoreError::DuplicateKey`] if two seed records share a key.
    pub fn with_records(seed: impl IntoIterator<Item = R>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in seed {
            store.insert(record)?;
        }
        Ok(store)
    }

    fn position(&self, key: &R::Key) -> Option<usize> {
        self.records.iter().position(|record| &record.key() == key)
    }

    /// Check if a key is present
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &R::Key) -> bool {
        self.position(key).is_some()
    }

    /// Append a record
    ///
    /// # Errors
    /// [`StoreError::DuplicateKey`] if the key is already present.
    pub fn insert(&mut self, record: R) -> Result<(), StoreError> {
        let key = record.key();
        if self.contains(&key) {
            return Err(StoreError::DuplicateKey(key.to_string()));
        }
        self.records.push(record);
        self.subscribers.notify(&RecordEvent::Inserted(key));
        Ok(())
    }

    /// Insert a record at the front
    ///
    /// # Errors
    /// [`StoreError::DuplicateKey`] if the key is already present.
    pub fn prepend(&mut self, record: R) -> Result<(), StoreError> {
        let key = record.key();
        if self.contains(&key) {
            return Err(StoreError::DuplicateKey(key.to_string()));
        }
        self.records.insert(0, record);
        self.subscribers.notify(&RecordEvent::Inserted(key));
        Ok(())
    }

    /// Replace the record with the same key; `false` if none exists
    pub fn replace(&mut self, record: R) -> bool {
        let key = record.key();
        let Some(index) = self.position(&key) else {
            debug!(key = %key, "replace ignored: unknown record");
            return false;
        };
        self.records[index] = record;
        self.subscribers.notify(&RecordEvent::Updated(key));
        true
    }

    /// Edit a record in place; `false` if the key is unknown
    ///
    /// The closure must leave the key unchanged.
    pub fn update(&mut self, key: &R::Key, edit: impl FnOnce(&mut R)) -> bool {
        let Some(index) = self.position(key) else {
            debug!(key = %key, "update ignored: unknown record");
            return false;
        };
        edit(&mut self.records[index]);
        self.subscribers.notify(&RecordEvent::Updated(key.clone()));
        true
    }

    /// Remove and return a record
    pub fn remove(&mut self, key: &R::Key) -> Option<R> {
        let index = self.position(key)?;
        let removed = self.records.remove(index);
        self.subscribers.notify(&RecordEvent::Removed(key.clone()));
        Some(removed)
    }

    /// Keep only records matching `keep`, returning how many were removed
    pub fn retain(&mut self, mut keep: impl FnMut(&R) -> bool) -> usize {
        let mut removed = Vec::new();
        self.records.retain(|record| {
            let kept = keep(record);
            if !kept {
                removed.push(record.key());
            }
            kept
        });
        for key in &removed {
            self.subscribers.notify(&RecordEvent::Removed(key.clone()));
        }
        removed.len()
    }

    /// Look up a record
    #[must_use]
    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.position(key).map(|index| &self.records[index])
    }

    /// Records in store order
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    /// Records as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Register a change listener
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&RecordEvent<R::Key>) + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a change listener
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record + fmt::Debug> fmt::Debug for RecordStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

macro_rules! keyed_by {
    ($ty:ty, $field:ident: String) => {
        impl Record for $ty {
            type Key = String;

            fn key(&self) -> String {
                self.$field.clone()
            }
        }
    };
    ($ty:ty, $field:ident: $key:ty) => {
        impl Record for $ty {
            type Key = $key;

            fn key(&self) -> $key {
                self.$field
            }
        }
    };
}

keyed_by!(Lead, id: u32);
keyed_by!(Broker, id: u32);
keyed_by!(Plot, id: String);
keyed_by!(InventoryItem, id: String);
keyed_by!(Employee, id: String);
keyed_by!(Message, id: String);
keyed_by!(Notification, id: String);
keyed_by!(DocumentFolder, id: String);
keyed_by!(CostCategory, name: String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Record for Row {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    fn row(id: u32, label: &'static str) -> Row {
        Row { id, label }
    }

    #[test]
    fn insert_rejects_duplicate_keys() {
        let mut store = RecordStore::with_records([row(1, "a"), row(2, "b")]).unwrap();
        assert_eq!(store.insert(row(1, "c")), Err(StoreError::DuplicateKey("1".into())));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn prepend_puts_record_first() {
        let mut store = RecordStore::with_records([row(1, "a")]).unwrap();
        store.prepend(row(2, "b")).unwrap();
        let ids: Vec<u32> = store.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn replace_and_update_are_silent_for_unknown_keys() {
        let mut store = RecordStore::with_records([row(1, "a")]).unwrap();
        assert!(!store.replace(row(9, "z")));
        assert!(!store.update(&9, |r| r.label = "z"));
        assert!(store.update(&1, |r| r.label = "edited"));
        assert_eq!(store.get(&1).unwrap().label, "edited");
    }

    #[test]
    fn events_cover_each_mutation() {
        let mut store: RecordStore<Row> = RecordStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        store.insert(row(1, "a")).unwrap();
        store.insert(row(2, "b")).unwrap();
        store.replace(row(1, "A"));
        store.remove(&2);
        store.retain(|_| false);

        assert_eq!(
            *seen.borrow(),
            vec![
                RecordEvent::Inserted(1),
                RecordEvent::Inserted(2),
                RecordEvent::Updated(1),
                RecordEvent::Removed(2),
                RecordEvent::Removed(1),
            ]
        );
        assert!(store.is_empty());
    }
}

//! Generic id-keyed record collection.
//!
//! Records live in insertion order (the snapshot serializes as a plain
//! array) and carry small integer ids the collection assigns.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// A record the store can own.
///
/// Ids are store-assigned: `insert` overwrites whatever id the record
/// arrived with. `upsert` trusts the record's own id instead.
pub trait Record {
    /// Collection label used in errors, e.g. "task".
    const ENTITY: &'static str;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
}

/// An id-keyed collection with store-assigned ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// The id the next inserted record gets: one past the largest in use.
    pub fn next_id(&self) -> u32 {
        self.items.iter().map(Record::id).max().map_or(1, |m| m + 1)
    }

    /// Add a record under a fresh id; returns the id.
    pub fn insert(&mut self, mut item: T) -> u32 {
        let id = self.next_id();
        item.set_id(id);
        self.items.push(item);
        id
    }

    /// Add or replace a record under its own id.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter().position(|i| i.id() == item.id()) {
            Some(idx) => self.items[idx] = item,
            None => self.items.push(item),
        }
    }

    pub fn get(&self, id: u32) -> StoreResult<&T> {
        self.items
            .iter()
            .find(|i| i.id() == id)
            .ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }

    pub fn get_mut(&mut self, id: u32) -> StoreResult<&mut T> {
        self.items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }

    /// Replace an existing record (matched by the record's id).
    pub fn replace(&mut self, item: T) -> StoreResult<()> {
        let slot = self.get_mut(item.id())?;
        *slot = item;
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> StoreResult<T> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        Ok(self.items.remove(idx))
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

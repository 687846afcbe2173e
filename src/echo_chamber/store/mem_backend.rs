use super::backend::StorageBackend;
use crate::error::{EchoError, Result};
use crate::model::Collection;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
/// This keeps `&self` on every `StorageBackend` method, like the filesystem backend.
#[derive(Default)]
pub struct MemBackend {
    containers: RefCell<HashMap<Collection, Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant arbitrary container content (e.g. corrupt JSON).
    pub fn set_raw(&self, collection: Collection, bytes: &[u8]) {
        self.containers
            .borrow_mut()
            .insert(collection, bytes.to_vec());
    }

    /// Test helper to inspect what was persisted.
    pub fn raw(&self, collection: Collection) -> Option<Vec<u8>> {
        self.containers.borrow().get(&collection).cloned()
    }

    /// Number of successful writes, across all containers.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    fn collection_exists(&self, collection: Collection) -> bool {
        self.containers.borrow().contains_key(&collection)
    }

    fn read_collection(&self, collection: Collection) -> Result<Option<Vec<u8>>> {
        Ok(self.raw(collection))
    }

    fn write_collection(&self, collection: Collection, bytes: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(EchoError::Store("Simulated write error".to_string()));
        }
        self.set_raw(collection, bytes);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

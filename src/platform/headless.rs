//! In-memory capability implementations for native builds.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::cell::RefCell;
use std::collections::HashMap;

use super::{KeyValueStore, Navigator, StorageError};

/// `localStorage` stand-in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every write, like a browser with storage disabled.
    pub fn read_only() -> Self {
        Self { entries: RefCell::default(), read_only: true }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Write directly, bypassing `read_only`. Used to seed state.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write { key: key.to_owned(), detail: "read-only store".to_owned() });
        }
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Navigator that records redirects instead of loading pages.
#[derive(Debug)]
pub struct HeadlessNavigator {
    path: RefCell<String>,
    redirects: RefCell<Vec<String>>,
}

impl HeadlessNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: RefCell::new(path.to_owned()), redirects: RefCell::default() }
    }

    /// Every redirect target so far, oldest first.
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn set_path(&self, path: &str) {
        *self.path.borrow_mut() = path.to_owned();
    }
}

impl Navigator for HeadlessNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn redirect(&self, path: &str) {
        log::debug!("headless redirect to {path}");
        self.redirects.borrow_mut().push(path.to_owned());
        self.set_path(path);
    }
}

//! Durable cart storage.
//!
//! The store persists the whole line-item list as JSON under one fixed key
//! after every mutation. Storage is an injected collaborator so the store's
//! logic runs against an in-memory fake in tests and a file on disk in the
//! app shell.

use crate::error::StorageError;
use aurora_commerce::cart::CartLineItem;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Fixed key the cart is stored under.
pub const CART_STORAGE_KEY: &str = "hotelCart";

/// A durable key-value slot holding the serialized cart.
pub trait CartStorage {
    /// Read the stored cart.
    ///
    /// Returns `Ok(None)` when the slot is absent (never used, or cleared).
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError>;

    /// Replace the stored cart with the given items.
    fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError>;

    /// Delete the slot entirely. Clearing an absent slot is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory storage backend.
///
/// Holds the serialized JSON rather than the items themselves, so tests
/// exercise the same serialization path as a real backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the slot currently holds a value.
    pub fn has_entry(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Raw serialized contents, for assertions.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// File-backed storage: one JSON file per cart, the desktop analogue of a
/// browser's localStorage entry.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Store the cart at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the cart under `CART_STORAGE_KEY.json` in the given directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let mut path = dir.into();
        path.push(format!("{}.json", CART_STORAGE_KEY));
        Self { path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_commerce::catalog::{AcType, Room};
    use aurora_commerce::money::{Currency, Money};

    fn item() -> CartLineItem {
        let room = Room::new("Standard", AcType::Ac, Money::new(9000, Currency::USD));
        CartLineItem::new(
            room.snapshot(),
            "2024-05-01".parse().unwrap(),
            "2024-05-04".parse().unwrap(),
            2,
            0,
        )
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let items = vec![item()];
        storage.save(&items).unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), items);

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
        assert!(!storage.has_entry());
    }

    #[test]
    fn test_memory_storage_corrupt_slot() {
        let storage = MemoryStorage::new();
        *storage.slot.borrow_mut() = Some("not json".to_string());
        assert!(storage.load().is_err());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = std::env::temp_dir().join(format!("aurora-cart-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let storage = JsonFileStorage::in_dir(&dir);

        assert!(storage.load().unwrap().is_none());

        let items = vec![item(), item()];
        storage.save(&items).unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), items);

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
        // Clearing twice is fine.
        storage.clear().unwrap();

        fs::remove_dir_all(&dir).ok();
    }
}

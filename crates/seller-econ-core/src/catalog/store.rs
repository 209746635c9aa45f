use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use super::record::ProductRecord;
use crate::SellerEconResult;

/// Logical keys of the two persisted catalog layers. They are stored
/// independently so an external load never destroys user-entered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreKey {
    /// Full-replacement catalog from a bundled fetch or user file load.
    External,
    /// Records appended by the user on top of the built-in defaults.
    UserAdded,
}

impl StoreKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::External => "products.external",
            StoreKey::UserAdded => "products.user_added",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence boundary for catalog layers.
pub trait ProductStore {
    fn read(&self, key: StoreKey) -> SellerEconResult<Option<Vec<ProductRecord>>>;
    fn write(&self, key: StoreKey, records: &[ProductRecord]) -> SellerEconResult<()>;
}

/// In-memory store. Single-threaded, like the rest of the pipeline.
#[derive(Debug, Default)]
pub struct MemoryStore {
    layers: RefCell<HashMap<StoreKey, Vec<ProductRecord>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl ProductStore for MemoryStore {
    fn read(&self, key: StoreKey) -> SellerEconResult<Option<Vec<ProductRecord>>> {
        Ok(self.layers.borrow().get(&key).cloned())
    }

    fn write(&self, key: StoreKey, records: &[ProductRecord]) -> SellerEconResult<()> {
        self.layers.borrow_mut().insert(key, records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::Warehouse;
    use rust_decimal_macros::dec;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read(StoreKey::External).unwrap(), None);

        let records = vec![ProductRecord::new("Чайник", dec!(14), Warehouse::Fbo, "")];
        store.write(StoreKey::External, &records).unwrap();
        assert_eq!(store.read(StoreKey::External).unwrap(), Some(records));
        assert_eq!(store.read(StoreKey::UserAdded).unwrap(), None);
    }
}

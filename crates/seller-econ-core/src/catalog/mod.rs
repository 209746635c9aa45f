//! Product catalog pipeline: layered loading, tabular normalization,
//! dedup on import, persistence, and substring search.

pub mod defaults;
pub mod import;
pub mod loader;
pub mod normalize;
pub mod record;
pub mod search;
pub mod store;

pub use import::{import_records, parse_payload, ImportFormat, ImportOutcome};
pub use loader::{install_external, load_catalog, BundledSource, NoBundledData};
pub use normalize::{normalize_rows, SheetRow, DEFAULT_COMMISSION};
pub use record::{ProductRecord, Warehouse, MIN_NAME_CHARS};
pub use search::{search, SearchDebouncer, DEBOUNCE_WINDOW, MAX_RESULTS, MIN_QUERY_CHARS};
pub use store::{MemoryStore, ProductStore, StoreKey};

use std::collections::HashSet;

use crate::SellerEconResult;

/// The merged product catalog: an owned snapshot assembled by
/// [`load_catalog`] and replaced wholesale, never mutated in place.
/// Invariant: no two records share a case-insensitively equal name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    /// Build a catalog, keeping the first record for every name and
    /// dropping later duplicates.
    pub fn new(records: Vec<ProductRecord>) -> Catalog {
        let mut seen: HashSet<String> = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| seen.insert(record.name_key()))
            .collect();
        Catalog { records }
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive membership check.
    pub fn contains_name(&self, name: &str) -> bool {
        let key = name.trim().to_lowercase();
        self.records.iter().any(|record| record.name_key() == key)
    }

    /// Append a record to the persisted user layer iff its name is new
    /// across the merged catalog. Returns whether the insert happened.
    /// The in-memory snapshot is not touched; callers reload.
    pub fn add_record(
        &self,
        store: &dyn ProductStore,
        record: ProductRecord,
    ) -> SellerEconResult<bool> {
        if self.contains_name(&record.name) {
            return Ok(false);
        }

        let mut layer = store.read(StoreKey::UserAdded)?.unwrap_or_default();
        // The layer can hold names the current snapshot does not (an
        // external load may be shadowing them).
        let key = record.name_key();
        if layer.iter().any(|existing| existing.name_key() == key) {
            return Ok(false);
        }

        layer.push(record);
        store.write(StoreKey::UserAdded, &layer)?;
        Ok(true)
    }
}

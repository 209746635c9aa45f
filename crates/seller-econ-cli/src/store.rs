use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use seller_econ_core::catalog::{BundledSource, ProductRecord, ProductStore, SheetRow, StoreKey};
use seller_econ_core::{SellerEconError, SellerEconResult};

/// JSON-file key-value store: one file per catalog layer under the data
/// directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: &Path) -> JsonFileStore {
        JsonFileStore {
            dir: dir.to_path_buf(),
        }
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

fn storage_error(key: StoreKey, reason: impl ToString) -> SellerEconError {
    SellerEconError::Storage {
        key: key.as_str().to_string(),
        reason: reason.to_string(),
    }
}

impl ProductStore for JsonFileStore {
    fn read(&self, key: StoreKey) -> SellerEconResult<Option<Vec<ProductRecord>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(|e| storage_error(key, e))?;
        let records = serde_json::from_str(&contents).map_err(|e| storage_error(key, e))?;
        Ok(Some(records))
    }

    fn write(&self, key: StoreKey, records: &[ProductRecord]) -> SellerEconResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| storage_error(key, e))?;
        let contents =
            serde_json::to_string_pretty(records).map_err(|e| storage_error(key, e))?;
        fs::write(self.path_for(key), contents).map_err(|e| storage_error(key, e))?;
        Ok(())
    }
}

/// Bundled data probed from the data directory: a ready-made product list
/// (`products.json`) and a first-sheet CSV export of the commission
/// workbook (`commission.csv`). Parsing raw workbook bytes into rows is
/// the sheet exporter's job, not ours.
pub struct DirBundledSource {
    dir: PathBuf,
}

impl DirBundledSource {
    pub fn new(dir: &Path) -> DirBundledSource {
        DirBundledSource {
            dir: dir.to_path_buf(),
        }
    }
}

impl BundledSource for DirBundledSource {
    fn product_list(&self) -> Option<Vec<ProductRecord>> {
        let contents = fs::read_to_string(self.dir.join("products.json")).ok()?;
        match serde_json::from_str::<Vec<ProductRecord>>(&contents) {
            Ok(products) => Some(products),
            Err(e) => {
                debug!("bundled products.json unreadable: {e}");
                None
            }
        }
    }

    fn sheet_rows(&self) -> Option<Vec<SheetRow>> {
        let raw = fs::read(self.dir.join("commission.csv")).ok()?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_slice());

        let mut rows = Vec::new();
        for record in reader.records() {
            match record {
                Ok(cells) => rows.push(SheetRow::Cells(
                    cells.iter().map(|c| c.to_string()).collect(),
                )),
                Err(e) => debug!("skipping unreadable sheet row: {e}"),
            }
        }
        if rows.is_empty() {
            None
        } else {
            Some(rows)
        }
    }
}

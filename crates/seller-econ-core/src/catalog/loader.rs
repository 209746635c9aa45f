use log::debug;

use super::defaults::default_products;
use super::normalize::{normalize_rows, SheetRow};
use super::record::ProductRecord;
use super::store::{ProductStore, StoreKey};
use super::Catalog;
use crate::SellerEconResult;

/// Read-only source of bundled catalog data probed at startup. Absence of
/// either artefact is a normal condition, not an error.
pub trait BundledSource {
    /// A ready-made structured product list, if bundled.
    fn product_list(&self) -> Option<Vec<ProductRecord>>;

    /// First sheet of a bundled commission workbook, if bundled.
    fn sheet_rows(&self) -> Option<Vec<SheetRow>>;
}

/// Source with no bundled data; loading starts at the persisted layers.
#[derive(Debug, Default)]
pub struct NoBundledData;

impl BundledSource for NoBundledData {
    fn product_list(&self) -> Option<Vec<ProductRecord>> {
        None
    }

    fn sheet_rows(&self) -> Option<Vec<SheetRow>> {
        None
    }
}

/// Assemble the merged catalog. Sources are tried in precedence order and
/// the first that yields records wins; every failure falls through
/// silently. Never fails — the built-in defaults are the terminal
/// fallback.
pub fn load_catalog(store: &dyn ProductStore, source: &dyn BundledSource) -> Catalog {
    if let Some(products) = source.product_list().filter(|p| !p.is_empty()) {
        debug!("loaded {} products from bundled list", products.len());
        persist_external(store, &products);
        return Catalog::new(products);
    }

    if let Some(rows) = source.sheet_rows() {
        let products = normalize_rows(&rows);
        if !products.is_empty() {
            debug!("bundled sheet yielded {} products", products.len());
            persist_external(store, &products);
            return Catalog::new(products);
        }
    }

    match store.read(StoreKey::External) {
        Ok(Some(products)) if !products.is_empty() => {
            debug!("loaded {} products from the external layer", products.len());
            return Catalog::new(products);
        }
        Ok(_) => {}
        Err(e) => debug!("external layer unreadable: {e}"),
    }

    match store.read(StoreKey::UserAdded) {
        Ok(Some(added)) if !added.is_empty() => {
            debug!("merging {} user-added products into the defaults", added.len());
            let mut merged = default_products();
            merged.extend(added);
            return Catalog::new(merged);
        }
        Ok(_) => {}
        Err(e) => debug!("user-added layer unreadable: {e}"),
    }

    debug!("falling back to the built-in catalog");
    Catalog::new(default_products())
}

fn persist_external(store: &dyn ProductStore, products: &[ProductRecord]) {
    if let Err(e) = store.write(StoreKey::External, products) {
        debug!("could not persist the external layer: {e}");
    }
}

/// Install a full-replacement catalog (user file load or paste): the
/// records overwrite the external layer as a whole. Returns how many were
/// written.
pub fn install_external(
    store: &dyn ProductStore,
    records: Vec<ProductRecord>,
) -> SellerEconResult<usize> {
    let catalog = Catalog::new(records);
    store.write(StoreKey::External, catalog.records())?;
    Ok(catalog.len())
}

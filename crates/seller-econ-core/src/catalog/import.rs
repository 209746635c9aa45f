//! Explicit user imports: JSON arrays and delimited text, with partial
//! success. Invalid rows are counted and reported, never fatal to the
//! rest of the batch.

use log::info;
use rust_decimal::Decimal;
use serde_json::Value;

use super::record::{usable_name, ProductRecord, Warehouse};
use super::store::ProductStore;
use super::Catalog;
use crate::{SellerEconError, SellerEconResult};

/// Delimiter for text imports, one record per line.
const FIELD_DELIMITER: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    DelimitedText,
}

#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub accepted: Vec<ProductRecord>,
    pub rejected: usize,
}

/// Key spellings accepted in JSON imports, per field.
const NAME_KEYS: &[&str] = &["name", "Название", "product_name"];
const COMMISSION_KEYS: &[&str] = &["commission", "Комиссия", "commission_rate", "%"];
const WAREHOUSE_KEYS: &[&str] = &["warehouse", "Склад", "warehouse_type"];
const CATEGORY_KEYS: &[&str] = &["category", "Категория", "product_category"];

/// Parse a payload into validated records, counting rejects. Duplicate
/// handling is left to the caller. A syntactically unreadable payload is
/// the only error; bad rows are tallied, not thrown.
pub fn parse_payload(
    payload: &str,
    format: ImportFormat,
) -> SellerEconResult<(Vec<ProductRecord>, usize)> {
    match format {
        ImportFormat::Json => parse_json(payload),
        ImportFormat::DelimitedText => Ok(parse_delimited(payload)),
    }
}

/// Import a payload: every valid, non-duplicate record is appended to the
/// persisted user layer through [`Catalog::add_record`]; duplicates count
/// as rejected even though they are individually valid.
pub fn import_records(
    catalog: &Catalog,
    store: &dyn ProductStore,
    payload: &str,
    format: ImportFormat,
) -> SellerEconResult<ImportOutcome> {
    let (candidates, mut rejected) = parse_payload(payload, format)?;

    let mut accepted = Vec::new();
    for record in candidates {
        if catalog.add_record(store, record.clone())? {
            accepted.push(record);
        } else {
            rejected += 1;
        }
    }

    info!("import: {} accepted, {} rejected", accepted.len(), rejected);
    Ok(ImportOutcome { accepted, rejected })
}

fn parse_json(payload: &str) -> SellerEconResult<(Vec<ProductRecord>, usize)> {
    let rows: Vec<Value> = serde_json::from_str(payload.trim()).map_err(|e| {
        SellerEconError::MalformedImport(format!("expected a JSON array of products: {e}"))
    })?;

    let mut accepted = Vec::new();
    let mut rejected = 0usize;
    for row in &rows {
        match candidate_from_json(row) {
            Some(record) => accepted.push(record),
            None => rejected += 1,
        }
    }
    Ok((accepted, rejected))
}

fn parse_delimited(payload: &str) -> (Vec<ProductRecord>, usize) {
    let mut accepted = Vec::new();
    let mut rejected = 0usize;

    for line in payload.lines().filter(|l| !l.trim().is_empty()) {
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
        if parts.len() < 3 {
            rejected += 1;
            continue;
        }
        match candidate(
            parts[0],
            parts[1].parse::<Decimal>().ok(),
            parts[2],
            parts.get(3).copied().unwrap_or(""),
        ) {
            Some(record) => accepted.push(record),
            None => rejected += 1,
        }
    }
    (accepted, rejected)
}

/// Validate one candidate: usable name, commission inside (0, 100], and a
/// warehouse that is either blank (defaults to FBO) or a known spelling.
fn candidate(
    name: &str,
    commission: Option<Decimal>,
    warehouse: &str,
    category: &str,
) -> Option<ProductRecord> {
    if !usable_name(name) {
        return None;
    }
    let commission = match commission {
        Some(c) if c > Decimal::ZERO && c <= Decimal::ONE_HUNDRED => c,
        _ => return None,
    };
    let warehouse = if warehouse.trim().is_empty() {
        Warehouse::Fbo
    } else {
        Warehouse::parse(warehouse)?
    };
    Some(ProductRecord::new(name, commission, warehouse, category))
}

fn candidate_from_json(row: &Value) -> Option<ProductRecord> {
    let map = row.as_object()?;

    let lookup = |keys: &[&str]| -> Option<&Value> {
        keys.iter().find_map(|k| map.get(*k))
    };

    let name = match lookup(NAME_KEYS)? {
        Value::String(s) => s.clone(),
        _ => return None,
    };
    let commission = lookup(COMMISSION_KEYS).and_then(coerce_decimal);
    let warehouse = match lookup(WAREHOUSE_KEYS) {
        Some(Value::String(s)) => s.clone(),
        Some(_) => return None,
        None => String::new(),
    };
    let category = match lookup(CATEGORY_KEYS) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };

    candidate(&name, commission, &warehouse, &category)
}

fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

//! Normalization of heterogeneous sheet rows into [`ProductRecord`]s.
//!
//! Sellers hand over commission tables in whatever shape their tooling
//! produced: bare positional rows, rows keyed by spreadsheet column
//! letters, or rows keyed by arbitrary (often localized) header names.
//! The batch shape is decided once from the first row; each row is then
//! run through an ordered list of extraction strategies.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::record::{usable_name, ProductRecord, Warehouse};

/// Commission applied when a cell is missing, non-numeric or non-positive.
/// Downstream consumers treat "missing" and "exactly 15.0" as the same
/// thing, so this value must not drift.
pub const DEFAULT_COMMISSION: Decimal = dec!(15.0);

/// Header spellings recognised for the product name.
const NAME_ALIASES: &[&str] = &["Название", "Название товара", "Товар", "Name", "Product"];

/// Header spellings recognised for the commission percentage.
const COMMISSION_ALIASES: &[&str] = &["Комиссия", "Комиссия ВБ", "%", "Commission"];

/// One row of the first sheet of a workbook, as handed over by the
/// tabular file parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetRow {
    /// Bare positional cells, column A first.
    Cells(Vec<String>),
    /// Label → cell pairs in sheet insertion order.
    Fields(Vec<(String, String)>),
}

impl SheetRow {
    fn cell(&self, idx: usize) -> Option<&str> {
        match self {
            SheetRow::Cells(cells) => cells.get(idx).map(String::as_str),
            SheetRow::Fields(_) => None,
        }
    }

    /// Value under an exactly matching label.
    fn labeled(&self, label: &str) -> Option<&str> {
        match self {
            SheetRow::Cells(_) => None,
            SheetRow::Fields(fields) => fields
                .iter()
                .find(|(k, _)| k.trim() == label)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// Value at a position in insertion order.
    fn value_at(&self, idx: usize) -> Option<&str> {
        match self {
            SheetRow::Cells(_) => None,
            SheetRow::Fields(fields) => fields.get(idx).map(|(_, v)| v.as_str()),
        }
    }
}

/// Batch shape, decided once from the first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowShape {
    /// `["", "Футболка", "15.5", ...]`
    Positional,
    /// `{"A": "", "B": "Футболка", "C": "15.5", ...}`
    ColumnLabeled,
    /// `{"Артикул": "...", "Название": "Футболка", ...}`
    Freeform,
}

fn detect_shape(first: &SheetRow) -> RowShape {
    match first {
        SheetRow::Cells(_) => RowShape::Positional,
        SheetRow::Fields(fields) => {
            let single_letter = !fields.is_empty()
                && fields.iter().all(|(k, _)| {
                    let k = k.trim();
                    k.chars().count() == 1
                        && k.chars().next().is_some_and(|c| c.is_ascii_uppercase())
                });
            if single_letter {
                RowShape::ColumnLabeled
            } else {
                RowShape::Freeform
            }
        }
    }
}

/// Normalize a batch of sheet rows. Rows without a usable name are
/// dropped; everything else gets trimmed fields, the default commission
/// where parsing fails and an FBO warehouse where the cell is blank.
pub fn normalize_rows(rows: &[SheetRow]) -> Vec<ProductRecord> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let shape = detect_shape(first);
    rows.iter().filter_map(|row| extract(row, shape)).collect()
}

fn extract(row: &SheetRow, shape: RowShape) -> Option<ProductRecord> {
    match shape {
        // Name lives in column B, commission in C, warehouse in D,
        // category in E. Column A is an article/running number.
        RowShape::ColumnLabeled => build_record(
            row.labeled("B"),
            row.labeled("C"),
            row.labeled("D"),
            row.labeled("E"),
        ),
        RowShape::Positional => {
            build_record(row.cell(1), row.cell(2), row.cell(3), row.cell(4))
        }
        RowShape::Freeform => extract_freeform(row),
    }
}

/// Freeform rows: second and third values by insertion order first, then
/// known header aliases when that leaves the name unusable or the
/// commission at its default.
fn extract_freeform(row: &SheetRow) -> Option<ProductRecord> {
    let mut name = row.value_at(1).unwrap_or("").trim().to_string();
    let mut commission = parse_commission(row.value_at(2));

    if !usable_name(&name) {
        if let Some(aliased) = NAME_ALIASES.iter().find_map(|a| row.labeled(a)) {
            name = aliased.trim().to_string();
        }
    }
    if commission == DEFAULT_COMMISSION {
        if let Some(aliased) = COMMISSION_ALIASES.iter().find_map(|a| row.labeled(a)) {
            commission = parse_commission(Some(aliased));
        }
    }

    if !usable_name(&name) {
        return None;
    }
    Some(ProductRecord::new(
        &name,
        commission,
        Warehouse::Fbo,
        "",
    ))
}

fn build_record(
    name: Option<&str>,
    commission: Option<&str>,
    warehouse: Option<&str>,
    category: Option<&str>,
) -> Option<ProductRecord> {
    let name = name.unwrap_or("").trim();
    if !usable_name(name) {
        return None;
    }
    let commission = parse_commission(commission);
    let warehouse = warehouse.and_then(Warehouse::parse).unwrap_or_default();
    let category = category.unwrap_or("");
    Some(ProductRecord::new(name, commission, warehouse, category))
}

fn parse_commission(cell: Option<&str>) -> Decimal {
    let Some(raw) = cell else {
        return DEFAULT_COMMISSION;
    };
    match raw.trim().parse::<Decimal>() {
        Ok(value) if value > Decimal::ZERO => value,
        _ => DEFAULT_COMMISSION,
    }
}

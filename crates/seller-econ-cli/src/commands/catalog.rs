use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::path::Path;

use seller_econ_core::catalog::{
    import_records, install_external, load_catalog, parse_payload, search, ImportFormat,
    ProductRecord, Warehouse,
};

use crate::input;
use crate::store::{DirBundledSource, JsonFileStore};

#[derive(Args)]
pub struct SearchArgs {
    /// Name or category substring, at least 2 characters
    pub query: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Product name, at least 2 characters
    #[arg(long)]
    pub name: String,

    /// Commission percent, in (0, 100]
    #[arg(long)]
    pub commission: Decimal,

    /// Warehouse type (FBO/FBS; Cyrillic spellings accepted)
    #[arg(long, default_value = "FBO")]
    pub warehouse: String,

    /// Product category
    #[arg(long, default_value = "")]
    pub category: String,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the payload file; piped stdin is used when omitted
    #[arg(long)]
    pub file: Option<String>,

    /// Payload format
    #[arg(long, value_enum, default_value = "json")]
    pub format: PayloadFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PayloadFormat {
    Json,
    Csv,
}

impl From<PayloadFormat> for ImportFormat {
    fn from(format: PayloadFormat) -> ImportFormat {
        match format {
            PayloadFormat::Json => ImportFormat::Json,
            PayloadFormat::Csv => ImportFormat::DelimitedText,
        }
    }
}

#[derive(Args)]
pub struct LoadFileArgs {
    /// JSON product list or delimited sheet export
    pub file: String,

    /// Payload format; inferred from the extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<PayloadFormat>,
}

pub fn run_search(args: SearchArgs, data_dir: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let store = JsonFileStore::new(data_dir);
    let catalog = load_catalog(&store, &DirBundledSource::new(data_dir));

    let matches = search(&catalog, &args.query);
    Ok(json!({
        "query": args.query.trim(),
        "count": matches.len(),
        "matches": matches,
    }))
}

pub fn run_add(args: AddArgs, data_dir: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let warehouse: Warehouse = args.warehouse.parse()?;
    let record = ProductRecord::new(&args.name, args.commission, warehouse, &args.category);
    record.validate()?;

    let store = JsonFileStore::new(data_dir);
    let catalog = load_catalog(&store, &DirBundledSource::new(data_dir));

    let added = catalog.add_record(&store, record.clone())?;
    Ok(json!({
        "added": added,
        "reason": if added { Value::Null } else { json!("duplicate name") },
        "record": record,
    }))
}

pub fn run_import(args: ImportArgs, data_dir: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let payload = match args.file {
        Some(ref path) => input::file::read_text(path)?,
        None => input::stdin::read_raw()?
            .ok_or("--file is required (or pipe the payload on stdin)")?,
    };

    let store = JsonFileStore::new(data_dir);
    let catalog = load_catalog(&store, &DirBundledSource::new(data_dir));

    let outcome = import_records(&catalog, &store, &payload, args.format.into())?;
    Ok(json!({
        "accepted": outcome.accepted.len(),
        "rejected": outcome.rejected,
        "records": outcome.accepted,
    }))
}

pub fn run_load_file(
    args: LoadFileArgs,
    data_dir: &Path,
) -> Result<Value, Box<dyn std::error::Error>> {
    let format = args.format.unwrap_or_else(|| infer_format(&args.file));
    let mut payload = input::file::read_text(&args.file)?;

    if matches!(format, PayloadFormat::Csv) {
        payload = strip_header_line(&payload);
    }

    let (records, rejected) = parse_payload(&payload, format.into())?;
    if records.is_empty() {
        return Err("the file contains no valid product rows".into());
    }

    let store = JsonFileStore::new(data_dir);
    let loaded = install_external(&store, records)?;
    Ok(json!({
        "loaded": loaded,
        "rejected": rejected,
    }))
}

pub fn run_catalog(data_dir: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let store = JsonFileStore::new(data_dir);
    let catalog = load_catalog(&store, &DirBundledSource::new(data_dir));
    Ok(json!({
        "count": catalog.len(),
        "products": catalog.records(),
    }))
}

fn infer_format(path: &str) -> PayloadFormat {
    if path.to_lowercase().ends_with(".csv") {
        PayloadFormat::Csv
    } else {
        PayloadFormat::Json
    }
}

/// Sheet exports often start with a header line; drop it so the header
/// does not inflate the rejection tally.
fn strip_header_line(payload: &str) -> String {
    let mut lines = payload.lines();
    match lines.next() {
        Some(first) => {
            let lowered = first.to_lowercase();
            if lowered.contains("name") || lowered.contains("название") {
                lines.collect::<Vec<_>>().join("\n")
            } else {
                payload.to_string()
            }
        }
        None => payload.to_string(),
    }
}

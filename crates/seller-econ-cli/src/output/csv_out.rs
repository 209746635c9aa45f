use serde_json::Value;
use std::io;

use super::{product_array, scalar};

/// Write output as CSV to stdout: product payloads as catalog rows,
/// economics envelopes flattened to section/field/value.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(products) = product_array(value) {
        let _ = wtr.write_record(["name", "commission", "warehouse", "category"]);
        for product in products {
            let _ = wtr.write_record([
                scalar(&product["name"]),
                scalar(&product["commission"]),
                scalar(&product["warehouse"]),
                product.get("category").map(scalar).unwrap_or_default(),
            ]);
        }
    } else if let Some(result) = value.get("result") {
        let _ = wtr.write_record(["section", "field", "value"]);
        write_section(&mut wtr, "unit", result.get("unit"));
        write_section(&mut wtr, "totals", result.get("totals"));
    } else {
        let _ = wtr.write_record(["field", "value"]);
        if let Some(map) = value.as_object() {
            for (key, val) in map {
                let _ = wtr.write_record([key.clone(), scalar(val)]);
            }
        }
    }

    let _ = wtr.flush();
}

fn write_section(
    wtr: &mut csv::Writer<io::StdoutLock<'_>>,
    section: &str,
    figures: Option<&Value>,
) {
    let Some(map) = figures.and_then(Value::as_object) else {
        return;
    };
    for (key, val) in map {
        if key == "scenarios" {
            continue;
        }
        let _ = wtr.write_record([section.to_string(), key.clone(), scalar(val)]);
    }
    if let Some(Value::Array(scenarios)) = map.get("scenarios") {
        for outcome in scenarios {
            let name = scalar(&outcome["scenario"]);
            let _ = wtr.write_record([
                section.to_string(),
                format!("tax_{name}"),
                scalar(&outcome["tax_amount"]),
            ]);
            let _ = wtr.write_record([
                section.to_string(),
                format!("profit_after_tax_{name}"),
                scalar(&outcome["profit_after_tax"]),
            ]);
        }
    }
}

use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{product_array, scalar};

/// Format command output as tables: product payloads get a catalog grid,
/// economics envelopes get per-unit and totals sections with the scenario
/// rows spelled out.
pub fn print_table(value: &Value) {
    if let Some(products) = product_array(value) {
        print_products(products);
        print_counters(value);
        return;
    }
    if let Some(result) = value.get("result") {
        print_breakdown(result);
        print_warnings(value);
        return;
    }
    if value.get("timestamp").is_some() && value.get("results").is_some() {
        print_snapshot(value);
        return;
    }
    print_flat(value);
}

fn print_products(products: &[Value]) {
    if products.is_empty() {
        println!("No products.");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(["Name", "Commission %", "Warehouse", "Category"]);
    for product in products {
        builder.push_record([
            scalar(&product["name"]),
            scalar(&product["commission"]),
            scalar(&product["warehouse"]),
            product
                .get("category")
                .map(scalar)
                .unwrap_or_default(),
        ]);
    }
    println!("{}", Table::from(builder));
}

fn print_breakdown(result: &Value) {
    if let Some(unit) = result.get("unit") {
        print_section("Per unit", unit);
    }
    if let Some(totals) = result.get("totals") {
        print_section("Totals", totals);
    }
}

fn print_section(title: &str, figures: &Value) {
    let Some(map) = figures.as_object() else {
        return;
    };
    let mut builder = Builder::default();
    builder.push_record([title.to_string(), "Value".to_string()]);
    for (key, val) in map {
        if key == "scenarios" {
            continue;
        }
        builder.push_record([key.clone(), scalar(val)]);
    }
    if let Some(Value::Array(scenarios)) = figures.get("scenarios") {
        for outcome in scenarios {
            let name = scalar(&outcome["scenario"]);
            builder.push_record([format!("tax ({name})"), scalar(&outcome["tax_amount"])]);
            builder.push_record([
                format!("profit after tax ({name})"),
                scalar(&outcome["profit_after_tax"]),
            ]);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_snapshot(value: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["timestamp".to_string(), scalar(&value["timestamp"])]);
    if let Some(results) = value["results"].as_object() {
        for (key, val) in results {
            builder.push_record([key.clone(), scalar(val)]);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_flat(value: &Value) {
    match value.as_object() {
        Some(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                builder.push_record([key.clone(), scalar(val)]);
            }
            println!("{}", Table::from(builder));
        }
        None => println!("{}", value),
    }
}

fn print_counters(value: &Value) {
    for key in ["count", "accepted", "rejected", "loaded"] {
        if let Some(n) = value.get(key) {
            println!("{key}: {}", scalar(n));
        }
    }
}

fn print_warnings(value: &Value) {
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings {
                if let Value::String(s) = warning {
                    println!("  - {}", s);
                }
            }
        }
    }
}

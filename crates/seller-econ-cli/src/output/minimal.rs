use serde_json::Value;

use super::{product_array, scalar};

/// Compact output: the figures a seller scans first, one per line.
pub fn print_minimal(value: &Value) {
    if let Some(products) = product_array(value) {
        for product in products {
            let category = product
                .get("category")
                .map(scalar)
                .unwrap_or_default();
            let suffix = if category.is_empty() {
                String::new()
            } else {
                format!(" [{category}]")
            };
            println!(
                "{} — {}% ({}){}",
                scalar(&product["name"]),
                scalar(&product["commission"]),
                scalar(&product["warehouse"]),
                suffix
            );
        }
        return;
    }

    if let Some(unit) = value.pointer("/result/unit") {
        println!("margin %: {}", scalar(&unit["margin_percent"]));
        println!("profitability %: {}", scalar(&unit["profitability_percent"]));
        println!("profit before tax: {}", scalar(&unit["profit_before_tax"]));
        if let Some(Value::Array(scenarios)) = unit.get("scenarios") {
            for outcome in scenarios {
                println!(
                    "profit after tax ({}): {}",
                    scalar(&outcome["scenario"]),
                    scalar(&outcome["profit_after_tax"])
                );
            }
        }
        return;
    }

    if let Some(results) = value.get("results").and_then(Value::as_object) {
        for (key, val) in results {
            println!("{key}: {}", scalar(val));
        }
        return;
    }

    match value.as_object() {
        Some(map) => {
            for (key, val) in map {
                println!("{key}: {}", scalar(val));
            }
        }
        None => println!("{}", value),
    }
}

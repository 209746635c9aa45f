use chrono::Local;
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use std::fs;

use seller_econ_core::economics::{
    compute_unit_economics, evaluate, snapshot, EconomicsInput,
};

use crate::input;

/// Arguments for the economics calculation. Percent-denominated flags
/// mirror the form fields; `--input` JSON uses the engine's fractions.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EconomicsArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Units sold
    #[arg(long)]
    pub units_sold: Option<Decimal>,

    /// Marketplace logistics cost per unit
    #[arg(long)]
    pub logistics: Option<Decimal>,

    /// Fulfillment cost per unit
    #[arg(long)]
    pub fulfillment: Option<Decimal>,

    /// Paid-acceptance cost per unit
    #[arg(long)]
    pub paid_acceptance: Option<Decimal>,

    /// Storage cost per unit
    #[arg(long)]
    pub storage: Option<Decimal>,

    /// Advertising cost per unit
    #[arg(long)]
    pub advertising: Option<Decimal>,

    /// Purchase (cost) price per unit
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Selling price per unit
    #[arg(long)]
    pub selling_price: Option<Decimal>,

    /// Marketplace commission in percent (e.g. 15.5)
    #[arg(long)]
    pub commission: Option<Decimal>,

    /// Redemption rate in percent (e.g. 85)
    #[arg(long)]
    pub redemption: Option<Decimal>,
}

/// Arguments for the results-snapshot export.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ExportArgs {
    #[command(flatten)]
    pub economics: EconomicsArgs,

    /// Write the snapshot to this path instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

fn resolve_input(args: &EconomicsArgs) -> Result<EconomicsInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(EconomicsInput {
        units_sold: args
            .units_sold
            .ok_or("--units-sold is required (or provide --input)")?,
        logistics_cost: args.logistics.unwrap_or_default(),
        fulfillment_cost: args.fulfillment.unwrap_or_default(),
        paid_acceptance_cost: args.paid_acceptance.unwrap_or_default(),
        storage_cost: args.storage.unwrap_or_default(),
        advertising_cost: args.advertising.unwrap_or_default(),
        purchase_price: args
            .purchase_price
            .ok_or("--purchase-price is required (or provide --input)")?,
        selling_price: args
            .selling_price
            .ok_or("--selling-price is required (or provide --input)")?,
        commission_rate: args.commission.unwrap_or_default() / dec!(100),
        redemption_rate: args.redemption.unwrap_or_default() / dec!(100),
    })
}

pub fn run_economics(args: EconomicsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let economics_input = resolve_input(&args)?;
    let result = evaluate(&economics_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let economics_input = resolve_input(&args.economics)?;

    let validation = economics_input.validate();
    if !validation.valid {
        return Err(format!(
            "cannot export an invalid calculation: {}",
            validation.invalid_fields.join(", ")
        )
        .into());
    }

    let unit = compute_unit_economics(&economics_input);
    let snap = snapshot(&economics_input, &unit, Local::now());

    if let Some(ref path) = args.out {
        fs::write(path, serde_json::to_string_pretty(&snap)?)?;
    }
    Ok(serde_json::to_value(snap)?)
}

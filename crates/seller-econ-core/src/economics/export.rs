use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::format::{format_money, format_percent};

use super::unit::{EconomicsInput, TaxScenario, UnitEconomics};

/// One calculation frozen for sharing: the raw inputs plus every result
/// pre-formatted for display. Never read back by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsSnapshot {
    pub timestamp: String,
    pub inputs: EconomicsInput,
    pub results: FormattedResults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedResults {
    pub margin: String,
    pub profitability: String,
    pub tax_low: String,
    pub tax_medium: String,
    pub tax_high: String,
    pub profit_low: String,
    pub profit_medium: String,
    pub profit_high: String,
}

/// Build the export snapshot for a finished calculation.
pub fn snapshot(
    input: &EconomicsInput,
    unit: &UnitEconomics,
    at: DateTime<Local>,
) -> ResultsSnapshot {
    let low = unit.scenario(TaxScenario::Low);
    let medium = unit.scenario(TaxScenario::Medium);
    let high = unit.scenario(TaxScenario::High);

    ResultsSnapshot {
        timestamp: at.format("%d.%m.%Y, %H:%M:%S").to_string(),
        inputs: input.clone(),
        results: FormattedResults {
            margin: format_percent(unit.margin_percent),
            profitability: format_percent(unit.profitability_percent),
            tax_low: format_money(low.tax_amount),
            tax_medium: format_money(medium.tax_amount),
            tax_high: format_money(high.tax_amount),
            profit_low: format_money(low.profit_after_tax),
            profit_medium: format_money(medium.profit_after_tax),
            profit_high: format_money(high.profit_after_tax),
        },
    }
}

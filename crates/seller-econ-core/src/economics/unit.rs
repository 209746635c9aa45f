use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::{SellerEconError, SellerEconResult};

/// Payment-processing (acquiring) fee, as a fraction of realised revenue.
pub const ACQUIRING_RATE: Decimal = dec!(0.025);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Simplified-taxation brackets. Rates apply to revenue, not profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxScenario {
    Low,
    Medium,
    High,
}

impl TaxScenario {
    pub const ALL: [TaxScenario; 3] = [TaxScenario::Low, TaxScenario::Medium, TaxScenario::High];

    /// Tax rate as a fraction of revenue.
    pub fn rate(self) -> Rate {
        match self {
            TaxScenario::Low => dec!(0.02),
            TaxScenario::Medium => dec!(0.05),
            TaxScenario::High => dec!(0.07),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaxScenario::Low => "2%",
            TaxScenario::Medium => "5%",
            TaxScenario::High => "7%",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicsInput {
    pub units_sold: Decimal,
    pub logistics_cost: Money,
    pub fulfillment_cost: Money,
    pub paid_acceptance_cost: Money,
    pub storage_cost: Money,
    pub advertising_cost: Money,
    pub purchase_price: Money,
    pub selling_price: Money,
    /// Marketplace commission as a fraction of revenue.
    pub commission_rate: Rate,
    /// Fraction of shipped units actually kept by the buyer.
    pub redemption_rate: Rate,
}

/// Result of [`EconomicsInput::validate`]: a verdict plus the offending
/// field identifiers, never an error.
#[derive(Debug, Clone, Serialize)]
pub struct InputValidation {
    pub valid: bool,
    pub invalid_fields: Vec<&'static str>,
}

impl EconomicsInput {
    /// Check the preconditions for a meaningful calculation: the required
    /// fields strictly positive, costs non-negative, rates within [0, 1].
    pub fn validate(&self) -> InputValidation {
        let mut invalid_fields = Vec::new();

        if self.units_sold <= Decimal::ZERO {
            invalid_fields.push("units_sold");
        }
        if self.purchase_price <= Decimal::ZERO {
            invalid_fields.push("purchase_price");
        }
        if self.selling_price <= Decimal::ZERO {
            invalid_fields.push("selling_price");
        }
        for (field, value) in [
            ("logistics_cost", self.logistics_cost),
            ("fulfillment_cost", self.fulfillment_cost),
            ("paid_acceptance_cost", self.paid_acceptance_cost),
            ("storage_cost", self.storage_cost),
            ("advertising_cost", self.advertising_cost),
        ] {
            if value < Decimal::ZERO {
                invalid_fields.push(field);
            }
        }
        for (field, value) in [
            ("commission_rate", self.commission_rate),
            ("redemption_rate", self.redemption_rate),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                invalid_fields.push(field);
            }
        }

        InputValidation {
            valid: invalid_fields.is_empty(),
            invalid_fields,
        }
    }
}

/// Tax and post-tax profit for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: TaxScenario,
    pub tax_amount: Money,
    pub profit_after_tax: Money,
}

/// Per-unit figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEconomics {
    pub revenue: Money,
    pub commission_amount: Money,
    pub acquiring_amount: Money,
    pub total_unit_cost: Money,
    pub profit_before_tax: Money,
    /// Always in [`TaxScenario::ALL`] order.
    pub scenarios: [ScenarioOutcome; 3],
    pub margin_percent: Percent,
    pub profitability_percent: Percent,
}

impl UnitEconomics {
    pub fn scenario(&self, which: TaxScenario) -> &ScenarioOutcome {
        &self.scenarios[which as usize]
    }
}

/// Per-unit figures scaled by `units_sold`. Ratios are not repeated here:
/// they are invariant under scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalEconomics {
    pub revenue: Money,
    pub commission_amount: Money,
    pub acquiring_amount: Money,
    pub total_cost: Money,
    pub profit_before_tax: Money,
    /// Always in [`TaxScenario::ALL`] order.
    pub scenarios: [ScenarioOutcome; 3],
}

impl TotalEconomics {
    pub fn scenario(&self, which: TaxScenario) -> &ScenarioOutcome {
        &self.scenarios[which as usize]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicsBreakdown {
    pub unit: UnitEconomics,
    pub totals: TotalEconomics,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute per-unit economics. Total over its input domain: callers are
/// expected to have validated the required fields, and division-by-zero is
/// guarded explicitly (margin is 0 at zero revenue, profitability is 0 at
/// zero cost).
///
/// Commission and acquiring are charged on redemption-discounted revenue
/// while the flat costs apply per shipped unit; the mixed cost basis
/// mirrors how the marketplace actually bills sellers.
pub fn compute_unit_economics(input: &EconomicsInput) -> UnitEconomics {
    let revenue = input.selling_price * input.redemption_rate;
    let commission_amount = revenue * input.commission_rate;
    let acquiring_amount = revenue * ACQUIRING_RATE;

    let total_unit_cost = input.purchase_price
        + input.logistics_cost
        + input.fulfillment_cost
        + input.paid_acceptance_cost
        + input.storage_cost
        + input.advertising_cost;

    let profit_before_tax = revenue - commission_amount - acquiring_amount - total_unit_cost;

    let scenarios = TaxScenario::ALL.map(|scenario| {
        let tax_amount = revenue * scenario.rate();
        ScenarioOutcome {
            scenario,
            tax_amount,
            profit_after_tax: profit_before_tax - tax_amount,
        }
    });

    let margin_percent = if revenue > Decimal::ZERO {
        profit_before_tax / revenue * dec!(100)
    } else {
        Decimal::ZERO
    };

    let profitability_percent = if total_unit_cost > Decimal::ZERO {
        profit_before_tax / total_unit_cost * dec!(100)
    } else {
        Decimal::ZERO
    };

    UnitEconomics {
        revenue,
        commission_amount,
        acquiring_amount,
        total_unit_cost,
        profit_before_tax,
        scenarios,
        margin_percent,
        profitability_percent,
    }
}

/// Scale every per-unit monetary figure by `units_sold`. No rounding.
pub fn compute_totals(input: &EconomicsInput, unit: &UnitEconomics) -> TotalEconomics {
    let units = input.units_sold;

    TotalEconomics {
        revenue: unit.revenue * units,
        commission_amount: unit.commission_amount * units,
        acquiring_amount: unit.acquiring_amount * units,
        total_cost: unit.total_unit_cost * units,
        profit_before_tax: unit.profit_before_tax * units,
        scenarios: unit.scenarios.clone().map(|outcome| ScenarioOutcome {
            scenario: outcome.scenario,
            tax_amount: outcome.tax_amount * units,
            profit_after_tax: outcome.profit_after_tax * units,
        }),
    }
}

/// Envelope entry point for the presentation layer: validates, computes
/// unit figures and totals, and annotates degenerate cases.
pub fn evaluate(input: &EconomicsInput) -> SellerEconResult<ComputationOutput<EconomicsBreakdown>> {
    let start = Instant::now();

    let validation = input.validate();
    if !validation.valid {
        return Err(SellerEconError::InvalidInput {
            fields: validation
                .invalid_fields
                .iter()
                .map(|f| f.to_string())
                .collect(),
        });
    }

    let mut warnings: Vec<String> = Vec::new();

    let unit = compute_unit_economics(input);
    let totals = compute_totals(input, &unit);

    if unit.revenue.is_zero() {
        warnings.push("Revenue is zero; margin reported as 0.".into());
    }
    if unit.total_unit_cost.is_zero() {
        warnings.push("Cost base is zero; profitability reported as 0.".into());
    }
    if unit.profit_before_tax < Decimal::ZERO {
        warnings.push("Unit is loss-making before tax.".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        warnings,
        elapsed,
        EconomicsBreakdown { unit, totals },
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

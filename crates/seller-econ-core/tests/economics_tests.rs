use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use seller_econ_core::economics::{
    compute_totals, compute_unit_economics, evaluate, EconomicsInput, TaxScenario, ACQUIRING_RATE,
};
use seller_econ_core::SellerEconError;

// ===========================================================================
// Unit economics tests
// ===========================================================================

fn example_product() -> EconomicsInput {
    // A mid-range apparel item: 450 price, 85% redemption, 15.5% commission
    EconomicsInput {
        units_sold: dec!(100),
        logistics_cost: dec!(25.5),
        fulfillment_cost: dec!(15),
        paid_acceptance_cost: dec!(8),
        storage_cost: dec!(5),
        advertising_cost: dec!(50),
        purchase_price: dec!(200),
        selling_price: dec!(450),
        commission_rate: dec!(0.155),
        redemption_rate: dec!(0.85),
    }
}

#[test]
fn test_end_to_end_example() {
    let unit = compute_unit_economics(&example_product());

    // revenue = 450 * 0.85 = 382.5
    assert_eq!(unit.revenue, dec!(382.5));
    // commission = 382.5 * 0.155 = 59.2875
    assert_eq!(unit.commission_amount, dec!(59.2875));
    // acquiring = 382.5 * 0.025 = 9.5625
    assert_eq!(unit.acquiring_amount, dec!(9.5625));
    // cost = 200 + 25.5 + 15 + 8 + 5 + 50 = 303.5
    assert_eq!(unit.total_unit_cost, dec!(303.5));
    // profit before tax = 382.5 - 59.2875 - 9.5625 - 303.5 = 10.15
    assert_eq!(unit.profit_before_tax, dec!(10.15));

    // low scenario: tax = 382.5 * 0.02 = 7.65, profit = 10.15 - 7.65 = 2.5
    let low = unit.scenario(TaxScenario::Low);
    assert_eq!(low.tax_amount, dec!(7.65));
    assert_eq!(low.profit_after_tax, dec!(2.5));

    // margin = 10.15 / 382.5 * 100
    assert_eq!(unit.margin_percent, dec!(10.15) / dec!(382.5) * dec!(100));
    // profitability = 10.15 / 303.5 * 100
    assert_eq!(
        unit.profitability_percent,
        dec!(10.15) / dec!(303.5) * dec!(100)
    );
}

#[test]
fn test_ideal_case_reduces_to_price_spread_minus_acquiring() {
    // Full redemption, no commission, no costs: only the acquiring fee
    // separates profit from the raw price spread.
    let input = EconomicsInput {
        units_sold: dec!(1),
        logistics_cost: Decimal::ZERO,
        fulfillment_cost: Decimal::ZERO,
        paid_acceptance_cost: Decimal::ZERO,
        storage_cost: Decimal::ZERO,
        advertising_cost: Decimal::ZERO,
        purchase_price: dec!(200),
        selling_price: dec!(450),
        commission_rate: Decimal::ZERO,
        redemption_rate: Decimal::ONE,
    };
    let unit = compute_unit_economics(&input);
    assert_eq!(
        unit.profit_before_tax,
        dec!(450) - dec!(200) - dec!(450) * ACQUIRING_RATE
    );
}

#[test]
fn test_scenario_rates_apply_to_revenue_not_profit() {
    let unit = compute_unit_economics(&example_product());
    for scenario in TaxScenario::ALL {
        let outcome = unit.scenario(scenario);
        assert_eq!(outcome.tax_amount, unit.revenue * scenario.rate());
        assert_eq!(
            outcome.profit_after_tax,
            unit.profit_before_tax - unit.revenue * scenario.rate()
        );
    }
}

#[test]
fn test_totals_are_linear_in_units_sold() {
    for k in [Decimal::ZERO, dec!(1), dec!(100), dec!(2500)] {
        let mut input = example_product();
        input.units_sold = k;
        let unit = compute_unit_economics(&input);
        let totals = compute_totals(&input, &unit);

        assert_eq!(totals.revenue, unit.revenue * k);
        assert_eq!(totals.commission_amount, unit.commission_amount * k);
        assert_eq!(totals.acquiring_amount, unit.acquiring_amount * k);
        assert_eq!(totals.total_cost, unit.total_unit_cost * k);
        assert_eq!(totals.profit_before_tax, unit.profit_before_tax * k);
        for scenario in TaxScenario::ALL {
            assert_eq!(
                totals.scenario(scenario).profit_after_tax,
                unit.scenario(scenario).profit_after_tax * k
            );
        }
    }
}

#[test]
fn test_division_guards() {
    let mut input = example_product();
    input.redemption_rate = Decimal::ZERO;
    let unit = compute_unit_economics(&input);
    assert_eq!(unit.margin_percent, Decimal::ZERO);

    let mut input = example_product();
    input.purchase_price = Decimal::ZERO;
    input.logistics_cost = Decimal::ZERO;
    input.fulfillment_cost = Decimal::ZERO;
    input.paid_acceptance_cost = Decimal::ZERO;
    input.storage_cost = Decimal::ZERO;
    input.advertising_cost = Decimal::ZERO;
    let unit = compute_unit_economics(&input);
    assert_eq!(unit.profitability_percent, Decimal::ZERO);
}

#[test]
fn test_evaluate_reports_offending_fields() {
    let mut input = example_product();
    input.units_sold = Decimal::ZERO;
    input.purchase_price = dec!(-5);

    let err = evaluate(&input).unwrap_err();
    match err {
        SellerEconError::InvalidInput { fields } => {
            assert_eq!(fields, vec!["units_sold", "purchase_price"]);
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_evaluate_envelope_for_valid_input() {
    let result = evaluate(&example_product()).unwrap();
    assert_eq!(result.result.unit.profit_before_tax, dec!(10.15));
    assert_eq!(result.result.totals.profit_before_tax, dec!(1015));
    assert!(result.warnings.is_empty());
    assert!(!result.metadata.version.is_empty());
}

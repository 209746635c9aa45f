//! Deterministic unit-economics engine: per-unit figures, aggregate totals
//! and the three fixed tax scenarios. Pure computation, no I/O.

pub mod export;
pub mod unit;

pub use export::{snapshot, FormattedResults, ResultsSnapshot};
pub use unit::{
    compute_totals, compute_unit_economics, evaluate, EconomicsBreakdown, EconomicsInput,
    InputValidation, ScenarioOutcome, TaxScenario, TotalEconomics, UnitEconomics, ACQUIRING_RATE,
};

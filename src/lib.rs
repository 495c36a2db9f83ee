//! Corporate Forecast - deterministic multi-year financial forecasting engine
//!
//! This library provides:
//! - Spreadsheet-style formula primitives (ratios, CAGR, conditional select)
//! - Financial formulas (PV, FV, NPV, IRR via Newton-Raphson)
//! - Year-over-year revenue and cost-of-sales forecast propagation
//! - Scenario framework for batch forecasts over alternative revenue curves

pub mod formulas;
pub mod dataset;
pub mod forecast;
pub mod scenario;

// Re-export commonly used types
pub use dataset::{FinancialDataset, ExternalRevenueCurve};
pub use forecast::{ForecastEngine, ForecastResult, ForecastRow, GrowthRateSchedule};
pub use formulas::IrrOutcome;
pub use scenario::ScenarioRunner;

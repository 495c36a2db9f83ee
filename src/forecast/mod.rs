//! Forecast engine: growth-rate derivation and year-over-year propagation

mod engine;
mod result;

pub use engine::ForecastEngine;
pub use result::{
    BalanceSheetEntry, ForecastResult, ForecastRow, ForecastSummary, GrowthRateSchedule, KeyRatios,
};

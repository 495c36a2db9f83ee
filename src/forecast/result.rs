//! Forecast output structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::formulas::primitives::ratio;

/// Per-period compound growth rates keyed by the later year of each pair
///
/// Derived once from the external revenue curve; only years with both
/// boundary curve points present carry an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateSchedule {
    rates: BTreeMap<i32, f64>,
}

impl GrowthRateSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, year: i32, rate: f64) {
        self.rates.insert(year, rate);
    }

    /// Growth rate ending at `year`, `None` when the period had no curve data
    pub fn get(&self, year: i32) -> Option<f64> {
        self.rates.get(&year).copied()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.rates.contains_key(&year)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate entries in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.rates.iter().map(|(year, rate)| (*year, *rate))
    }
}

/// Calibration constants computed once from base-year data
///
/// These are held fixed across every forecast year; the constant-ratio
/// assumption means they are never re-derived during propagation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRatios {
    /// Goodwill plus intangible assets
    pub goodwill_and_intangibles: f64,

    /// Non-current debt / shareholder equity
    pub debt_to_equity: f64,

    /// Base cost of sales / base revenue
    pub cost_of_sales_ratio: f64,
}

/// Balance-sheet projection for one year
///
/// Ratio-constant by construction: every year carries the same calibrated
/// values, copied verbatim from `KeyRatios`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetEntry {
    pub debt_to_equity: f64,
    pub goodwill_and_intangibles: f64,
}

impl BalanceSheetEntry {
    pub fn from_ratios(ratios: &KeyRatios) -> Self {
        Self {
            debt_to_equity: ratios.debt_to_equity,
            goodwill_and_intangibles: ratios.goodwill_and_intangibles,
        }
    }
}

/// A single year of forecast output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRow {
    pub year: i32,

    /// Projected revenue (base-year value verbatim for the base year)
    pub revenue: f64,

    /// Projected cost of sales. Negative magnitude by sheet convention for
    /// forecast years; the base year keeps its literal input value.
    pub cost_of_sales: f64,

    /// Ratio-constant balance-sheet projection
    pub balance_sheet: BalanceSheetEntry,
}

impl ForecastRow {
    /// Gross profit: revenue + cost of sales (cost carries its own sign)
    pub fn gross_profit(&self) -> f64 {
        self.revenue + self.cost_of_sales
    }

    /// Gross margin as a fraction of revenue, 0.0 on zero revenue
    pub fn gross_margin(&self) -> f64 {
        ratio(self.gross_profit(), self.revenue)
    }
}

/// Complete forecast result for one engine invocation
///
/// Rows are ordered by the dataset's year grid. The result is a derived
/// artifact: produced once, never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Projection years in dataset order
    pub years: Vec<i32>,

    /// Calibration constants shared by every year
    pub ratios: KeyRatios,

    /// Growth-rate schedule the propagation used
    pub growth_rates: GrowthRateSchedule,

    /// Per-year forecast rows
    pub rows: Vec<ForecastRow>,
}

impl ForecastResult {
    pub fn new(years: Vec<i32>, ratios: KeyRatios, growth_rates: GrowthRateSchedule) -> Self {
        Self {
            years,
            ratios,
            growth_rates,
            rows: Vec::new(),
        }
    }

    /// Append a forecast row
    pub fn add_row(&mut self, row: ForecastRow) {
        self.rows.push(row);
    }

    /// Row for a specific year
    pub fn row(&self, year: i32) -> Option<&ForecastRow> {
        self.rows.iter().find(|row| row.year == year)
    }

    /// Projected revenue for a year
    pub fn revenue(&self, year: i32) -> Option<f64> {
        self.row(year).map(|row| row.revenue)
    }

    /// Projected cost of sales for a year
    pub fn cost_of_sales(&self, year: i32) -> Option<f64> {
        self.row(year).map(|row| row.cost_of_sales)
    }

    /// Summary statistics over the forecast horizon
    pub fn summary(&self) -> ForecastSummary {
        let base_revenue = self.rows.first().map(|row| row.revenue).unwrap_or(0.0);
        let final_row = self.rows.last();

        ForecastSummary {
            total_years: self.rows.len() as u32,
            base_revenue,
            final_revenue: final_row.map(|row| row.revenue).unwrap_or(0.0),
            final_gross_margin: final_row.map(|row| row.gross_margin()).unwrap_or(0.0),
            debt_to_equity: self.ratios.debt_to_equity,
            goodwill_and_intangibles: self.ratios.goodwill_and_intangibles,
        }
    }
}

/// Summary statistics for a forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_years: u32,
    pub base_revenue: f64,
    pub final_revenue: f64,
    pub final_gross_margin: f64,
    pub debt_to_equity: f64,
    pub goodwill_and_intangibles: f64,
}

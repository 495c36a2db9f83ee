//! Scenario runner for batch forecasts
//!
//! Holds one base dataset and runs independent forecasts over many
//! alternative revenue curves (e.g. low/base/high projections). A forecast
//! is a pure function of (dataset, curve), so scenarios run in parallel
//! with no shared-state coordination.

use rayon::prelude::*;

use crate::dataset::{ExternalRevenueCurve, FinancialDataset};
use crate::forecast::{ForecastEngine, ForecastResult};

/// Pre-loaded scenario runner for batch forecasts
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(FinancialDataset::reference_model());
/// let results = runner.run_scenarios(&[low_curve, base_curve, high_curve]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Base-year dataset shared by every scenario
    base_dataset: FinancialDataset,
}

impl ScenarioRunner {
    /// Create a runner over a base dataset
    pub fn new(base_dataset: FinancialDataset) -> Self {
        Self { base_dataset }
    }

    /// Get reference to the base dataset for inspection
    pub fn dataset(&self) -> &FinancialDataset {
        &self.base_dataset
    }

    /// Run a single forecast against one revenue curve
    pub fn run(&self, curve: &ExternalRevenueCurve) -> ForecastResult {
        let engine = ForecastEngine::new(self.base_dataset.clone(), curve.clone());
        engine.run_full_forecast()
    }

    /// Run forecasts for many revenue curves in parallel
    ///
    /// Results come back in input order.
    pub fn run_scenarios(&self, curves: &[ExternalRevenueCurve]) -> Vec<ForecastResult> {
        curves.par_iter().map(|curve| self.run(curve)).collect()
    }
}

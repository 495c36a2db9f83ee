//! Base-year fundamentals and the external revenue curve
//!
//! `FinancialDataset` carries balance-sheet ground truth for the base year
//! plus the ordered projection-year grid. The base year is the first grid
//! entry and is never recomputed by the forecast loop.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation failures when constructing a dataset
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("projection year list must not be empty")]
    EmptyYears,

    #[error("projection years must be strictly ascending: {prev} precedes {next}")]
    YearsNotAscending { prev: i32, next: i32 },
}

/// Immutable base-year fundamentals and the projection-year grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialDataset {
    /// Opening cash position
    pub opening_cash: f64,

    /// Property, plant and equipment
    pub property_plant_equipment: f64,

    /// Goodwill carried on the balance sheet
    pub goodwill: f64,

    /// Intangible assets
    pub intangible_assets: f64,

    /// Non-current debt
    pub non_current_debt: f64,

    /// Shareholder equity
    pub shareholder_equity: f64,

    /// Base-year revenue (ground truth, never recomputed)
    pub base_revenue: f64,

    /// Base-year cost of sales (ground truth, never recomputed)
    pub base_cost_of_sales: f64,

    /// Projection years, strictly ascending; the first entry is the base year
    pub years: Vec<i32>,
}

impl FinancialDataset {
    /// Construct a dataset, validating the year-grid invariant.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        opening_cash: f64,
        property_plant_equipment: f64,
        goodwill: f64,
        intangible_assets: f64,
        non_current_debt: f64,
        shareholder_equity: f64,
        base_revenue: f64,
        base_cost_of_sales: f64,
        years: Vec<i32>,
    ) -> Result<Self, DatasetError> {
        let dataset = Self {
            opening_cash,
            property_plant_equipment,
            goodwill,
            intangible_assets,
            non_current_debt,
            shareholder_equity,
            base_revenue,
            base_cost_of_sales,
            years,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the year-grid invariant: non-empty and strictly ascending.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.years.is_empty() {
            return Err(DatasetError::EmptyYears);
        }
        for pair in self.years.windows(2) {
            if pair[1] <= pair[0] {
                return Err(DatasetError::YearsNotAscending {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(())
    }

    /// The calibration year: first entry of the (validated) year grid
    pub fn base_year(&self) -> i32 {
        self.years[0]
    }

    /// Goodwill plus intangible assets
    pub fn goodwill_and_intangibles(&self) -> f64 {
        self.goodwill + self.intangible_assets
    }

    /// Total of the asset components carried on this dataset
    pub fn total_assets(&self) -> f64 {
        self.opening_cash + self.property_plant_equipment + self.goodwill_and_intangibles()
    }

    /// Built-in reference model: the 2020 base-year fundamentals with a
    /// five-year grid to 2050. Used by the CLI when no dataset is supplied
    /// and by tests as a known-good fixture.
    pub fn reference_model() -> Self {
        Self {
            opening_cash: 4116.0,
            property_plant_equipment: 10558.0,
            goodwill: 18942.0,
            intangible_assets: 15999.0,
            non_current_debt: 29412.0,
            shareholder_equity: 17655.0,
            base_revenue: 50724.0,
            base_cost_of_sales: 28684.0,
            years: vec![2020, 2025, 2030, 2035, 2040, 2045, 2050],
        }
    }
}

/// Externally supplied year-to-revenue projections
///
/// The curve is an input collaborator, not something the engine computes.
/// Missing years are a defined absence: lookups return `None` and the
/// forecast freezes revenue at such years rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalRevenueCurve {
    points: BTreeMap<i32, f64>,
}

impl ExternalRevenueCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a curve from (year, revenue) pairs
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, year: i32, revenue: f64) {
        self.points.insert(year, revenue);
    }

    /// Projected revenue for a year, `None` when the year has no datapoint
    pub fn get(&self, year: i32) -> Option<f64> {
        self.points.get(&year).copied()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.points.contains_key(&year)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate datapoints in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.points.iter().map(|(year, revenue)| (*year, *revenue))
    }

    /// Reference revenue projections matching `FinancialDataset::reference_model`
    pub fn reference_projections() -> Self {
        Self::from_points([
            (2020, 50724.0),
            (2025, 55000.0),
            (2030, 60000.0),
            (2035, 65000.0),
            (2040, 70000.0),
            (2045, 75000.0),
            (2050, 80000.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_model_validates() {
        let dataset = FinancialDataset::reference_model();
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.base_year(), 2020);
        assert_relative_eq!(dataset.goodwill_and_intangibles(), 34941.0);
        assert_relative_eq!(dataset.total_assets(), 4116.0 + 10558.0 + 34941.0);
    }

    #[test]
    fn test_years_must_ascend() {
        let result = FinancialDataset::new(
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0, 50.0,
            vec![2020, 2030, 2025],
        );
        assert_eq!(
            result.unwrap_err(),
            DatasetError::YearsNotAscending { prev: 2030, next: 2025 }
        );
    }

    #[test]
    fn test_duplicate_years_rejected() {
        let result = FinancialDataset::new(
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0, 50.0,
            vec![2020, 2025, 2025],
        );
        assert!(matches!(
            result,
            Err(DatasetError::YearsNotAscending { prev: 2025, next: 2025 })
        ));
    }

    #[test]
    fn test_empty_years_rejected() {
        let result =
            FinancialDataset::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0, 50.0, vec![]);
        assert_eq!(result.unwrap_err(), DatasetError::EmptyYears);
    }

    #[test]
    fn test_curve_missing_year_is_absence() {
        let curve = ExternalRevenueCurve::from_points([(2020, 50724.0), (2025, 55000.0)]);
        assert_eq!(curve.get(2025), Some(55000.0));
        assert_eq!(curve.get(2030), None);
        assert!(!curve.contains(2030));
        assert_eq!(curve.len(), 2);
    }

    #[test]
    fn test_curve_iterates_in_year_order() {
        let mut curve = ExternalRevenueCurve::new();
        curve.insert(2030, 60000.0);
        curve.insert(2020, 50724.0);
        curve.insert(2025, 55000.0);

        let years: Vec<i32> = curve.iter().map(|(year, _)| year).collect();
        assert_eq!(years, vec![2020, 2025, 2030]);
    }
}

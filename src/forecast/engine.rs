//! Core forecast engine for multi-year revenue and balance-sheet propagation
//!
//! Revenue rolls forward year by year: grown when the growth-rate schedule
//! has a datapoint for the year, frozen at the prior value when it does not.
//! Balance-sheet ratios are calibrated once from base-year data and reused
//! verbatim for every projected year.

use log::debug;

use super::result::{
    BalanceSheetEntry, ForecastResult, ForecastRow, GrowthRateSchedule, KeyRatios,
};
use crate::dataset::{ExternalRevenueCurve, FinancialDataset};
use crate::formulas::primitives::{compound_growth_rate, ratio};

/// Revenue and cost of sales produced by one pure year-step
struct YearStep {
    revenue: f64,
    cost_of_sales: f64,
}

/// One step of the propagation fold.
///
/// A year with a schedule entry grows off the prior revenue; a year without
/// one is frozen at the prior revenue, not extrapolated. Cost of sales is
/// stored as a negative magnitude by sheet convention.
fn project_year(
    year: i32,
    previous_revenue: f64,
    schedule: &GrowthRateSchedule,
    cost_of_sales_ratio: f64,
) -> YearStep {
    let revenue = match schedule.get(year) {
        Some(rate) => previous_revenue * (1.0 + rate),
        None => previous_revenue,
    };

    YearStep {
        revenue,
        cost_of_sales: -cost_of_sales_ratio * revenue,
    }
}

/// Main forecast engine
///
/// Owns one immutable dataset and one externally supplied revenue curve;
/// everything it produces is a pure function of the two.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    dataset: FinancialDataset,
    revenue_curve: ExternalRevenueCurve,
}

impl ForecastEngine {
    /// Create an engine over a dataset and an external revenue curve
    pub fn new(dataset: FinancialDataset, revenue_curve: ExternalRevenueCurve) -> Self {
        Self {
            dataset,
            revenue_curve,
        }
    }

    pub fn dataset(&self) -> &FinancialDataset {
        &self.dataset
    }

    pub fn revenue_curve(&self) -> &ExternalRevenueCurve {
        &self.revenue_curve
    }

    /// Derive the compound growth rate schedule from consecutive
    /// projection-year pairs.
    ///
    /// A year earns an entry only when both pair endpoints are on the
    /// external curve; anything else is a defined absence. The period
    /// length is the calendar gap between the two years.
    pub fn growth_rate_schedule(&self) -> GrowthRateSchedule {
        let mut schedule = GrowthRateSchedule::new();

        for pair in self.dataset.years.windows(2) {
            let (year_prev, year_next) = (pair[0], pair[1]);
            if let (Some(start), Some(end)) = (
                self.revenue_curve.get(year_prev),
                self.revenue_curve.get(year_next),
            ) {
                let periods = (year_next - year_prev) as f64;
                schedule.insert(year_next, compound_growth_rate(start, end, periods));
            }
        }

        debug!(
            "growth schedule: {} of {} forecast years have a datapoint",
            schedule.len(),
            self.dataset.years.len().saturating_sub(1)
        );

        schedule
    }

    /// Calibrate the constant ratios from base-year data.
    ///
    /// Computed once per forecast; every year's balance-sheet entry copies
    /// these values unchanged.
    fn key_ratios(&self) -> KeyRatios {
        KeyRatios {
            goodwill_and_intangibles: self.dataset.goodwill_and_intangibles(),
            debt_to_equity: ratio(
                self.dataset.non_current_debt,
                self.dataset.shareholder_equity,
            ),
            cost_of_sales_ratio: ratio(
                self.dataset.base_cost_of_sales,
                self.dataset.base_revenue,
            ),
        }
    }

    /// Run the complete forecast over the projection-year grid.
    ///
    /// The base year is emitted with its literal input values; subsequent
    /// years fold forward one revenue accumulator through `project_year`.
    /// Numeric degeneracy resolves through the primitive-level policies,
    /// so this never fails.
    pub fn run_full_forecast(&self) -> ForecastResult {
        let ratios = self.key_ratios();
        let schedule = self.growth_rate_schedule();
        let balance_sheet = BalanceSheetEntry::from_ratios(&ratios);

        let mut result =
            ForecastResult::new(self.dataset.years.clone(), ratios.clone(), schedule.clone());

        let base_year = self.dataset.base_year();
        let mut previous_revenue = self.dataset.base_revenue;

        for &year in &self.dataset.years {
            let row = if year == base_year {
                // Base year is ground truth: literal values, no recomputation
                ForecastRow {
                    year,
                    revenue: self.dataset.base_revenue,
                    cost_of_sales: self.dataset.base_cost_of_sales,
                    balance_sheet,
                }
            } else {
                let step = project_year(year, previous_revenue, &schedule, ratios.cost_of_sales_ratio);
                previous_revenue = step.revenue;
                ForecastRow {
                    year,
                    revenue: step.revenue,
                    cost_of_sales: step.cost_of_sales,
                    balance_sheet,
                }
            };
            result.add_row(row);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_dataset(years: Vec<i32>) -> FinancialDataset {
        FinancialDataset::new(
            4116.0, 10558.0, 18942.0, 15999.0, 29412.0, 17655.0, 50724.0, 28684.0, years,
        )
        .unwrap()
    }

    #[test]
    fn test_growth_schedule_uses_year_gap_as_period() {
        let dataset = test_dataset(vec![2020, 2025]);
        let curve = ExternalRevenueCurve::from_points([(2020, 50724.0), (2025, 55000.0)]);
        let engine = ForecastEngine::new(dataset, curve);

        let schedule = engine.growth_rate_schedule();
        assert_eq!(schedule.len(), 1);
        assert_relative_eq!(
            schedule.get(2025).unwrap(),
            compound_growth_rate(50724.0, 55000.0, 5.0)
        );
    }

    #[test]
    fn test_growth_schedule_skips_missing_endpoints() {
        let dataset = test_dataset(vec![2020, 2025, 2030, 2035]);
        // 2030 missing: neither the 2025->2030 nor the 2030->2035 period
        // has both endpoints, so only 2025 earns an entry
        let curve = ExternalRevenueCurve::from_points([
            (2020, 50724.0),
            (2025, 55000.0),
            (2035, 65000.0),
        ]);
        let engine = ForecastEngine::new(dataset, curve);

        let schedule = engine.growth_rate_schedule();
        assert_eq!(schedule.len(), 1);
        assert!(schedule.contains(2025));
        assert!(!schedule.contains(2030));
        assert!(!schedule.contains(2035));
    }

    #[test]
    fn test_base_year_emitted_literally() {
        let dataset = test_dataset(vec![2020, 2025, 2030]);
        let curve = ExternalRevenueCurve::reference_projections();
        let result = ForecastEngine::new(dataset, curve).run_full_forecast();

        let base = result.row(2020).unwrap();
        assert_eq!(base.revenue, 50724.0);
        // Literal input value, no sign flip and no ratio applied
        assert_eq!(base.cost_of_sales, 28684.0);
    }

    #[test]
    fn test_missing_growth_year_carries_revenue_forward() {
        let dataset = test_dataset(vec![2020, 2025, 2030]);
        // 2030 has no curve point, so its revenue freezes at the 2025 value
        let curve = ExternalRevenueCurve::from_points([(2020, 50724.0), (2025, 55000.0)]);
        let engine = ForecastEngine::new(dataset, curve);

        let schedule = engine.growth_rate_schedule();
        let rate_2025 = schedule.get(2025).unwrap();

        let result = engine.run_full_forecast();
        let revenue_2025 = result.revenue(2025).unwrap();
        let revenue_2030 = result.revenue(2030).unwrap();

        assert_relative_eq!(revenue_2025, 50724.0 * (1.0 + rate_2025));
        assert_eq!(revenue_2030, revenue_2025);
    }

    #[test]
    fn test_cost_of_sales_is_negative_ratio_of_revenue() {
        let dataset = test_dataset(vec![2020, 2025]);
        let curve = ExternalRevenueCurve::from_points([(2020, 50724.0), (2025, 55000.0)]);
        let result = ForecastEngine::new(dataset, curve).run_full_forecast();

        let cost_ratio = 28684.0 / 50724.0;
        let row = result.row(2025).unwrap();
        assert_relative_eq!(row.cost_of_sales, -cost_ratio * row.revenue, epsilon = 1e-9);
        assert!(row.cost_of_sales < 0.0);
    }

    #[test]
    fn test_constant_ratios_bit_identical_across_years() {
        let dataset = test_dataset(vec![2020, 2025, 2030, 2035, 2040, 2045, 2050]);
        let curve = ExternalRevenueCurve::reference_projections();
        let result = ForecastEngine::new(dataset, curve).run_full_forecast();

        // Calibration constants, not re-derived per year
        let first = result.rows[0].balance_sheet;
        for row in &result.rows {
            assert_eq!(
                row.balance_sheet.debt_to_equity.to_bits(),
                first.debt_to_equity.to_bits()
            );
            assert_eq!(
                row.balance_sheet.goodwill_and_intangibles.to_bits(),
                first.goodwill_and_intangibles.to_bits()
            );
        }
        assert_relative_eq!(first.debt_to_equity, 29412.0 / 17655.0);
        assert_relative_eq!(first.goodwill_and_intangibles, 34941.0);
    }

    #[test]
    fn test_degenerate_dataset_does_not_panic() {
        // Zero equity and zero base revenue resolve through the ratio policy
        let dataset =
            FinancialDataset::new(0.0, 0.0, 0.0, 0.0, 1000.0, 0.0, 0.0, 0.0, vec![2020, 2025])
                .unwrap();
        let curve = ExternalRevenueCurve::from_points([(2020, 0.0), (2025, 55000.0)]);
        let result = ForecastEngine::new(dataset, curve).run_full_forecast();

        assert_eq!(result.ratios.debt_to_equity, 0.0);
        assert_eq!(result.ratios.cost_of_sales_ratio, 0.0);
        // Degenerate curve start: neutral growth, revenue carried forward
        assert_eq!(result.revenue(2025), Some(0.0));
    }

    #[test]
    fn test_empty_curve_freezes_every_year() {
        let dataset = test_dataset(vec![2020, 2025, 2030]);
        let result =
            ForecastEngine::new(dataset, ExternalRevenueCurve::new()).run_full_forecast();

        assert!(result.growth_rates.is_empty());
        assert_eq!(result.revenue(2025), Some(50724.0));
        assert_eq!(result.revenue(2030), Some(50724.0));
    }
}

//! Scalar and vector primitives replicating spreadsheet formula behavior
//!
//! Degenerate inputs resolve to defined neutral values, never errors. The
//! zero-denominator and non-positive-growth policies here are contractual:
//! forecast propagation depends on them and callers must not see a panic
//! for any numeric input.

use std::collections::BTreeMap;

/// Ratio with zero-division protection, matching the sheet convention `=A1/B1`.
/// A zero denominator yields 0.0.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Plain exponentiation, `=base^exponent`. No special-casing.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Sum of a range, `=SUM(range)`. Non-numeric entries (NaN) are skipped
/// silently, the way a sheet skips text cells inside a SUM range.
pub fn sum_range(values: &[f64]) -> f64 {
    values.iter().copied().filter(|v| !v.is_nan()).sum()
}

/// Compound annual growth rate: `(end/start)^(1/periods) - 1`.
///
/// A non-positive start, end, or period count degrades to 0.0 (no growth)
/// rather than erroring. Years with a degenerate datapoint are frozen in
/// the forecast instead of extrapolated, so the neutral value must be
/// preserved exactly.
pub fn compound_growth_rate(start_value: f64, end_value: f64, periods: f64) -> f64 {
    if start_value <= 0.0 || end_value <= 0.0 || periods <= 0.0 {
        return 0.0;
    }
    (end_value / start_value).powf(1.0 / periods) - 1.0
}

/// `=IF(condition, a, b)` as a pure ternary.
pub fn conditional_select<T>(condition: bool, when_true: T, when_false: T) -> T {
    if condition {
        when_true
    } else {
        when_false
    }
}

/// Simplified VLOOKUP: exact-match key lookup with a default for absent keys.
pub fn lookup_with_default<K, V>(key: &K, mapping: &BTreeMap<K, V>, default: V) -> V
where
    K: Ord,
    V: Clone,
{
    mapping.get(key).cloned().unwrap_or(default)
}

/// Percentage change `(new - old) / old`, 0.0 when the old value is zero.
pub fn percentage_change(old_value: f64, new_value: f64) -> f64 {
    if old_value == 0.0 {
        0.0
    } else {
        (new_value - old_value) / old_value
    }
}

/// Scale a range by a constant, `=$A$1*B1:B10`.
pub fn multiply_range(multiplier: f64, values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| multiplier * v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(100.0, 0.0), 0.0);
        assert_eq!(ratio(-5.0, 0.0), 0.0);
        assert_eq!(ratio(0.0, 0.0), 0.0);
        assert_relative_eq!(ratio(29412.0, 17655.0), 29412.0 / 17655.0);
    }

    #[test]
    fn test_power() {
        assert_relative_eq!(power(2.0, 10.0), 1024.0);
        assert_relative_eq!(power(1.05, 0.0), 1.0);
    }

    #[test]
    fn test_sum_range_skips_nan() {
        assert_relative_eq!(sum_range(&[1.0, 2.0, 3.0]), 6.0);
        assert_relative_eq!(sum_range(&[1.0, f64::NAN, 3.0]), 4.0);
        assert_eq!(sum_range(&[]), 0.0);
    }

    #[test]
    fn test_compound_growth_rate_flat() {
        // No growth over any horizon
        assert_eq!(compound_growth_rate(100.0, 100.0, 5.0), 0.0);
        assert_eq!(compound_growth_rate(100.0, 100.0, 1.0), 0.0);
    }

    #[test]
    fn test_compound_growth_rate_doubling() {
        // Doubling in one period is 100% growth
        assert_relative_eq!(compound_growth_rate(100.0, 200.0, 1.0), 1.0);
        // Doubling over 2 periods is sqrt(2)-1 per period
        assert_relative_eq!(
            compound_growth_rate(100.0, 200.0, 2.0),
            2.0_f64.sqrt() - 1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_compound_growth_rate_degenerate_inputs() {
        // Non-positive operands degrade to the neutral rate, not an error
        assert_eq!(compound_growth_rate(0.0, 200.0, 5.0), 0.0);
        assert_eq!(compound_growth_rate(-100.0, 200.0, 5.0), 0.0);
        assert_eq!(compound_growth_rate(100.0, 0.0, 5.0), 0.0);
        assert_eq!(compound_growth_rate(100.0, -200.0, 5.0), 0.0);
        assert_eq!(compound_growth_rate(100.0, 200.0, 0.0), 0.0);
        assert_eq!(compound_growth_rate(100.0, 200.0, -1.0), 0.0);
    }

    #[test]
    fn test_conditional_select() {
        assert_eq!(conditional_select(true, 1.0, 2.0), 1.0);
        assert_eq!(conditional_select(false, "a", "b"), "b");
    }

    #[test]
    fn test_lookup_with_default() {
        let mut mapping = BTreeMap::new();
        mapping.insert(2025, 55000.0);
        assert_eq!(lookup_with_default(&2025, &mapping, 0.0), 55000.0);
        assert_eq!(lookup_with_default(&2030, &mapping, 0.0), 0.0);
    }

    #[test]
    fn test_percentage_change() {
        assert_relative_eq!(percentage_change(100.0, 110.0), 0.1);
        assert_relative_eq!(percentage_change(100.0, 90.0), -0.1);
        assert_eq!(percentage_change(0.0, 110.0), 0.0);
    }

    #[test]
    fn test_multiply_range() {
        assert_eq!(multiply_range(2.0, &[1.0, 2.0, 3.0]), vec![2.0, 4.0, 6.0]);
        assert!(multiply_range(2.0, &[]).is_empty());
    }
}

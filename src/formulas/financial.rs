//! Financial formulas used across the forecast model
//!
//! Zero-denominator handling is deliberately non-uniform: `ratio`-style
//! calculations resolve to 0.0 while the debt service coverage ratio
//! resolves to +infinity. Both policies are contractual; do not unify them.

/// Present value: `FV / (1+rate)^periods`.
pub fn present_value(future_value: f64, rate: f64, periods: f64) -> f64 {
    future_value / (1.0 + rate).powf(periods)
}

/// Future value: `PV * (1+rate)^periods`.
pub fn future_value(present_value: f64, rate: f64, periods: f64) -> f64 {
    present_value * (1.0 + rate).powf(periods)
}

/// Net present value with end-of-period cashflows: the first cashflow is
/// discounted one full period, so there is no time-zero flow.
///
/// Sheet NPV: sum of cashflow[i] / (1 + rate)^(i+1)
pub fn net_present_value(rate: f64, cashflows: &[f64]) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(i, cf)| cf / (1.0 + rate).powi(i as i32 + 1))
        .sum()
}

/// Debt service coverage ratio: net operating income / total debt service.
///
/// Zero debt service reports +infinity (any income covers an empty
/// obligation). This is intentionally a different degenerate policy from
/// `primitives::ratio`.
pub fn debt_service_coverage_ratio(net_operating_income: f64, debt_service: f64) -> f64 {
    if debt_service == 0.0 {
        f64::INFINITY
    } else {
        net_operating_income / debt_service
    }
}

/// Return on equity: net income / shareholder equity, 0.0 on zero equity.
pub fn return_on_equity(net_income: f64, equity: f64) -> f64 {
    if equity == 0.0 {
        0.0
    } else {
        net_income / equity
    }
}

//! Internal Rate of Return via Newton-Raphson root-finding
//!
//! The solver reports its failure cause. A vanishing NPV derivative and an
//! exhausted iteration budget are different outcomes: the first means the
//! update step would blow up (typically a cashflow schedule with no sign
//! change), the second that the tolerance was never met. Callers assert on
//! the distinction, so the two must never collapse into one sentinel.

use serde::{Deserialize, Serialize};

use super::financial::net_present_value;

/// Default initial rate guess (10%)
pub const DEFAULT_INITIAL_GUESS: f64 = 0.1;

/// Default iteration budget
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default convergence tolerance, applied to |NPV| and to the derivative guard
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Outcome of an IRR root-finding attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IrrOutcome {
    /// Newton-Raphson met the tolerance; the contained rate zeroes the NPV
    Converged(f64),
    /// |dNPV/drate| fell below tolerance before convergence
    DerivativeVanished,
    /// Iteration budget exhausted without meeting the tolerance
    IterationsExhausted,
}

impl IrrOutcome {
    /// The converged rate, if any
    pub fn rate(&self) -> Option<f64> {
        match self {
            IrrOutcome::Converged(rate) => Some(*rate),
            _ => None,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, IrrOutcome::Converged(_))
    }

    /// Stable status label for reports and JSON output
    pub fn describe(&self) -> &'static str {
        match self {
            IrrOutcome::Converged(_) => "converged",
            IrrOutcome::DerivativeVanished => "derivative-vanished",
            IrrOutcome::IterationsExhausted => "iterations-exhausted",
        }
    }
}

/// IRR with the default guess, iteration budget, and tolerance.
pub fn internal_rate_of_return(cashflows: &[f64]) -> IrrOutcome {
    internal_rate_of_return_with(
        cashflows,
        DEFAULT_INITIAL_GUESS,
        DEFAULT_MAX_ITERATIONS,
        DEFAULT_TOLERANCE,
    )
}

/// IRR via Newton-Raphson with explicit solver parameters.
///
/// Per iteration: evaluate NPV at the current rate and stop successfully
/// once |NPV| < tolerance. Otherwise step by NPV / NPV' using the analytic
/// derivative, bailing out when the derivative itself drops below the
/// tolerance.
pub fn internal_rate_of_return_with(
    cashflows: &[f64],
    initial_guess: f64,
    max_iterations: u32,
    tolerance: f64,
) -> IrrOutcome {
    let mut rate = initial_guess;

    for _ in 0..max_iterations {
        let npv = net_present_value(rate, cashflows);
        if npv.abs() < tolerance {
            return IrrOutcome::Converged(rate);
        }

        let derivative = npv_derivative(rate, cashflows);
        if derivative.abs() < tolerance {
            return IrrOutcome::DerivativeVanished;
        }

        rate -= npv / derivative;
    }

    IrrOutcome::IterationsExhausted
}

/// Analytic derivative of end-of-period NPV with respect to the rate:
/// sum of -cashflow[i] * (i+1) / (1+rate)^(i+2)
fn npv_derivative(rate: f64, cashflows: &[f64]) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(i, cf)| -cf * (i as f64 + 1.0) / (1.0 + rate).powi(i as i32 + 2))
        .sum()
}

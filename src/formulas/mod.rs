//! Spreadsheet-style formula primitives and financial formulas

pub mod primitives;
pub mod financial;
mod irr;

pub use irr::{
    internal_rate_of_return, internal_rate_of_return_with, IrrOutcome,
    DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

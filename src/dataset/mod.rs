//! Financial dataset structures and input loading

mod data;
pub mod loader;

pub use data::{DatasetError, ExternalRevenueCurve, FinancialDataset};
pub use loader::{load_cashflows, load_dataset, load_revenue_curve, LoadError};

//! Load datasets, revenue curves, and cashflow schedules from input files
//!
//! Datasets arrive as JSON documents; revenue curves and cashflow schedules
//! as small CSV files. Loading is the only I/O in the crate - the forecast
//! engine itself touches no files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::info;
use thiserror::Error;

use super::data::{DatasetError, ExternalRevenueCurve, FinancialDataset};

/// Failures while reading or validating input files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid numeric field: {0}")]
    Parse(#[from] std::num::ParseFloatError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load a financial dataset from a JSON file
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<FinancialDataset, LoadError> {
    let file = open(path.as_ref())?;
    load_dataset_from_reader(file)
}

/// Load a financial dataset from any reader (e.g., string buffer)
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<FinancialDataset, LoadError> {
    let dataset: FinancialDataset = serde_json::from_reader(reader)?;
    dataset.validate()?;
    Ok(dataset)
}

/// Raw CSV row for a revenue curve file with `Year,Revenue` columns
#[derive(Debug, serde::Deserialize)]
struct CurveRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Revenue")]
    revenue: f64,
}

/// Load an external revenue curve from a `Year,Revenue` CSV file
pub fn load_revenue_curve<P: AsRef<Path>>(path: P) -> Result<ExternalRevenueCurve, LoadError> {
    let file = open(path.as_ref())?;
    let curve = load_revenue_curve_from_reader(file)?;
    info!(
        "loaded revenue curve with {} datapoints from {}",
        curve.len(),
        path.as_ref().display()
    );
    Ok(curve)
}

/// Load a revenue curve from any reader
pub fn load_revenue_curve_from_reader<R: Read>(
    reader: R,
) -> Result<ExternalRevenueCurve, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut curve = ExternalRevenueCurve::new();

    for result in csv_reader.deserialize() {
        let row: CurveRow = result?;
        curve.insert(row.year, row.revenue);
    }

    Ok(curve)
}

/// Load a cashflow schedule from a single-column CSV file
///
/// Only the first field of each record is read, so `Period,Amount` files
/// with the amount in the first column after reordering also work.
pub fn load_cashflows<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, LoadError> {
    let file = open(path.as_ref())?;
    load_cashflows_from_reader(file)
}

/// Load a cashflow schedule from any reader
pub fn load_cashflows_from_reader<R: Read>(reader: R) -> Result<Vec<f64>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut cashflows = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        cashflows.push(record[0].trim().parse::<f64>()?);
    }

    Ok(cashflows)
}

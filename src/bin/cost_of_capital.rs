//! Calculate NPV and IRR for a cashflow schedule
//!
//! Reads a single-column cashflow CSV and reports the NPV at a chosen
//! discount rate plus the IRR, including the solver's failure cause when
//! no rate is found. Supports JSON output for API integration via --json.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use corporate_forecast::dataset::load_cashflows;
use corporate_forecast::formulas::{internal_rate_of_return, IrrOutcome};
use corporate_forecast::formulas::financial::net_present_value;

#[derive(Parser)]
#[command(name = "cost_of_capital", version, about = "NPV and IRR for a cashflow schedule")]
struct Args {
    /// Cashflow CSV file (one amount per row, header line skipped)
    cashflows: PathBuf,

    /// Annual discount rate for the NPV calculation
    #[arg(long, default_value_t = 0.1)]
    rate: f64,

    /// Emit JSON instead of the human-readable report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct CostOfCapitalReport {
    cashflow_count: usize,
    discount_rate: f64,
    npv: f64,
    irr: Option<f64>,
    irr_status: &'static str,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cashflows = load_cashflows(&args.cashflows)
        .with_context(|| format!("loading cashflows from {}", args.cashflows.display()))?;

    let npv = net_present_value(args.rate, &cashflows);
    let outcome = internal_rate_of_return(&cashflows);

    let report = CostOfCapitalReport {
        cashflow_count: cashflows.len(),
        discount_rate: args.rate,
        npv,
        irr: outcome.rate(),
        irr_status: outcome.describe(),
    };

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!("Cashflows: {}", report.cashflow_count);
    println!("NPV @ {:.2}%: {:.2}", report.discount_rate * 100.0, report.npv);

    match outcome {
        IrrOutcome::Converged(rate) => {
            println!("IRR: {:.4}%", rate * 100.0);
        }
        IrrOutcome::DerivativeVanished => {
            println!("IRR: no solution (NPV derivative vanished; check for a sign change)");
        }
        IrrOutcome::IterationsExhausted => {
            println!("IRR: no solution (iteration budget exhausted)");
        }
    }

    Ok(())
}

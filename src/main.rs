//! Corporate Forecast CLI
//!
//! Runs the multi-year forecast for a dataset and revenue curve and prints
//! a per-year summary table. Falls back to the built-in reference model
//! when no inputs are supplied.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use corporate_forecast::dataset::{load_dataset, load_revenue_curve};
use corporate_forecast::{ExternalRevenueCurve, FinancialDataset, ForecastEngine};

#[derive(Parser)]
#[command(name = "corporate_forecast", version, about = "Multi-year corporate financial forecast")]
struct Args {
    /// Dataset JSON file; defaults to the built-in reference model
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Revenue curve CSV (Year,Revenue); defaults to the reference projections
    #[arg(long)]
    curve: Option<PathBuf>,

    /// Emit the full result as JSON instead of the table
    #[arg(long)]
    json: bool,

    /// Write per-year rows to this CSV path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dataset = match &args.dataset {
        Some(path) => load_dataset(path)
            .with_context(|| format!("loading dataset from {}", path.display()))?,
        None => FinancialDataset::reference_model(),
    };

    let curve = match &args.curve {
        Some(path) => load_revenue_curve(path)
            .with_context(|| format!("loading revenue curve from {}", path.display()))?,
        None => ExternalRevenueCurve::reference_projections(),
    };

    let engine = ForecastEngine::new(dataset, curve);
    let result = engine.run_full_forecast();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_forecast(&result);
    }

    if let Some(path) = &args.output {
        write_csv(path, &result)
            .with_context(|| format!("writing forecast CSV to {}", path.display()))?;
        if !args.json {
            println!("\nFull results written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_forecast(result: &corporate_forecast::ForecastResult) {
    println!("Corporate Forecast v0.1.0");
    println!("=========================\n");

    println!("Key Ratios (constant across years):");
    println!("  Goodwill + Intangibles: ${:.0}", result.ratios.goodwill_and_intangibles);
    println!("  Debt-to-Equity:         {:.3}", result.ratios.debt_to_equity);
    println!("  Cost of Sales Ratio:    {:.1}%", result.ratios.cost_of_sales_ratio * 100.0);

    println!("\nRevenue Growth Rates:");
    for (year, rate) in result.growth_rates.iter() {
        println!("  {}: {:.2}%", year, rate * 100.0);
    }

    println!("\nForecast by Year:");
    println!("{:>6} {:>14} {:>16} {:>14} {:>8}",
        "Year", "Revenue", "Cost of Sales", "Gross Profit", "Margin");
    println!("{}", "-".repeat(62));

    for row in &result.rows {
        println!("{:>6} {:>14.0} {:>16.0} {:>14.0} {:>7.1}%",
            row.year,
            row.revenue,
            row.cost_of_sales,
            row.gross_profit(),
            row.gross_margin() * 100.0,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Years:    {}", summary.total_years);
    println!("  Base Revenue:   ${:.0}", summary.base_revenue);
    println!("  Final Revenue:  ${:.0}", summary.final_revenue);
    println!("  Final Margin:   {:.1}%", summary.final_gross_margin * 100.0);
}

fn write_csv(path: &PathBuf, result: &corporate_forecast::ForecastResult) -> anyhow::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Year,Revenue,CostOfSales,GrossProfit,DebtToEquity,GoodwillIntangibles")?;
    for row in &result.rows {
        writeln!(file, "{},{:.8},{:.8},{:.8},{:.8},{:.8}",
            row.year,
            row.revenue,
            row.cost_of_sales,
            row.gross_profit(),
            row.balance_sheet.debt_to_equity,
            row.balance_sheet.goodwill_and_intangibles,
        )?;
    }

    Ok(())
}

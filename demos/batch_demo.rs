// Example: batch_demo.rs
// Prices every contract of a CSV file and prints a table sorted by strike.
//
// Usage:
//     cargo run --example batch_demo -- <csv_path> [config.toml]
//
// The CSV must have the columns expected by `load_contracts_csv`:
//     label,asset_price,asset_volatility,strike_price,time_to_expiration,risk_free_rate

use std::env;

use anyhow::{bail, Result};
use bs_pricing_lib::{load_contracts_csv, price_contracts, PricingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!(
            "Usage: {} <csv_file> [config.toml]\nExample: {} tests/data/contracts.csv",
            args[0],
            args[0]
        );
    }

    let config = match args.get(2) {
        Some(path) => PricingConfig::from_file(path)?,
        None => PricingConfig::reference(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .with_writer(std::io::stderr)
        .init();

    let rows = load_contracts_csv(&args[1])?;
    println!("Loaded {} contracts", rows.len());

    let results = price_contracts(rows, &config);

    println!(
        "\n{:<12} {:>8} {:>8} {:>6} {:>6} {:>8} {:>12} {:>12}",
        "Label", "Spot", "Strike", "Vol", "T", "Rate", "Call", "Put"
    );
    println!("{}", "-".repeat(80));
    for r in &results {
        let c = &r.contract;
        let fmt_leg = |leg: &Result<f64, bs_pricing_lib::PricingError>| match leg {
            Ok(p) => format!("{:.4}", p),
            Err(_) => "error".to_string(),
        };
        println!(
            "{:<12} {:>8.2} {:>8.2} {:>6.3} {:>6.3} {:>8.4} {:>12} {:>12}",
            r.label.as_deref().unwrap_or("-"),
            c.asset_price,
            c.strike_price,
            c.asset_volatility,
            c.time_to_expiration,
            c.risk_free_rate,
            fmt_leg(&r.call),
            fmt_leg(&r.put),
        );
    }

    let failures: Vec<_> = results.iter().filter(|r| !r.is_ok()).collect();
    if !failures.is_empty() {
        println!("\nRejected contracts:");
        for r in failures {
            if let Err(e) = r.call.as_ref().and(r.put.as_ref()) {
                println!("  {}: {}", r.label.as_deref().unwrap_or("-"), e);
            }
        }
    }

    Ok(())
}

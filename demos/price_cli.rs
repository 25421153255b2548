// Example: price_cli.rs
// Prices one European call and put from command-line flags or a TOML config.
//
// Usage:
//     cargo run --example price_cli
//     cargo run --example price_cli -- --asset-price 105 --strike-price 100 --risk-free-rate 0.02
//     cargo run --example price_cli -- --config pricing.toml -v
//
// Flags override values loaded from --config; anything unset falls back to the
// reference contract (S=100, σ=0.3, K=100, T=1, r=0.01).

use anyhow::Result;
use bs_pricing_lib::{price_pair, DegeneratePolicy, PricingConfig};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    Strict,
    IntrinsicLimit,
}

impl From<Policy> for DegeneratePolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Strict => DegeneratePolicy::Strict,
            Policy::IntrinsicLimit => DegeneratePolicy::IntrinsicLimit,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Black-Scholes price of a European call and put")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Current price of the underlying (S)
    #[arg(long)]
    asset_price: Option<f64>,

    /// Annualized volatility (σ), as decimal
    #[arg(long)]
    asset_volatility: Option<f64>,

    /// Exercise price (K)
    #[arg(long)]
    strike_price: Option<f64>,

    /// Time to expiration in years (T)
    #[arg(long)]
    time_to_expiration: Option<f64>,

    /// Continuously-compounded risk-free rate (r)
    #[arg(long, allow_hyphen_values = true)]
    risk_free_rate: Option<f64>,

    /// Treatment of zero volatility or zero time to expiration
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Increase log verbosity (-v summary, -vv detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PricingConfig::from_file(path)?,
        None => PricingConfig::default(),
    };
    config.verbosity = config.verbosity.max(args.verbose);
    if let Some(policy) = args.policy {
        config.degenerate_policy = policy.into();
    }

    let contract = &mut config.contract;
    if let Some(v) = args.asset_price {
        contract.asset_price = v;
    }
    if let Some(v) = args.asset_volatility {
        contract.asset_volatility = v;
    }
    if let Some(v) = args.strike_price {
        contract.strike_price = v;
    }
    if let Some(v) = args.time_to_expiration {
        contract.time_to_expiration = v;
    }
    if let Some(v) = args.risk_free_rate {
        contract.risk_free_rate = v;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(contract = ?config.contract, policy = ?config.degenerate_policy, "pricing");

    let prices = price_pair(&config.contract, config.degenerate_policy)?;
    println!("European call price is: {}", prices.call);
    println!("European put price is: {}", prices.put);

    if config.verbosity >= 1 {
        println!(
            "Put-call parity residual: {:.3e}",
            prices.parity_residual(&config.contract)
        );
    }

    Ok(())
}

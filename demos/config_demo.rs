// Example: config_demo.rs
// Walks through the pricing presets and a TOML configuration, then prices the
// reference contract under each of them.
//
// Usage:
//     cargo run --example config_demo

use bs_pricing_lib::{default_configs, price_pair, PricingConfig};

fn main() -> anyhow::Result<()> {
    println!("bs-pricing-lib Configuration Examples\n");

    // 1. Strict configuration
    println!("1. Strict Configuration (default):");
    let strict = default_configs::strict();
    println!("   Contract: {:?}", strict.contract);
    println!("   Degenerate policy: {:?}", strict.degenerate_policy);
    println!("   Use case: Pricing where σ = 0 or T = 0 indicates bad data\n");

    // 2. Lenient configuration
    println!("2. Lenient Configuration (intrinsic limit):");
    let lenient = default_configs::lenient();
    println!("   Degenerate policy: {:?}", lenient.degenerate_policy);
    println!("   Use case: Expiring contracts, zero-vol scenarios\n");

    // 3. Configuration from TOML
    println!("3. Configuration from TOML:");
    let text = r#"
        verbosity = 1
        degenerate_policy = "intrinsic_limit"

        [contract]
        asset_price = 105.0
        time_to_expiration = 0.0
    "#;
    let from_toml = PricingConfig::from_toml_str(text)?;
    println!("   Contract: {:?}", from_toml.contract);
    println!("   Log filter: {}\n", from_toml.log_filter());

    for (name, config) in [
        ("strict", strict),
        ("lenient", lenient),
        ("toml", from_toml),
    ] {
        match price_pair(&config.contract, config.degenerate_policy) {
            Ok(prices) => println!(
                "[{name}] call = {:.4}, put = {:.4}",
                prices.call, prices.put
            ),
            Err(e) => println!("[{name}] pricing failed: {e}"),
        }
    }

    // Strict pricing of the same expired contract fails with a typed error
    let expired = PricingConfig::from_toml_str(text)?.contract;
    match price_pair(&expired, default_configs::strict().degenerate_policy) {
        Ok(_) => println!("[strict, expired] unexpectedly priced"),
        Err(e) => println!("[strict, expired] rejected: {e}"),
    }

    Ok(())
}

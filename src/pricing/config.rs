use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::pricing::types::{ContractParams, DegeneratePolicy};

/// Main configuration struct for a pricing run
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Contract to price; missing fields fall back to the reference scenario
    #[serde(default)]
    pub contract: ContractParams,

    /// Treatment of `σ = 0` / `T = 0`
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,

    /// Verbosity level (0=silent, 1=summary, 2=per-contract detail)
    #[serde(default)]
    pub verbosity: u8,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            contract: ContractParams::reference(),
            degenerate_policy: DegeneratePolicy::default(),
            verbosity: 0,
        }
    }
}

impl PricingConfig {
    /// Reference contract, degenerate inputs rejected
    pub fn strict() -> Self {
        Self::default()
    }

    /// Reference contract, degenerate inputs priced at their intrinsic limit
    pub fn lenient() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::IntrinsicLimit,
            ..Self::default()
        }
    }

    /// Reference contract with summary output enabled
    pub fn reference() -> Self {
        Self {
            verbosity: 1,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PricingConfig =
            toml::from_str(text).context("Failed to parse pricing configuration")?;
        debug!(?config, "parsed pricing configuration");
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// `tracing` filter directive matching `verbosity`
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_reference_scenario() {
        let config = PricingConfig::from_toml_str("").unwrap();
        assert_eq!(config, PricingConfig::default());
        assert_eq!(config.contract, ContractParams::reference());
        assert_eq!(config.degenerate_policy, DegeneratePolicy::Strict);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn test_partial_contract_override() {
        let text = r#"
            verbosity = 2
            degenerate_policy = "intrinsic_limit"

            [contract]
            strike_price = 110.0
            risk_free_rate = -0.005
        "#;
        let config = PricingConfig::from_toml_str(text).unwrap();
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.degenerate_policy, DegeneratePolicy::IntrinsicLimit);
        assert_eq!(config.contract.strike_price, 110.0);
        assert_eq!(config.contract.risk_free_rate, -0.005);
        // Untouched fields keep their reference values
        assert_eq!(config.contract.asset_price, 100.0);
        assert_eq!(config.contract.asset_volatility, 0.3);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_policy() {
        assert!(PricingConfig::from_toml_str("volatility = 0.3").is_err());
        assert!(PricingConfig::from_toml_str(r#"degenerate_policy = "clamp""#).is_err());

        // Misspelled contract keys must not fall back to the reference contract
        let typo = "[contract]\nasset_vol = 0.9\nstrike = 150.0\n";
        let err = PricingConfig::from_toml_str(typo).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown field"), "{err:#}");

        let typo = "[contract]\nasset_volatility = 0.9\nstrike = 150.0\n";
        assert!(PricingConfig::from_toml_str(typo).is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(PricingConfig::strict().degenerate_policy, DegeneratePolicy::Strict);
        assert_eq!(
            PricingConfig::lenient().degenerate_policy,
            DegeneratePolicy::IntrinsicLimit
        );
        assert_eq!(PricingConfig::reference().verbosity, 1);
        assert_eq!(PricingConfig::strict().log_filter(), "warn");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = PricingConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.toml"));
    }
}

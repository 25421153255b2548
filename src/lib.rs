//! # bs-pricing-lib: Closed-Form European Option Pricing
//!
//! `bs-pricing-lib` prices European call and put options on a non-dividend-paying
//! underlying with the Black-Scholes formula. Every price is a pure function of
//! five inputs, so any call can run concurrently with any other.
//!
//! ## Core Features
//!
//! - **Standard normal CDF**: self-contained, saturating, symmetric `Φ(x)`
//! - **Call and put pricers**: closed-form prices with typed input errors
//! - **Degenerate inputs**: `σ = 0` / `T = 0` either rejected or priced at the intrinsic limit
//! - **Configuration**: TOML-driven pricing runs (`serde` feature)
//! - **Batch pricing**: CSV contract files priced in one pass (`serde` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricing_lib::{price_call, price_put};
//!
//! // S = 100, σ = 30%, K = 100, T = 1y, r = 1%
//! let call = price_call(100.0, 0.3, 100.0, 1.0, 0.01)?;
//! let put = price_put(100.0, 0.3, 100.0, 1.0, 0.01)?;
//!
//! assert!((call - 12.37).abs() < 0.01);
//! assert!((put - 11.37).abs() < 0.01);
//! # Ok::<(), bs_pricing_lib::PricingError>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `strict()`: degenerate inputs are errors (default)
//! - `lenient()`: degenerate inputs price at their intrinsic limit
//! - `reference()`: strict, with summary logging

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use models::bs::{bs_call_price, bs_put_price};
use models::utils::price_both;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{ParseOptionTypeError, PricingError, PricingResult};
pub use models::bs::{EuropeanCall, EuropeanPut};
pub use models::normal::{norm_cdf, CDF_SATURATION};
pub use models::traits::OptionPricer;
pub use models::utils::price_option;
pub use pricing::types::{
    BatchPricingResult, ContractParams, ContractRow, DegeneratePolicy, OptionType, PricePair,
};

#[cfg(feature = "serde")]
pub use pricing::{
    batch::{load_contracts_csv, price_contracts, read_contracts_csv},
    config::PricingConfig,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricing settings.
///
/// All presets price the reference contract (S=100, σ=0.3, K=100, T=1, r=0.01);
/// they differ in how degenerate inputs are handled and how much is logged.
///
/// # Example
///
/// ```rust
/// use bs_pricing_lib::{default_configs, DegeneratePolicy};
///
/// let config = default_configs::lenient();
/// assert_eq!(config.degenerate_policy, DegeneratePolicy::IntrinsicLimit);
/// ```
#[cfg(feature = "serde")]
pub mod default_configs {
    use crate::pricing::config::PricingConfig;

    /// Degenerate inputs (`σ = 0` or `T = 0`) are rejected with `InvalidParameter`.
    pub fn strict() -> PricingConfig {
        PricingConfig::strict()
    }

    /// Degenerate inputs price at `max(S − K·e^(−rT), 0)` / `max(K·e^(−rT) − S, 0)`.
    pub fn lenient() -> PricingConfig {
        PricingConfig::lenient()
    }

    /// Strict pricing with summary output.
    pub fn reference() -> PricingConfig {
        PricingConfig::reference()
    }
}

/// Price a European call option.
///
/// # Arguments
///
/// * `asset_price` - Current price of the underlying (S), must be positive
/// * `asset_volatility` - Annualized volatility (σ), must be positive
/// * `strike_price` - Exercise price (K), must be positive
/// * `time_to_expiration` - Years to expiry (T), must be positive
/// * `risk_free_rate` - Continuously-compounded rate (r), may be negative
///
/// # Errors
///
/// * [`PricingError::InvalidParameter`] if S, σ, K or T is not strictly positive,
///   or any input is not finite
/// * [`PricingError::NumericOverflow`] if the discount factor or `σ·√T` is not representable
///
/// Use [`price_call_with_policy`] to price `σ = 0` or `T = 0` at the intrinsic limit instead.
pub fn price_call(
    asset_price: f64,
    asset_volatility: f64,
    strike_price: f64,
    time_to_expiration: f64,
    risk_free_rate: f64,
) -> PricingResult<f64> {
    let contract = ContractParams::new(
        asset_price,
        asset_volatility,
        strike_price,
        time_to_expiration,
        risk_free_rate,
    );
    bs_call_price(&contract, DegeneratePolicy::Strict)
}

/// Price a European put option.
///
/// Same arguments and errors as [`price_call`].
pub fn price_put(
    asset_price: f64,
    asset_volatility: f64,
    strike_price: f64,
    time_to_expiration: f64,
    risk_free_rate: f64,
) -> PricingResult<f64> {
    let contract = ContractParams::new(
        asset_price,
        asset_volatility,
        strike_price,
        time_to_expiration,
        risk_free_rate,
    );
    bs_put_price(&contract, DegeneratePolicy::Strict)
}

/// Price a European call with an explicit degenerate-input policy.
pub fn price_call_with_policy(
    contract: &ContractParams,
    policy: DegeneratePolicy,
) -> PricingResult<f64> {
    bs_call_price(contract, policy)
}

/// Price a European put with an explicit degenerate-input policy.
pub fn price_put_with_policy(
    contract: &ContractParams,
    policy: DegeneratePolicy,
) -> PricingResult<f64> {
    bs_put_price(contract, policy)
}

/// Price both legs of one contract.
///
/// # Example
///
/// ```rust
/// use bs_pricing_lib::{price_pair, ContractParams, DegeneratePolicy};
///
/// let contract = ContractParams::reference();
/// let prices = price_pair(&contract, DegeneratePolicy::Strict)?;
/// assert!(prices.parity_residual(&contract).abs() < 1e-10);
/// # Ok::<(), bs_pricing_lib::PricingError>(())
/// ```
pub fn price_pair(
    contract: &ContractParams,
    policy: DegeneratePolicy,
) -> PricingResult<PricePair> {
    price_both(contract, policy)
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseOptionTypeError, PricingError, PricingResult};

/// Option type: call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = ParseOptionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(ParseOptionTypeError(other.to_string())),
        }
    }
}

/// How the pricers treat zero volatility or zero time to expiration.
///
/// Negative values are rejected under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DegeneratePolicy {
    /// `σ = 0` or `T = 0` is an [`PricingError::InvalidParameter`].
    #[default]
    Strict,
    /// `σ = 0` or `T = 0` prices at the discounted intrinsic value,
    /// the limit of the formula as `σ·√T → 0+`.
    IntrinsicLimit,
}

/// The five inputs of the Black-Scholes formula for one European contract.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ContractParams {
    /// Current price of the underlying (S)
    pub asset_price: f64,
    /// Annualized volatility of log-returns (σ, as decimal, e.g. 0.3 for 30%)
    pub asset_volatility: f64,
    /// Exercise price (K)
    pub strike_price: f64,
    /// Time to expiration in years (T)
    pub time_to_expiration: f64,
    /// Continuously-compounded annual risk-free rate (r), may be negative
    pub risk_free_rate: f64,
}

impl Default for ContractParams {
    fn default() -> Self {
        Self::reference()
    }
}

impl ContractParams {
    pub fn new(
        asset_price: f64,
        asset_volatility: f64,
        strike_price: f64,
        time_to_expiration: f64,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            asset_price,
            asset_volatility,
            strike_price,
            time_to_expiration,
            risk_free_rate,
        }
    }

    /// At-the-money one-year contract: S=100, σ=0.3, K=100, T=1, r=0.01.
    pub fn reference() -> Self {
        Self::new(100.0, 0.3, 100.0, 1.0, 0.01)
    }

    /// `e^(−rT)`
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiration).exp()
    }

    /// Discounted strike `K·e^(−rT)`
    pub fn discounted_strike(&self) -> f64 {
        self.discount_factor() * self.strike_price
    }

    /// Checks the inputs against the domain of the formula.
    ///
    /// S and K must be strictly positive and r finite. σ and T must be strictly
    /// positive under [`DegeneratePolicy::Strict`]; under
    /// [`DegeneratePolicy::IntrinsicLimit`] zero is accepted as well.
    pub fn validate(&self, policy: DegeneratePolicy) -> PricingResult<()> {
        check_positive("asset_price", self.asset_price)?;
        check_positive("strike_price", self.strike_price)?;
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::invalid(
                "risk_free_rate",
                self.risk_free_rate,
                "must be finite",
            ));
        }
        match policy {
            DegeneratePolicy::Strict => {
                check_positive("asset_volatility", self.asset_volatility)?;
                check_positive("time_to_expiration", self.time_to_expiration)?;
            }
            DegeneratePolicy::IntrinsicLimit => {
                check_non_negative("asset_volatility", self.asset_volatility)?;
                check_non_negative("time_to_expiration", self.time_to_expiration)?;
            }
        }
        Ok(())
    }

    /// True when `σ = 0` or `T = 0`, i.e. the formula has no diffusion term.
    pub fn is_degenerate(&self) -> bool {
        self.asset_volatility == 0.0 || self.time_to_expiration == 0.0
    }
}

fn check_positive(name: &'static str, value: f64) -> PricingResult<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(name, value, "must be positive"));
    }
    Ok(())
}

fn check_non_negative(name: &'static str, value: f64) -> PricingResult<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(PricingError::invalid(name, value, "must be non-negative"));
    }
    Ok(())
}

/// Call and put prices for the same contract
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricePair {
    pub call: f64,
    pub put: f64,
}

impl PricePair {
    pub fn get(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }

    /// `(C − P) − (S − K·e^(−rT))`; zero up to rounding when parity holds.
    pub fn parity_residual(&self, contract: &ContractParams) -> f64 {
        (self.call - self.put) - (contract.asset_price - contract.discounted_strike())
    }
}

/// One input line of a batch: an optional label plus the contract
#[derive(Debug, Clone, PartialEq)]
pub struct ContractRow {
    pub label: Option<String>,
    pub contract: ContractParams,
}

impl From<ContractParams> for ContractRow {
    fn from(contract: ContractParams) -> Self {
        Self {
            label: None,
            contract,
        }
    }
}

/// Per-contract output of [`price_contracts`](crate::price_contracts).
///
/// Each leg keeps its own result so a rejected contract is reported instead of
/// being silently priced at zero.
#[derive(Debug, Clone)]
pub struct BatchPricingResult {
    pub label: Option<String>,
    pub contract: ContractParams,
    pub call: PricingResult<f64>,
    pub put: PricingResult<f64>,
}

impl BatchPricingResult {
    /// Both legs, if both priced successfully.
    pub fn pair(&self) -> Option<PricePair> {
        match (&self.call, &self.put) {
            (Ok(call), Ok(put)) => Some(PricePair {
                call: *call,
                put: *put,
            }),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.call.is_ok() && self.put.is_ok()
    }
}

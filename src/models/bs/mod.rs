// Closed-form Black-Scholes prices for European calls and puts on a
// non-dividend-paying underlying. Implied volatility and Greeks are out of
// scope for this crate.

use tracing::trace;

use crate::error::{PricingError, PricingResult};
use crate::models::normal::norm_cdf;
use crate::models::traits::OptionPricer;
use crate::pricing::types::{ContractParams, DegeneratePolicy, OptionType};

/// Price of a European call option under Black-Scholes assumptions.
///
/// ```text
/// discount = e^(−rT)
/// d1 = [ln(S / (discount·K)) + ½σ²T] / (σ√T)
/// d2 = d1 − σ√T
/// C  = S·Φ(d1) − discount·K·Φ(d2)
/// ```
pub fn bs_call_price(contract: &ContractParams, policy: DegeneratePolicy) -> PricingResult<f64> {
    contract.validate(policy)?;
    let discounted_strike = checked_discounted_strike(contract)?;
    let s = contract.asset_price;

    let Some(vol_sqrt_t) = diffusion_scale(contract)? else {
        return Ok((s - discounted_strike).max(0.0));
    };

    let (d1, d2) = d_terms((s / discounted_strike).ln(), vol_sqrt_t);
    let price = s * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    if !price.is_finite() {
        return Err(PricingError::overflow("call price"));
    }

    trace!(d1, d2, price, "european call");
    Ok(price.max(0.0))
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// Mirrors [`bs_call_price`] with the log ratio inverted:
///
/// ```text
/// d1 = [ln(discount·K / S) + ½σ²T] / (σ√T)
/// d2 = d1 − σ√T
/// P  = discount·K·Φ(d1) − S·Φ(d2)
/// ```
pub fn bs_put_price(contract: &ContractParams, policy: DegeneratePolicy) -> PricingResult<f64> {
    contract.validate(policy)?;
    let discounted_strike = checked_discounted_strike(contract)?;
    let s = contract.asset_price;

    let Some(vol_sqrt_t) = diffusion_scale(contract)? else {
        return Ok((discounted_strike - s).max(0.0));
    };

    let (d1, d2) = d_terms((discounted_strike / s).ln(), vol_sqrt_t);
    let price = discounted_strike * norm_cdf(d1) - s * norm_cdf(d2);
    if !price.is_finite() {
        return Err(PricingError::overflow("put price"));
    }

    trace!(d1, d2, price, "european put");
    Ok(price.max(0.0))
}

/// `K·e^(−rT)`, rejecting an infinite discount factor (very negative `r·T`).
fn checked_discounted_strike(contract: &ContractParams) -> PricingResult<f64> {
    let discount = contract.discount_factor();
    if !discount.is_finite() {
        return Err(PricingError::overflow("discount factor"));
    }
    let discounted_strike = discount * contract.strike_price;
    if !discounted_strike.is_finite() {
        return Err(PricingError::overflow("discounted strike"));
    }
    Ok(discounted_strike)
}

/// `σ√T`, or `None` when it is zero and the price collapses to its intrinsic limit.
///
/// Zero is only reachable through validated inputs when the policy allows
/// degenerate contracts or when `σ√T` underflows.
fn diffusion_scale(contract: &ContractParams) -> PricingResult<Option<f64>> {
    let vol_sqrt_t = contract.asset_volatility * contract.time_to_expiration.sqrt();
    if !vol_sqrt_t.is_finite() {
        return Err(PricingError::overflow("volatility scaling σ·√T"));
    }
    if vol_sqrt_t == 0.0 {
        return Ok(None);
    }
    Ok(Some(vol_sqrt_t))
}

/// `d1 = L/(σ√T) + ½σ√T` and `d2 = d1 − σ√T` for a log ratio `L`.
///
/// Algebraically identical to `[L ± ½σ²T] / (σ√T)`, but never squares σ so a
/// large volatility cannot overflow before the division.
fn d_terms(log_ratio: f64, vol_sqrt_t: f64) -> (f64, f64) {
    let d1 = log_ratio / vol_sqrt_t + 0.5 * vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// European call pricer carrying its degenerate-input policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuropeanCall {
    pub policy: DegeneratePolicy,
}

/// European put pricer carrying its degenerate-input policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuropeanPut {
    pub policy: DegeneratePolicy,
}

impl OptionPricer for EuropeanCall {
    fn option_type(&self) -> OptionType {
        OptionType::Call
    }

    fn price(&self, contract: &ContractParams) -> PricingResult<f64> {
        bs_call_price(contract, self.policy)
    }
}

impl OptionPricer for EuropeanPut {
    fn option_type(&self) -> OptionType {
        OptionType::Put
    }

    fn price(&self, contract: &ContractParams) -> PricingResult<f64> {
        bs_put_price(contract, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-4;
    const STRICT: DegeneratePolicy = DegeneratePolicy::Strict;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual} (tol {tol})"
        );
    }

    #[test]
    fn test_european_call_known_values() {
        let dp = ContractParams::new(100.0, 0.3, 100.0, 1.0, 0.01);
        assert_close(bs_call_price(&dp, STRICT).unwrap(), 12.368267, TOLERANCE);

        let dp = ContractParams::new(300.0, 0.15, 250.0, 1.0, 0.03);
        assert_close(bs_call_price(&dp, STRICT).unwrap(), 58.8197, TOLERANCE);

        let dp = ContractParams::new(310.0, 0.25, 250.0, 3.5, 0.05);
        assert_close(bs_call_price(&dp, STRICT).unwrap(), 113.4155, TOLERANCE);
    }

    #[test]
    fn test_european_put_known_values() {
        let dp = ContractParams::new(100.0, 0.3, 100.0, 1.0, 0.01);
        assert_close(bs_put_price(&dp, STRICT).unwrap(), 11.373251, TOLERANCE);

        let dp = ContractParams::new(300.0, 0.15, 250.0, 1.0, 0.03);
        assert_close(bs_put_price(&dp, STRICT).unwrap(), 1.4312, TOLERANCE);

        let dp = ContractParams::new(310.0, 0.25, 250.0, 3.5, 0.05);
        assert_close(bs_put_price(&dp, STRICT).unwrap(), 13.2798, TOLERANCE);
    }

    #[test]
    fn test_negative_rate() {
        let dp = ContractParams::new(100.0, 0.2, 110.0, 0.5, -0.01);
        assert_close(bs_call_price(&dp, STRICT).unwrap(), 2.088323, TOLERANCE);
        assert_close(bs_put_price(&dp, STRICT).unwrap(), 12.639701, TOLERANCE);
    }

    #[test]
    fn test_d_terms_match_unsimplified_formula() {
        let (s, sigma, k, t, r): (f64, f64, f64, f64, f64) = (50.0, 0.4, 60.0, 2.0, 0.05);
        let discount = (-r * t).exp();
        let log_ratio = (s / (discount * k)).ln();
        let denom = sigma * t.sqrt();
        let d1_ref = (log_ratio + 0.5 * sigma * sigma * t) / denom;
        let d2_ref = (log_ratio - 0.5 * sigma * sigma * t) / denom;

        let (d1, d2) = d_terms(log_ratio, denom);
        assert_close(d1, d1_ref, 1e-14);
        assert_close(d2, d2_ref, 1e-14);
    }

    #[test]
    fn test_degenerate_inputs_strict() {
        let zero_vol = ContractParams::new(100.0, 0.0, 100.0, 1.0, 0.01);
        let zero_t = ContractParams::new(100.0, 0.3, 100.0, 0.0, 0.01);
        for dp in [zero_vol, zero_t] {
            assert!(bs_call_price(&dp, STRICT).unwrap_err().is_invalid_parameter());
            assert!(bs_put_price(&dp, STRICT).unwrap_err().is_invalid_parameter());
        }
    }

    #[test]
    fn test_degenerate_inputs_intrinsic_limit() {
        let policy = DegeneratePolicy::IntrinsicLimit;

        // σ = 0, in the money call: S − K·e^(−rT)
        let dp = ContractParams::new(110.0, 0.0, 100.0, 1.0, 0.05);
        let expected = 110.0 - 100.0 * (-0.05f64).exp();
        assert_close(bs_call_price(&dp, policy).unwrap(), expected, 1e-12);
        assert_eq!(bs_put_price(&dp, policy).unwrap(), 0.0);

        // T = 0: plain intrinsic value, no discounting
        let dp = ContractParams::new(90.0, 0.3, 100.0, 0.0, 0.05);
        assert_eq!(bs_call_price(&dp, policy).unwrap(), 0.0);
        assert_close(bs_put_price(&dp, policy).unwrap(), 10.0, 1e-12);
    }

    #[test]
    fn test_overflow_guards() {
        // e^(−rT) overflows for a hugely negative rate
        let dp = ContractParams::new(100.0, 0.3, 100.0, 10.0, -1e3);
        assert_eq!(
            bs_call_price(&dp, STRICT).unwrap_err(),
            PricingError::overflow("discount factor")
        );

        // σ·√T overflows
        let dp = ContractParams::new(100.0, 1e300, 100.0, 1e300, 0.01);
        assert!(matches!(
            bs_put_price(&dp, STRICT),
            Err(PricingError::NumericOverflow { .. })
        ));
    }

    #[test]
    fn test_extreme_but_representable_inputs_saturate() {
        // Huge volatility: call → S, put → K·e^(−rT)
        let dp = ContractParams::new(100.0, 1e6, 100.0, 1.0, 0.01);
        assert_close(bs_call_price(&dp, STRICT).unwrap(), 100.0, 1e-9);
        assert_close(bs_put_price(&dp, STRICT).unwrap(), dp.discounted_strike(), 1e-9);

        // Tiny volatility on a far out of the money call
        let dp = ContractParams::new(100.0, 1e-12, 200.0, 1.0, 0.0);
        assert_eq!(bs_call_price(&dp, STRICT).unwrap(), 0.0);
    }

    #[test]
    fn test_pricer_trait_dispatch() {
        let dp = ContractParams::reference();
        let call = EuropeanCall::default();
        let put = EuropeanPut::default();
        assert_eq!(call.option_type(), OptionType::Call);
        assert_eq!(put.option_type(), OptionType::Put);
        assert_eq!(call.price(&dp).unwrap(), bs_call_price(&dp, STRICT).unwrap());
        assert_eq!(put.price(&dp).unwrap(), bs_put_price(&dp, STRICT).unwrap());
    }
}

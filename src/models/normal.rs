// Standard normal distribution helpers used by the closed-form pricers.
// Only the CDF is needed; densities belong to Greeks, which this crate does not compute.

use std::f64::consts::FRAC_1_SQRT_2;

/// Beyond this magnitude Φ(x) is returned as exactly 0.0 or 1.0.
///
/// `erfc(40 / √2)` is already far below the smallest subnormal `f64`, so the
/// cut-off only short-circuits work that would round to the same value.
pub const CDF_SATURATION: f64 = 40.0;

/// Cumulative distribution function of the standard normal distribution.
///
/// Evaluated as `Φ(x) = ½·erfc(−x/√2)`. Going through `erfc` instead of
/// `1 + erf` keeps full relative precision in the lower tail, which is where
/// deep out-of-the-money legs live.
///
/// # Examples
///
/// ```rust
/// use bs_pricing_lib::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0), 0.5);
/// assert!((norm_cdf(1.0) - 0.841_344_746).abs() < 1e-8);
/// assert_eq!(norm_cdf(-50.0), 0.0);
/// ```
pub fn norm_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= -CDF_SATURATION {
        return 0.0;
    }
    if x >= CDF_SATURATION {
        return 1.0;
    }
    0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf_center_and_table_values() {
        assert_eq!(norm_cdf(0.0), 0.5);

        // Table values
        assert!((norm_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-12);
        assert!((norm_cdf(-1.0) - 0.158_655_253_931_457).abs() < 1e-12);
        assert!((norm_cdf(1.96) - 0.975_002_104_851_780).abs() < 1e-12);
        assert!((norm_cdf(-3.0) - 0.001_349_898_031_630).abs() < 1e-12);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let mut x = -12.0;
        while x <= 12.0 {
            let sum = norm_cdf(x) + norm_cdf(-x);
            assert!((sum - 1.0).abs() < 1e-10, "Φ({x}) + Φ({}) = {sum}", -x);
            x += 0.05;
        }
    }

    #[test]
    fn test_norm_cdf_saturates() {
        assert_eq!(norm_cdf(CDF_SATURATION), 1.0);
        assert_eq!(norm_cdf(-CDF_SATURATION), 0.0);
        assert_eq!(norm_cdf(1e300), 1.0);
        assert_eq!(norm_cdf(-1e300), 0.0);
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_cdf_monotone() {
        let mut prev = norm_cdf(-10.0);
        for i in 1..=2000 {
            let x = -10.0 + i as f64 * 0.01;
            let cur = norm_cdf(x);
            assert!(cur >= prev, "Φ not monotone at x={x}");
            prev = cur;
        }
    }

    #[test]
    fn test_norm_cdf_nan_passthrough() {
        assert!(norm_cdf(f64::NAN).is_nan());
    }
}

//! Standard normal distribution functions.
//!
//! This module is the single place where the normal law is approximated.
//! Every leg family draws its density and cumulative probability from
//! here, so call and put Greeks can never drift apart through duplicated
//! approximations.
//!
//! - `norm_pdf`: density φ(x) = exp(-x²/2) / √(2π)
//! - `norm_cdf`: cumulative Φ(x) = (1 + erf(x/√2)) / 2
//!
//! Both are generic over `T: Float` and total over all finite inputs.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function approximation using Horner's method.
///
/// Abramowitz and Stegun formula 7.1.26, maximum absolute error 1.5e-7
/// over the whole real line. Sufficient for the 1e-5 accuracy the pricing
/// formulas are held to.
///
/// erf(-x) = -erf(x) handles the negative half.
#[inline]
fn erf_approx<T: Float>(x: T) -> T {
    let one = T::one();

    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // t = 1 / (1 + p * |x|)
    let t = one / (one + p * abs_x);

    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));

    // erf(|x|) = 1 - poly * exp(-x²)
    let erf_abs = one - poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        -erf_abs
    } else {
        erf_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) via Φ(x) = (1 + erf(x/√2)) / 2.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x), in the range [0, 1].
///
/// # Accuracy
/// At least 1e-7 absolute for all finite x, including the |x| ≤ 10 range
/// exercised by option pricing.
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * (T::one() + erf_approx(x / sqrt_2))
}

/// Standard normal probability density function.
///
/// Computes φ(x) = exp(-x²/2) / √(2π).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π)
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values from a standard normal table
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(0.577068_f64), 0.7180531, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        // |x| up to 10 must stay inside [0, 1] and saturate correctly
        let cdf_10 = norm_cdf(10.0_f64);
        assert!(cdf_10 > 0.9999999);
        assert!(cdf_10 <= 1.0);

        let cdf_neg_10 = norm_cdf(-10.0_f64);
        assert!(cdf_neg_10 < 1e-7);
        assert!(cdf_neg_10 >= 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.05).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-7);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-7);
        assert_relative_eq!(norm_pdf(0.727068_f64), 0.3062810, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 1.5, 2.0, 3.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cdf_derivative_is_pdf() {
        // Central difference of the CDF should reproduce the density
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 0.727068, 1.0, 2.0] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-4);
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_cdf_bounds(x in -10.0..10.0f64) {
            let cdf = norm_cdf(x);
            prop_assert!((0.0..=1.0).contains(&cdf));
        }

        #[test]
        fn prop_cdf_complement(x in -8.0..8.0f64) {
            // Φ(x) + Φ(-x) = 1
            prop_assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-6);
        }

        #[test]
        fn prop_pdf_non_negative(x in -10.0..10.0f64) {
            prop_assert!(norm_pdf(x) >= 0.0);
        }
    }
}

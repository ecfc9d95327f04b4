// src/stats.rs

//! Normal-distribution helpers used by the Black-Scholes pricer.
//!
//! The cumulative distribution delegates to the standard normal CDF from
//! statrs; the density is the closed form. Both accept an explicit mean and
//! standard deviation, with `std_` variants for the standard normal case the
//! pricer actually uses.

use statrs::distribution::{ContinuousCDF, Normal};

/// Density of the normal distribution with the given mean and standard
/// deviation, evaluated at `y`. The caller guarantees `sigma != 0`.
pub fn normal_pdf(y: f64, mean: f64, sigma: f64) -> f64 {
    let z = (y - mean) / sigma;
    (-0.5 * z * z).exp() / (sigma * (2.0 * std::f64::consts::PI).sqrt())
}

/// Cumulative probability of the normal distribution with the given mean and
/// standard deviation, evaluated at `z`. The caller guarantees `sigma != 0`.
pub fn normal_cdf(z: f64, mean: f64, sigma: f64) -> f64 {
    std_normal_cdf((z - mean) / sigma)
}

/// Standard normal density at `y`.
pub fn std_normal_pdf(y: f64) -> f64 {
    normal_pdf(y, 0.0, 1.0)
}

/// Standard normal cumulative probability at `z`.
pub fn std_normal_cdf(z: f64) -> f64 {
    // Normal::new only fails for a non-positive standard deviation.
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_normal_pdf_known_values() {
        // Peak of the standard normal density is 1/sqrt(2*pi).
        assert!((std_normal_pdf(0.0) - 0.3989422804014327).abs() < 1e-12);
        // Symmetry.
        assert!((std_normal_pdf(1.3) - std_normal_pdf(-1.3)).abs() < 1e-15);
        // Reference value at y = 1.
        assert!((std_normal_pdf(1.0) - 0.24197072451914337).abs() < 1e-12);
    }

    #[test]
    fn test_std_normal_cdf_known_values() {
        assert!((std_normal_cdf(0.0) - 0.5).abs() < 1e-12);
        // Classic z-table values.
        assert!((std_normal_cdf(1.96) - 0.9750021048517795).abs() < 1e-8);
        assert!((std_normal_cdf(-1.96) - 0.0249978951482205).abs() < 1e-8);
        // Tails used by deep in/out-of-the-money pricing.
        assert!(std_normal_cdf(10.0) > 1.0 - 1e-8);
        assert!(std_normal_cdf(-10.0) < 1e-8);
    }

    #[test]
    fn test_general_forms_standardize() {
        // N(z; mean, sigma) == N((z - mean)/sigma; 0, 1)
        let z = 1.7;
        let (mean, sigma) = (0.5, 2.0);
        let expected = std_normal_cdf((z - mean) / sigma);
        assert!((normal_cdf(z, mean, sigma) - expected).abs() < 1e-15);

        let expected_pdf = std_normal_pdf((z - mean) / sigma) / sigma;
        assert!((normal_pdf(z, mean, sigma) - expected_pdf).abs() < 1e-15);
    }
}

//! Error types for the optpricer library.
//!
//! Every fallible operation returns `Result<T, PricerError>` rather than
//! letting a bad input flow into a logarithm or division and surface as
//! NaN/inf downstream.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricerError>;

/// Errors produced by pricing, the implied-volatility solver, and the
/// expiry-date converter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PricerError {
    /// An input violates the pricing domain (non-positive price, strike,
    /// volatility, time-to-expiry, or market price).
    #[error("domain error: {message}")]
    Domain { message: String },

    /// The Newton step's derivative (vega) is exactly zero, so the
    /// volatility update would divide by zero.
    #[error("zero vega at sigma={sigma:.6} (iteration {iteration}): Newton step undefined")]
    ZeroVega { sigma: f64, iteration: usize },

    /// The volatility estimate left the meaningful range during iteration
    /// (hardened solver mode only).
    #[error("solver diverged: sigma={sigma:.6} outside (0, {max_sigma}] at iteration {iteration}")]
    Diverged {
        sigma: f64,
        iteration: usize,
        max_sigma: f64,
    },

    /// An expiry date string or day/month/year triple does not describe a
    /// real calendar date.
    #[error("invalid expiry date: {message}")]
    InvalidDate { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_message_accessible() {
        let err = PricerError::Domain {
            message: "tau=0 must be > 0".into(),
        };
        match &err {
            PricerError::Domain { message } => assert!(message.contains("tau")),
            _ => panic!("wrong variant"),
        }
        assert!(err.to_string().starts_with("domain error:"));
    }

    #[test]
    fn solver_error_fields_accessible() {
        let err = PricerError::Diverged {
            sigma: 13.3,
            iteration: 2,
            max_sigma: 10.0,
        };
        match &err {
            PricerError::Diverged {
                sigma, iteration, ..
            } => {
                assert!(*sigma > 10.0);
                assert_eq!(*iteration, 2);
            }
            _ => panic!("wrong variant"),
        }
    }
}

// src/models/bs/mod.rs

//! Black-Scholes pricing of European options.
//!
//! The model prices a call or put from five market parameters via the two
//! standardized distance terms:
//!
//! d1,2 = [ln(s/x) + (r ± sigma²/2)·tau] / (sigma·sqrt(tau))
//!
//! - call: s·N(d1) − x·e^(−r·tau)·N(d2)
//! - put:  x·e^(−r·tau)·N(−d2) − s·N(−d1)
//!
//! All functions are pure and stateless; d1/d2 are recomputed on every call.
//! Vega (the derivative of price with respect to volatility) is exposed for
//! the implied-volatility solver and shares the same d1 definition as the
//! pricer so the Newton step stays consistent.

use std::fmt;
use std::str::FromStr;

use crate::error::{PricerError, Result};
use crate::stats::{std_normal_cdf, std_normal_pdf};

/// European option flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(PricerError::Domain {
                message: format!("option type must be 'call' or 'put', got '{}'", other),
            }),
        }
    }
}

/// Which standardized distance term to compute: d1 adds the variance drift,
/// d2 subtracts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DTerm {
    D1,
    D2,
}

/// Validates the pricing domain shared by d1/d2, the pricer, and vega.
fn check_domain(s: f64, x: f64, sigma: f64, tau: f64) -> Result<()> {
    if s <= 0.0 || !s.is_finite() {
        return Err(PricerError::Domain {
            message: format!("stock price (s={}) must be > 0 and finite", s),
        });
    }
    if x <= 0.0 || !x.is_finite() {
        return Err(PricerError::Domain {
            message: format!("strike price (x={}) must be > 0 and finite", x),
        });
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(PricerError::Domain {
            message: format!("volatility (sigma={}) must be > 0 and finite", sigma),
        });
    }
    if tau <= 0.0 || !tau.is_finite() {
        return Err(PricerError::Domain {
            message: format!("time to expiry (tau={}) must be > 0 and finite", tau),
        });
    }
    Ok(())
}

/// Standardized distance term of the Black-Scholes formula.
///
/// Rejects inputs outside the pricing domain before the logarithm and
/// division so the result is always finite.
pub fn d_term(s: f64, x: f64, r: f64, sigma: f64, tau: f64, term: DTerm) -> Result<f64> {
    check_domain(s, x, sigma, tau)?;

    let half_var = sigma * sigma / 2.0;
    let drift = match term {
        DTerm::D1 => r + half_var,
        DTerm::D2 => r - half_var,
    };

    Ok(((s / x).ln() + drift * tau) / (sigma * tau.sqrt()))
}

/// Theoretical Black-Scholes price of a European option.
///
/// The result is not clamped: pathological input combinations may price
/// below zero, and callers must not assume non-negativity.
pub fn option_price(
    s: f64,
    x: f64,
    r: f64,
    sigma: f64,
    tau: f64,
    option_type: OptionType,
) -> Result<f64> {
    let mut d1 = d_term(s, x, r, sigma, tau, DTerm::D1)?;
    let mut d2 = d_term(s, x, r, sigma, tau, DTerm::D2)?;

    if option_type == OptionType::Put {
        d1 = -d1;
        d2 = -d2;
    }

    let weighted_stock = s * std_normal_cdf(d1);
    // Strike discounted to present value, weighted by the probability of the
    // option finishing in the money.
    let discounted_strike = x * (-r * tau).exp();
    let weighted_strike = discounted_strike * std_normal_cdf(d2);

    Ok(match option_type {
        OptionType::Call => weighted_stock - weighted_strike,
        OptionType::Put => weighted_strike - weighted_stock,
    })
}

/// Derivative of the option price with respect to volatility:
/// `s · sqrt(tau) · pdf(d1)`.
///
/// Identical for calls and puts. Used as the Newton derivative by the
/// implied-volatility solver.
pub fn vega(s: f64, x: f64, r: f64, sigma: f64, tau: f64) -> Result<f64> {
    let d1 = d_term(s, x, r, sigma, tau, DTerm::D1)?;
    Ok(s * tau.sqrt() * std_normal_pdf(d1))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Textbook reference scenario: s=100, x=100, r=5%, sigma=20%, tau=1y.
    const S: f64 = 100.0;
    const X: f64 = 100.0;
    const R: f64 = 0.05;
    const SIGMA: f64 = 0.2;
    const TAU: f64 = 1.0;

    #[test]
    fn test_d_term_reference_values() {
        let d1 = d_term(S, X, R, SIGMA, TAU, DTerm::D1).unwrap();
        let d2 = d_term(S, X, R, SIGMA, TAU, DTerm::D2).unwrap();
        // ln(1) = 0, so d1 = (0.05 + 0.02)/0.2 and d2 = (0.05 - 0.02)/0.2.
        assert!((d1 - 0.35).abs() < 1e-12);
        assert!((d2 - 0.15).abs() < 1e-12);
        // d2 = d1 - sigma*sqrt(tau) always.
        assert!((d2 - (d1 - SIGMA * TAU.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_call_reference_price() {
        let price = option_price(S, X, R, SIGMA, TAU, OptionType::Call).unwrap();
        assert!(
            (price - 10.4506).abs() < 1e-4,
            "call price {} should match textbook 10.4506",
            price
        );
    }

    #[test]
    fn test_put_reference_price() {
        let price = option_price(S, X, R, SIGMA, TAU, OptionType::Put).unwrap();
        assert!(
            (price - 5.5735).abs() < 1e-4,
            "put price {} should match textbook 5.5735",
            price
        );
    }

    #[test]
    fn test_vega_reference_value() {
        // vega = s * sqrt(tau) * pdf(0.35)
        let v = vega(S, X, R, SIGMA, TAU).unwrap();
        let expected = 100.0 * crate::stats::std_normal_pdf(0.35);
        assert!((v - expected).abs() < 1e-12);
        assert!(v > 0.0);
    }

    #[test]
    fn test_domain_rejection() {
        assert!(option_price(0.0, X, R, SIGMA, TAU, OptionType::Call).is_err()); // s = 0
        assert!(option_price(-1.0, X, R, SIGMA, TAU, OptionType::Call).is_err()); // s < 0
        assert!(option_price(S, 0.0, R, SIGMA, TAU, OptionType::Call).is_err()); // x = 0
        assert!(option_price(S, X, R, 0.0, TAU, OptionType::Call).is_err()); // sigma = 0
        assert!(option_price(S, X, R, SIGMA, 0.0, OptionType::Call).is_err()); // tau = 0
        assert!(option_price(S, X, R, SIGMA, -0.5, OptionType::Put).is_err()); // tau < 0
        assert!(vega(S, X, R, 0.0, TAU).is_err());
        assert!(d_term(S, X, R, SIGMA, 0.0, DTerm::D2).is_err());

        // Errors carry the Domain variant, never a NaN result.
        match option_price(S, X, R, SIGMA, 0.0, OptionType::Call) {
            Err(PricerError::Domain { message }) => assert!(message.contains("tau")),
            other => panic!("expected Domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
        assert_eq!(OptionType::Call.to_string(), "call");
    }
}

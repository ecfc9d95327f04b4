// src/solver/mod.rs

//! Newton-Raphson implied-volatility solver.
//!
//! Drives the Black-Scholes theoretical price toward an observed market price
//! by iterating `sigma += (mp - bs_price) / vega` from an initial estimate of
//! 0.5. The result is tagged: [`ImpliedVol::Converged`] when the price gap
//! drops below the configured precision, [`ImpliedVol::Exhausted`] when the
//! iteration budget runs out, so callers can decide how much to trust the
//! estimate.
//!
//! Two modes are provided. [`SolverMode::Hardened`] (the default) fails fast
//! when an update pushes sigma out of the meaningful range
//! `(0, MAX_SIGMA]`. [`SolverMode::Legacy`] leaves sigma unclamped for
//! compatibility with the historical behavior; a sigma that walks
//! non-positive then surfaces as the pricer's domain error instead of a NaN.

use crate::error::{PricerError, Result};
use crate::models::bs::{option_price, vega, OptionType};

/// Upper bound on a meaningful volatility estimate (1000% annualized).
/// Updates beyond it are treated as divergence in hardened mode.
pub const MAX_SIGMA: f64 = 10.0;

const INITIAL_SIGMA: f64 = 0.5;

/// Whether the solver clamps runaway volatility estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolverMode {
    /// Fail fast when an update leaves `(0, MAX_SIGMA]`.
    Hardened,
    /// No clamp on the sigma walk (historical behavior).
    Legacy,
}

/// Configuration for the implied-volatility solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Accept the estimate once `|mp - bs_price|` drops below this.
    pub precision: f64,
    /// Iteration budget for the Newton loop.
    pub max_iterations: usize,
    /// Runaway-sigma handling.
    pub mode: SolverMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            precision: 1e-4,
            max_iterations: 100,
            mode: SolverMode::Hardened,
        }
    }
}

impl SolverConfig {
    /// Default configuration with the runaway-sigma guard enabled.
    pub fn hardened() -> Self {
        Self::default()
    }

    /// Compatibility configuration replicating the unclamped sigma walk.
    pub fn legacy() -> Self {
        Self {
            mode: SolverMode::Legacy,
            ..Self::default()
        }
    }
}

/// Outcome of an implied-volatility estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImpliedVol {
    /// The price gap dropped below the configured precision.
    Converged { sigma: f64, iterations: usize },
    /// The iteration budget ran out; `sigma` is the last (best-effort)
    /// estimate and should be treated with suspicion.
    Exhausted { sigma: f64 },
}

impl ImpliedVol {
    /// The volatility estimate, whether or not the solver converged.
    pub fn sigma(&self) -> f64 {
        match *self {
            ImpliedVol::Converged { sigma, .. } => sigma,
            ImpliedVol::Exhausted { sigma } => sigma,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, ImpliedVol::Converged { .. })
    }
}

/// Estimate the volatility that reconciles the Black-Scholes price with an
/// observed market price `mp`, by Newton-Raphson successive approximation.
///
/// # Errors
/// - [`PricerError::Domain`] if `s`, `x`, `tau`, or `mp` is non-positive.
/// - [`PricerError::ZeroVega`] if the derivative underflows to exactly zero
///   (extreme d1), in either mode.
/// - [`PricerError::Diverged`] if a hardened-mode update leaves
///   `(0, MAX_SIGMA]`.
pub fn implied_volatility(
    s: f64,
    x: f64,
    r: f64,
    tau: f64,
    mp: f64,
    option_type: OptionType,
    config: &SolverConfig,
) -> Result<ImpliedVol> {
    if mp <= 0.0 || !mp.is_finite() {
        return Err(PricerError::Domain {
            message: format!("market price (mp={}) must be > 0 and finite", mp),
        });
    }

    let mut sigma = INITIAL_SIGMA;

    for iteration in 0..config.max_iterations {
        // s/x/tau domain violations surface from the pricer here.
        let bs_p = option_price(s, x, r, sigma, tau, option_type)?;
        let diff = mp - bs_p;

        if diff.abs() < config.precision {
            return Ok(ImpliedVol::Converged {
                sigma,
                iterations: iteration + 1,
            });
        }

        let v = vega(s, x, r, sigma, tau)?;
        if v == 0.0 {
            return Err(PricerError::ZeroVega { sigma, iteration });
        }

        sigma += diff / v;

        if config.mode == SolverMode::Hardened && (sigma <= 0.0 || sigma > MAX_SIGMA) {
            return Err(PricerError::Diverged {
                sigma,
                iteration,
                max_sigma: MAX_SIGMA,
            });
        }
    }

    Ok(ImpliedVol::Exhausted { sigma })
}

//! # Optpricer: Black-Scholes Valuation and Implied Volatility
//!
//! `optpricer` prices European call and put options under Black-Scholes
//! assumptions and, inversely, estimates the implied volatility that
//! reconciles a theoretical price with an observed market price via
//! Newton-Raphson successive approximation.
//!
//! ## Core Features
//!
//! - **Option Pricing**: European call/put prices from the five scalar market
//!   parameters, with strict domain validation (no silent NaN/inf)
//! - **Vega**: price sensitivity to volatility, shared with the solver
//! - **Implied Volatility**: Newton-Raphson solver with a tagged
//!   converged/exhausted result and a hardened runaway-sigma guard
//! - **Expiry Conversion**: calendar date to year-fraction over a fixed
//!   365-day year, with the reference "now" injected by the caller
//!
//! Every function in the core is pure and stateless: given the same scalar
//! inputs it returns the same scalar output, with no I/O and no shared
//! mutable state, so concurrent callers need no coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use optpricer::{implied_volatility, option_price, OptionType, SolverConfig};
//!
//! // Theoretical price of an at-the-money one-year call.
//! let price = option_price(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call)?;
//! assert!((price - 10.4506).abs() < 1e-4);
//!
//! // Recover the volatility implied by that price.
//! let iv = implied_volatility(
//!     100.0, 100.0, 0.05, 1.0, price, OptionType::Call,
//!     &SolverConfig::default(),
//! )?;
//! assert!((iv.sigma() - 0.2).abs() < 1e-3);
//! # Ok::<(), optpricer::PricerError>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod expiry;
pub mod models;
pub mod solver;
pub mod stats;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricerError, Result};
pub use expiry::{year_fraction, year_fraction_from_str, SECONDS_IN_YEAR};
pub use models::bs::{d_term, option_price, vega, DTerm, OptionType};
pub use solver::{implied_volatility, ImpliedVol, SolverConfig, SolverMode, MAX_SIGMA};

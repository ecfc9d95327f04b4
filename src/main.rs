//! Optpricer CLI - ad-hoc Black-Scholes valuation from the command line.
//!
//! Two modes:
//!
//! - `optpricer -s 100 -x 100 -r 0.05 -v 0.2 -t 1` prints the theoretical
//!   option price.
//! - `optpricer -m implied-volatility -s 100 -x 100 -r 0.05 --market-price
//!   10.45 -t 1` prints the implied volatility.
//!
//! Time to expiry is given either directly in years (`--tau`) or as an expiry
//! date in `dd/mm/yyyy` format (`--expiry-date`), in which case the option is
//! treated as expiring at 23:59:59 on that date.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};

use optpricer::{
    implied_volatility, option_price, year_fraction_from_str, ImpliedVol, OptionType,
    SolverConfig, SolverMode,
};

/// Black-Scholes option pricing and implied-volatility estimation.
#[derive(Parser)]
#[command(name = "optpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stock price
    #[arg(short = 's', long)]
    stock: f64,

    /// Strike price
    #[arg(short = 'x', long)]
    strike: f64,

    /// Risk-free interest rate (e.g. 0.05 for 5%)
    #[arg(short = 'r', long)]
    rate: f64,

    /// Volatility (standard deviation of log returns); required in
    /// option-price mode
    #[arg(short = 'v', long)]
    sigma: Option<f64>,

    /// Observed market price of the option; required in implied-volatility
    /// mode
    #[arg(long)]
    market_price: Option<f64>,

    /// Time to expiry in years
    #[arg(short = 't', long)]
    tau: Option<f64>,

    /// Expiry date in dd/mm/yyyy format (alternative to --tau)
    #[arg(long, value_name = "DD/MM/YYYY")]
    expiry_date: Option<String>,

    /// Option type
    #[arg(long, value_enum, default_value_t = OptionTypeArg::Call)]
    option_type: OptionTypeArg,

    /// Computation to run
    #[arg(short = 'm', long, value_enum, default_value_t = Mode::OptionPrice)]
    mode: Mode,

    /// Price-gap threshold below which to accept a volatility estimate
    #[arg(short = 'p', long, default_value_t = 1e-4)]
    precision: f64,

    /// Maximum number of Newton-Raphson iterations
    #[arg(short = 'i', long, default_value_t = 100)]
    iterations: usize,

    /// Replicate the historical solver: no runaway-sigma guard
    #[arg(long)]
    legacy_solver: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    OptionPrice,
    ImpliedVolatility,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OptionTypeArg {
    Call,
    Put,
}

impl From<OptionTypeArg> for OptionType {
    fn from(arg: OptionTypeArg) -> Self {
        match arg {
            OptionTypeArg::Call => OptionType::Call,
            OptionTypeArg::Put => OptionType::Put,
        }
    }
}

/// Resolve time-to-expiry from --tau or --expiry-date.
fn resolve_tau(cli: &Cli) -> Result<f64> {
    match (cli.tau, cli.expiry_date.as_deref()) {
        (Some(tau), _) => Ok(tau),
        (None, Some(date)) => year_fraction_from_str(date, Utc::now())
            .with_context(|| format!("cannot convert expiry date '{}'", date)),
        (None, None) => bail!("either --tau or --expiry-date is required"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tau = resolve_tau(&cli)?;
    let option_type = OptionType::from(cli.option_type);

    match cli.mode {
        Mode::OptionPrice => {
            let sigma = match cli.sigma {
                Some(sigma) => sigma,
                None => bail!("--sigma is required in option-price mode"),
            };
            let price = option_price(cli.stock, cli.strike, cli.rate, sigma, tau, option_type)?;
            println!("Option Price: {}", price);
        }
        Mode::ImpliedVolatility => {
            let mp = match cli.market_price {
                Some(mp) => mp,
                None => bail!("--market-price is required in implied-volatility mode"),
            };
            let config = SolverConfig {
                precision: cli.precision,
                max_iterations: cli.iterations,
                mode: if cli.legacy_solver {
                    SolverMode::Legacy
                } else {
                    SolverMode::Hardened
                },
            };
            let result =
                implied_volatility(cli.stock, cli.strike, cli.rate, tau, mp, option_type, &config)?;
            match result {
                ImpliedVol::Converged { sigma, iterations } => {
                    println!("Implied Volatility: {} (converged in {} iterations)", sigma, iterations);
                }
                ImpliedVol::Exhausted { sigma } => {
                    println!(
                        "Implied Volatility: {} (budget of {} iterations exhausted; best effort)",
                        sigma, cli.iterations
                    );
                }
            }
        }
    }

    Ok(())
}

// src/expiry.rs

//! Calendar-date to year-fraction conversion for time-to-expiry.
//!
//! An option expiring on a given day is treated as expiring at 23:59:59 on
//! that date, and the gap to the reference instant is expressed as a fraction
//! of a fixed 365-day year. The reference instant is always passed in by the
//! caller so the conversion stays deterministic and testable; only the CLI
//! binary reads the wall clock.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{PricerError, Result};

/// Seconds in a fixed 365-day year.
pub const SECONDS_IN_YEAR: f64 = 31_536_000.0;

/// Year-fraction from `now` to end-of-day (23:59:59 UTC) on the given date.
///
/// The result is negative for dates in the past; callers feeding it to the
/// pricer will get a domain error there rather than a silent NaN.
pub fn year_fraction(day: u32, month: u32, year: i32, now: DateTime<Utc>) -> Result<f64> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| PricerError::InvalidDate {
        message: format!("{:02}/{:02}/{} is not a calendar date", day, month, year),
    })?;
    // 23:59:59 is valid on every calendar date.
    let expiry = Utc.from_utc_datetime(&date.and_hms_opt(23, 59, 59).unwrap());

    // Millisecond resolution keeps the sub-second part of `now` rather than
    // truncating to whole seconds.
    Ok((expiry - now).num_milliseconds() as f64 / 1_000.0 / SECONDS_IN_YEAR)
}

/// Year-fraction from `now` to an expiry date written as `dd/mm/yyyy`.
pub fn year_fraction_from_str(expiry_date: &str, now: DateTime<Utc>) -> Result<f64> {
    let parts: Vec<&str> = expiry_date.split('/').collect();
    if parts.len() != 3 {
        return Err(PricerError::InvalidDate {
            message: format!("expected dd/mm/yyyy, got '{}'", expiry_date),
        });
    }

    // Parsed at the target widths so out-of-range components fail here
    // instead of wrapping into a different date.
    let day: u32 = parse_component(parts[0], expiry_date)?;
    let month: u32 = parse_component(parts[1], expiry_date)?;
    let year: i32 = parse_component(parts[2], expiry_date)?;

    year_fraction(day, month, year, now)
}

fn parse_component<T: std::str::FromStr>(part: &str, expiry_date: &str) -> Result<T> {
    part.trim().parse().map_err(|_| PricerError::InvalidDate {
        message: format!("invalid component '{}' in '{}'", part, expiry_date),
    })
}

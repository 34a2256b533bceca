//! Calendar and formatting helpers
//!
//! Periods are commonly one Monday-to-Sunday week. Amount and rate rounding
//! happens only at these display boundaries; accumulation elsewhere uses
//! plain addition so rounding error never compounds across entries.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Sunday of the week containing `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

/// Whether `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Round a monetary amount to cents for display.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an hourly rate for labels: integral rates without decimals,
/// fractional rates with trailing zeros trimmed ("60", "62.5").
pub fn format_rate(rate: f64) -> String {
    if (rate - rate.trunc()).abs() < f64::EPSILON {
        format!("{}", rate.trunc() as i64)
    } else {
        let s = format!("{rate:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

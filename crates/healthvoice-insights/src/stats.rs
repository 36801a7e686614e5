//! Rounding and guarded division shared by every view.
//!
//! Values round to one decimal place, half away from zero.

use chrono::{DateTime, NaiveDate, Utc};

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `count / total * 100`, rounded; 0.0 when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(count as f64 / total as f64 * 100.0)
}

/// Rounded mean, `None` for an empty slice.
pub fn average(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Some(round1(sum as f64 / values.len() as f64))
}

/// Rounded `count / days`; 0.0 for a zero-day window.
pub fn per_day(count: usize, days: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    round1(count as f64 / f64::from(days))
}

/// Calendar date of a timestamp, always in UTC.
pub fn utc_date(ts: &DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

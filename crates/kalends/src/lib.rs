//! # kalends
//!
//! Calendar-date adjusters on the proleptic Gregorian calendar: an
//! immutable [`Date`] value type, named adjustment functions, and a
//! day-of-week-dependent shipping-date rule.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ──────────────────────────────────────────────────────────────

/// Named date adjusters (first/last day of month, next weekday, …).
pub mod adjusters;

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// Shipping-date rule for order dispatch.
pub mod shipping;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ───────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use month::Month;
pub use shipping::shipping_date;
pub use weekday::Weekday;

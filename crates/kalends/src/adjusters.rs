//! Named date adjusters.
//!
//! Each adjuster is a pure function from one date to another. They compose
//! with [`Date::with`], which applies an adjustment strategy passed as a
//! function value:
//!
//! ```
//! use kalends::{adjusters, Date, Weekday};
//!
//! let d = Date::from_ymd(1997, 8, 29)?;
//! assert_eq!(d.with(adjusters::first_day_of_month).day_of_month(), 1);
//!
//! let wednesday = d.with(|d| adjusters::next_weekday(d, Weekday::Wednesday));
//! assert_eq!(wednesday.weekday(), Weekday::Wednesday);
//! # Ok::<(), kalends_core::Error>(())
//! ```
//!
//! Adjusters are total over valid dates. They move a date forward by at
//! most one year, so applying one within a year of [`Date::MAX`] panics the
//! same way the `+`/`-` operators do.

use crate::date::{days_in_month, Date};
use crate::month::Month;
use crate::weekday::Weekday;

/// First calendar day of the month containing `d`.
pub fn first_day_of_month(d: Date) -> Date {
    Date::from_ymd_unchecked(d.year(), d.month(), 1)
}

/// Last calendar day of the month containing `d` (28/29/30/31 depending on
/// month and leap-year status).
pub fn last_day_of_month(d: Date) -> Date {
    let (year, month) = (d.year(), d.month());
    Date::from_ymd_unchecked(year, month, days_in_month(year, month))
}

/// First calendar day of the month following `d`'s month; the year rolls
/// forward from December.
pub fn first_day_of_next_month(d: Date) -> Date {
    let (year, month) = match d.month() {
        Month::December => (d.year() + 1, Month::January),
        m => (d.year(), m.next()),
    };
    Date::from_ymd_unchecked(year, month, 1)
}

/// January 1 of `d`'s year.
pub fn first_day_of_year(d: Date) -> Date {
    Date::from_ymd_unchecked(d.year(), Month::January, 1)
}

/// January 1 of the year following `d`'s year.
pub fn first_day_of_next_year(d: Date) -> Date {
    Date::from_ymd_unchecked(d.year() + 1, Month::January, 1)
}

/// Smallest date strictly after `d` whose weekday is `target`.
///
/// Never returns `d` itself: when `d` already falls on `target`, the
/// result is one week later.
pub fn next_weekday(d: Date, target: Weekday) -> Date {
    match d.weekday().days_until(target) {
        0 => d + 7,
        skip => d + i32::from(skip),
    }
}

/// `d` itself when it falls on `target`, otherwise [`next_weekday`].
pub fn next_or_same_weekday(d: Date, target: Weekday) -> Date {
    d + i32::from(d.weekday().days_until(target))
}

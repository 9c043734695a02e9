//! Shipping-date rule for order dispatch.
//!
//! Orders placed Monday through Wednesday ship two calendar days later.
//! Orders placed on Thursday ship the following Monday; orders placed
//! Friday through Sunday ship the following Tuesday.
//!
//! The two-day branch is a literal calendar offset, not a business-day
//! skip: starting from Monday, Tuesday, or Wednesday it cannot land on a
//! weekend. The no-weekend guarantee holds for the rule as a whole and is
//! asserted by the test suite rather than re-checked per branch.

use crate::adjusters::next_weekday;
use crate::date::Date;
use crate::weekday::Weekday;

/// The date an order placed on `order` ships.
///
/// The result is strictly after `order` and never falls on a Saturday or
/// Sunday.
pub fn shipping_date(order: Date) -> Date {
    match order.weekday() {
        Weekday::Monday | Weekday::Tuesday | Weekday::Wednesday => order + 2,
        Weekday::Thursday => next_weekday(order, Weekday::Monday),
        Weekday::Friday | Weekday::Saturday | Weekday::Sunday => {
            next_weekday(order, Weekday::Tuesday)
        }
    }
}

//! Date arithmetic shared by the day count conventions.
//!
//! All functions here are pure and total: any two valid dates produce a
//! count, and reversing the dates produces a negative one.

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Returns the exact number of calendar days from `start` to `end`.
///
/// Dates have no time-of-day, so the difference is a whole number of days
/// across month, year and leap-year boundaries. Negative if `end` precedes
/// `start`.
#[inline]
#[must_use]
pub fn actual_days(start: Date, end: Date) -> i64 {
    start.days_between(&end)
}

/// Checks if a date is the last day of February (28th, or 29th in leap years).
#[inline]
#[must_use]
pub fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// 30/360 day count from already adjusted day-of-month values.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
///
/// `day1` and `day2` are the days of month of `start` and `end` after the
/// end-of-month rule of the convention has been applied (see
/// [`Thirty360Rule::adjust`]).
#[must_use]
pub fn days_30_360(start: Date, end: Date, day1: u32, day2: u32) -> i64 {
    let y1 = i64::from(start.year());
    let y2 = i64::from(end.year());
    let m1 = i64::from(start.month());
    let m2 = i64::from(end.month());

    360 * (y2 - y1) + 30 * (m2 - m1) + (i64::from(day2) - i64::from(day1))
}

/// End-of-month adjustment rules of the 30/360 family.
///
/// The rules differ only in how the day of month of each date is adjusted
/// before [`days_30_360`] is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Thirty360Rule {
    /// 30E/360: each date independently moves to day 30 if it is the 31st
    /// or the last day of February.
    ///
    /// ISDA exempts the termination date from the February adjustment.
    /// Whether `end` is a termination date is not known here, so the
    /// last day of February is always moved to 30.
    ThirtyE360,

    /// Eurobond basis: each date independently moves from 31 to 30.
    /// February is not special.
    Eurobond,

    /// Bond basis: D1 moves from 31 to 30; D2 moves from 31 to 30 only if
    /// the adjusted D1 is 30 or more.
    BondBasis,
}

impl Thirty360Rule {
    /// Returns the adjusted `(day1, day2)` for the two dates.
    #[must_use]
    pub fn adjust(&self, start: Date, end: Date) -> (u32, u32) {
        let mut d1 = start.day();
        let mut d2 = end.day();

        match self {
            Thirty360Rule::ThirtyE360 => {
                if d1 == 31 || is_last_day_of_february(start) {
                    d1 = 30;
                }
                if d2 == 31 || is_last_day_of_february(end) {
                    d2 = 30;
                }
            }
            Thirty360Rule::Eurobond => {
                if d1 == 31 {
                    d1 = 30;
                }
                if d2 == 31 {
                    d2 = 30;
                }
            }
            Thirty360Rule::BondBasis => {
                if d1 == 31 {
                    d1 = 30;
                }
                if d2 == 31 && d1 >= 30 {
                    d2 = 30;
                }
            }
        }

        (d1, d2)
    }

    /// 30/360 day count between two dates under this rule.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        let (d1, d2) = self.adjust(start, end);
        days_30_360(start, end, d1, d2)
    }
}

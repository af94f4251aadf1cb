//! Actual/360 day count convention.
//!
//! Used primarily for money market instruments.

use super::arithmetic::actual_days;
use super::{DayCount, THIRTY_360_BASIS};
use crate::types::{Date, Frequency};

/// Actual/360 day count convention (registry name `ACT360`).
///
/// The day count is the actual number of days between dates.
/// The year basis is always 360 days.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT360"
    }

    fn numerator(&self, start: Date, end: Date) -> f64 {
        actual_days(start, end) as f64
    }

    fn denominator(
        &self,
        _start: Date,
        _end: Date,
        _period_end: Date,
        _frequency: Frequency,
    ) -> f64 {
        THIRTY_360_BASIS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_act360_basic() {
        let dc = Act360;
        let start = Date::from_ymd(2007, 1, 1).unwrap();
        let end = Date::from_ymd(2007, 4, 1).unwrap();

        // Jan has 31, Feb has 28, Mar has 31 = 90 days
        assert_eq!(dc.numerator(start, end), 90.0);
        assert_abs_diff_eq!(dc.fraction(start, end, end, Frequency::Annual), 0.25);
    }

    #[test]
    fn test_act360_leap_year() {
        let dc = Act360;
        let start = Date::from_ymd(2008, 1, 1).unwrap();
        let end = Date::from_ymd(2009, 1, 1).unwrap();

        assert_eq!(dc.numerator(start, end), 366.0);
        assert_abs_diff_eq!(
            dc.fraction(start, end, end, Frequency::Annual),
            366.0 / 360.0
        );
    }

    #[test]
    fn test_act360_same_day() {
        let dc = Act360;
        let date = Date::from_ymd(2007, 6, 15).unwrap();
        assert_eq!(dc.numerator(date, date), 0.0);
    }

    #[test]
    fn test_act360_negative() {
        let dc = Act360;
        let start = Date::from_ymd(2007, 6, 15).unwrap();
        let end = Date::from_ymd(2007, 6, 1).unwrap();

        // Negative days when end < start
        assert_eq!(dc.numerator(start, end), -14.0);
    }

    #[test]
    fn test_act360_ignores_period_and_frequency() {
        let dc = Act360;
        let start = Date::from_ymd(2007, 1, 1).unwrap();
        let end = Date::from_ymd(2007, 2, 1).unwrap();
        let period_end = Date::from_ymd(2007, 7, 1).unwrap();

        assert_eq!(dc.denominator(start, end, period_end, Frequency::Quarterly), 360.0);
    }
}

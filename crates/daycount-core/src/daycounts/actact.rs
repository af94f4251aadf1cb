//! Actual/Actual day count convention.

use log::warn;

use super::arithmetic::actual_days;
use super::DayCount;
use crate::types::{Date, Frequency};

/// Actual/Actual day count convention (registry name `ACTACT`).
///
/// The numerator is the actual number of days accrued. The denominator is
/// the actual length of the coupon period scaled by the compounding
/// frequency, so a full period accrues `1 / frequency` of a year.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days}(D_1, D_2)}{\text{Frequency} \times \text{Days}(D_1, D_3)}$$
///
/// where $D_3$ is the next coupon date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActAct;

impl DayCount for ActAct {
    fn name(&self) -> &'static str {
        "ACTACT"
    }

    fn numerator(&self, start: Date, end: Date) -> f64 {
        actual_days(start, end) as f64
    }

    fn denominator(&self, start: Date, _end: Date, period_end: Date, frequency: Frequency) -> f64 {
        f64::from(frequency.periods_per_year()) * actual_days(start, period_end) as f64
    }

    fn fraction(&self, start: Date, end: Date, period_end: Date, frequency: Frequency) -> f64 {
        if actual_days(start, period_end) == 0 {
            warn!("ACTACT reference period {start} to {period_end} is empty, fraction is zero");
            return 0.0;
        }

        self.numerator(start, end) / self.denominator(start, end, period_end, frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_actact_denominator() {
        let dc = ActAct;
        let start = date(2007, 1, 15);
        let settle = date(2007, 4, 15);
        let next_coupon = date(2007, 7, 15);

        // 181 days in the period
        assert_eq!(dc.denominator(start, settle, next_coupon, Frequency::Annual), 181.0);
        assert_eq!(dc.denominator(start, settle, next_coupon, Frequency::SemiAnnual), 362.0);
    }

    #[test]
    fn test_actact_semi_annual_fraction() {
        let dc = ActAct;
        let start = date(2007, 1, 15);
        let settle = date(2007, 4, 15);
        let next_coupon = date(2007, 7, 15);

        // 90 accrued days out of a 181 day period, twice a year
        assert_abs_diff_eq!(
            dc.fraction(start, settle, next_coupon, Frequency::SemiAnnual),
            90.0 / 362.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_actact_full_period() {
        let dc = ActAct;
        let start = date(2008, 1, 1);
        let end = date(2009, 1, 1);

        assert_abs_diff_eq!(dc.fraction(start, end, end, Frequency::Annual), 1.0);
        assert_abs_diff_eq!(dc.fraction(start, end, end, Frequency::Quarterly), 0.25);
    }

    #[test]
    fn test_actact_empty_period() {
        let dc = ActAct;
        let start = date(2007, 1, 15);
        let end = date(2007, 2, 15);

        assert_eq!(dc.fraction(start, end, start, Frequency::Annual), 0.0);
    }

    #[test]
    fn test_actact_reversed_numerator() {
        let dc = ActAct;
        assert_eq!(dc.numerator(date(2007, 3, 1), date(2007, 2, 1)), -28.0);
    }
}

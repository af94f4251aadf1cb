//! Property tests for the day count conventions.

use daycount_core::daycounts::{actual_days, is_last_day_of_february, Thirty360Rule};
use daycount_core::prelude::*;
use proptest::prelude::*;

/// Any date within roughly 270 years of 2000-01-01.
fn any_date() -> impl Strategy<Value = Date> {
    (-100_000i64..100_000).prop_map(|offset| Date::from_ymd(2000, 1, 1).unwrap().add_days(offset))
}

/// Dates biased towards month ends, where the 30/360 rules differ.
fn month_end_heavy_date() -> impl Strategy<Value = Date> {
    prop_oneof![
        any_date(),
        (1990i32..2030, 1u32..=12).prop_map(|(y, m)| {
            let first = Date::from_ymd(y, m, 1).unwrap();
            Date::from_ymd(y, m, first.days_in_month()).unwrap()
        }),
    ]
}

fn closed_form(start: Date, end: Date, day1: u32, day2: u32) -> f64 {
    360.0 * f64::from(end.year() - start.year())
        + 30.0 * (f64::from(end.month()) - f64::from(start.month()))
        + (f64::from(day2) - f64::from(day1))
}

proptest! {
    #[test]
    fn zero_span_is_zero(d in any_date()) {
        for convention in Convention::all() {
            prop_assert_eq!(convention.day_count(d, d), 0.0);
            prop_assert_eq!(day_count(d, d, convention.name()).unwrap(), 0.0);
        }
    }

    #[test]
    fn actual_days_antisymmetric(d1 in any_date(), d2 in any_date()) {
        prop_assert_eq!(actual_days(d1, d2), -actual_days(d2, d1));
    }

    #[test]
    fn actual_days_additive(d1 in any_date(), d2 in any_date(), d3 in any_date()) {
        prop_assert_eq!(actual_days(d1, d3), actual_days(d1, d2) + actual_days(d2, d3));
    }

    #[test]
    fn thirty_e_360_matches_closed_form(
        d1 in month_end_heavy_date(),
        d2 in month_end_heavy_date(),
    ) {
        let adjust = |d: Date| {
            if d.day() == 31 || is_last_day_of_february(d) {
                30
            } else {
                d.day()
            }
        };
        let expected = closed_form(d1, d2, adjust(d1), adjust(d2));
        prop_assert_eq!(day_count(d1, d2, "30E360").unwrap(), expected);
    }

    #[test]
    fn eurobond_matches_closed_form(d1 in month_end_heavy_date(), d2 in month_end_heavy_date()) {
        let adjust = |d: Date| if d.day() == 31 { 30 } else { d.day() };
        let expected = closed_form(d1, d2, adjust(d1), adjust(d2));
        prop_assert_eq!(day_count(d1, d2, "EUROBOND").unwrap(), expected);
    }

    #[test]
    fn bond_basis_matches_closed_form(
        d1 in month_end_heavy_date(),
        d2 in month_end_heavy_date(),
    ) {
        let day1 = if d1.day() == 31 { 30 } else { d1.day() };
        let day2 = if d2.day() == 31 && day1 >= 30 { 30 } else { d2.day() };
        let expected = closed_form(d1, d2, day1, day2);
        prop_assert_eq!(day_count(d1, d2, "BONDBASIS").unwrap(), expected);
        prop_assert_eq!(Thirty360Rule::BondBasis.day_count(d1, d2) as f64, expected);
    }

    #[test]
    fn symmetric_rules_are_antisymmetric(
        d1 in month_end_heavy_date(),
        d2 in month_end_heavy_date(),
    ) {
        for name in ["30E360", "EUROBOND", "ACT360", "ACTACT"] {
            let forward = day_count(d1, d2, name).unwrap();
            prop_assert_eq!(forward, -day_count(d2, d1, name).unwrap());
        }
    }

    #[test]
    fn empty_name_is_thirty_e_360(d1 in any_date(), d2 in any_date()) {
        prop_assert_eq!(day_count(d1, d2, "").unwrap(), day_count(d1, d2, "30E360").unwrap());
        prop_assert_eq!(
            day_count_fraction(d1, d2, None, None, "").unwrap(),
            day_count_fraction(d1, d2, None, None, "30E360").unwrap()
        );
    }

    #[test]
    fn fixed_basis_fraction_is_days_over_360(
        d1 in any_date(),
        d2 in any_date(),
        d3 in any_date(),
    ) {
        for name in ["30E360", "EUROBOND", "BONDBASIS", "ACT360"] {
            let days = day_count(d1, d2, name).unwrap();
            let fraction =
                day_count_fraction(d1, d2, Some(d3), Some(Frequency::Quarterly), name).unwrap();
            prop_assert!((fraction - days / 360.0).abs() < 1e-12);
        }
    }

    #[test]
    fn unknown_names_fail(name in "[a-z]{1,12}") {
        let d = Date::from_ymd(2008, 2, 29).unwrap();
        prop_assert!(day_count(d, d, &name).unwrap_err().is_convention_not_found());
        let err = day_count_fraction(d, d, None, None, &name).unwrap_err();
        prop_assert!(err.is_convention_not_found());
    }
}

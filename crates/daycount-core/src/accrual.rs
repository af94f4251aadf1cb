//! Entry points for accrued interest calculators.
//!
//! Both functions resolve a convention by name and fail with
//! `DayCountError::ConventionNotFound` for unknown names. They never fall
//! back to a zero result.
//!
//! ```rust
//! use daycount_core::accrual::{day_count, day_count_fraction};
//! use daycount_core::types::Date;
//!
//! let last_coupon = Date::from_ymd(2007, 1, 15).unwrap();
//! let settlement = Date::from_ymd(2007, 1, 30).unwrap();
//!
//! assert_eq!(day_count(last_coupon, settlement, "30E360").unwrap(), 15.0);
//! let fraction = day_count_fraction(last_coupon, settlement, None, None, "").unwrap();
//! assert!((fraction - 15.0 / 360.0).abs() < 1e-12);
//!
//! assert!(day_count(last_coupon, settlement, "NOTIMPLEMENTED").is_err());
//! ```

use crate::error::DayCountResult;
use crate::registry;
use crate::types::{Date, Frequency};

/// Fraction of a coupon accrued between two dates.
///
/// # Arguments
///
/// * `date1` - Last coupon payment, start of interest accrual
/// * `date2` - Date through which interest accrues (settlement date)
/// * `date3` - Next coupon payment; only used by `ACTACT`
/// * `frequency` - Compounding frequency, defaults to annual; only used by `ACTACT`
/// * `convention` - Registry name, empty for the default convention
///
/// # Errors
///
/// Returns `DayCountError::ConventionNotFound` if the convention is unknown,
/// or `DayCountError::InvalidDate` if `ACTACT` has to imply a next coupon date
/// that is out of range.
pub fn day_count_fraction(
    date1: Date,
    date2: Date,
    date3: Option<Date>,
    frequency: Option<Frequency>,
    convention: &str,
) -> DayCountResult<f64> {
    registry::resolve(convention)?.fraction(date1, date2, date3, frequency.unwrap_or_default())
}

/// Number of days between two dates under a convention.
///
/// This is the numerator of the convention only, without annualisation.
///
/// # Errors
///
/// Returns `DayCountError::ConventionNotFound` if the convention is unknown.
pub fn day_count(date1: Date, date2: Date, convention: &str) -> DayCountResult<f64> {
    Ok(registry::resolve(convention)?.day_count(date1, date2))
}

//! Day count conventions for accrued interest calculations.
//!
//! A day count convention turns a calendar span into a number of "days"
//! (the numerator) and normalises it by a basis (the denominator) to get
//! the fraction of a coupon period or year that has accrued.
//!
//! # Supported Conventions
//!
//! ## 30/360 Family (30-day months, 360-day years)
//!
//! - [`ThirtyE360`]: `30E360` - 31st and end of February move to 30
//! - [`Eurobond`]: `EUROBOND` - 31st moves to 30
//! - [`BondBasis`]: `BONDBASIS` - US bond basis
//!
//! ## ACT Family (Actual numerator)
//!
//! - [`Act360`]: `ACT360` - Actual days over a fixed 360
//! - [`ActAct`]: `ACTACT` - Actual days over the frequency-weighted coupon period
//!
//! # Usage
//!
//! ```rust
//! use daycount_core::daycounts::{Convention, DayCount};
//! use daycount_core::types::Date;
//!
//! let start = Date::from_ymd(2007, 1, 31).unwrap();
//! let end = Date::from_ymd(2007, 2, 28).unwrap();
//!
//! let dc = Convention::ThirtyE360.to_day_count();
//! assert_eq!(dc.numerator(start, end), 30.0);
//! ```

pub mod arithmetic;

mod act360;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use actact::ActAct;
pub use arithmetic::{actual_days, days_30_360, is_last_day_of_february, Thirty360Rule};
pub use thirty360::{BondBasis, Eurobond, ThirtyE360};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{DayCountError, DayCountResult};
use crate::types::{Date, Frequency};

/// Fixed denominator of the 30/360 family and Actual/360.
pub const THIRTY_360_BASIS: f64 = 360.0;

/// Trait for day count conventions.
///
/// # Implementation Notes
///
/// - `numerator` counts the days from accrual start to the evaluation date
/// - `denominator` gives the normalising day count; it receives the next
///   coupon date and the compounding frequency, which only frequency-weighted
///   conventions use
/// - Both must be total: reversed dates give negative counts, never a panic
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the registry name of the convention (e.g. `"30E360"`).
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days, for 30/360
    /// conventions it uses the 30-day month assumption.
    fn numerator(&self, start: Date, end: Date) -> f64;

    /// Calculates the normalising day count.
    ///
    /// # Arguments
    ///
    /// * `start` - Accrual start date (last coupon)
    /// * `end` - Accrual end date (settlement)
    /// * `period_end` - Next coupon date
    /// * `frequency` - Compounding frequency
    fn denominator(&self, start: Date, end: Date, period_end: Date, frequency: Frequency) -> f64;

    /// Calculates the day count fraction, numerator over denominator.
    fn fraction(&self, start: Date, end: Date, period_end: Date, frequency: Frequency) -> f64 {
        self.numerator(start, end) / self.denominator(start, end, period_end, frequency)
    }
}

/// Enumeration of all supported day count conventions.
///
/// The closed set of conventions the registry knows about. Dispatch to the
/// implementation is a single `match` in [`Convention::to_day_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Convention {
    /// 30E/360 with the end of February rule
    #[serde(rename = "30E360")]
    ThirtyE360,

    /// 30/360 Eurobond basis
    #[serde(rename = "EUROBOND")]
    Eurobond,

    /// 30/360 US bond basis
    #[serde(rename = "BONDBASIS")]
    BondBasis,

    /// Actual/360
    #[serde(rename = "ACT360")]
    Act360,

    /// Actual/Actual, period and frequency based
    #[serde(rename = "ACTACT")]
    ActAct,
}

impl Convention {
    /// Returns the static day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            Convention::ThirtyE360 => &ThirtyE360,
            Convention::Eurobond => &Eurobond,
            Convention::BondBasis => &BondBasis,
            Convention::Act360 => &Act360,
            Convention::ActAct => &ActAct,
        }
    }

    /// Returns the registry name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [Convention] {
        &[
            Convention::ThirtyE360,
            Convention::Eurobond,
            Convention::BondBasis,
            Convention::Act360,
            Convention::ActAct,
        ]
    }

    /// Returns true if the denominator depends on the next coupon date and
    /// the compounding frequency.
    #[must_use]
    pub fn uses_coupon_period(&self) -> bool {
        matches!(self, Convention::ActAct)
    }

    /// Number of days between two dates under this convention.
    #[must_use]
    pub fn day_count(&self, date1: Date, date2: Date) -> f64 {
        let days = self.to_day_count().numerator(date1, date2);
        trace!("{} day count {date1} -> {date2} = {days}", self.name());
        days
    }

    /// Day count fraction accrued between `date1` and `date2`.
    ///
    /// `date3` (next coupon date) and `frequency` are only used by
    /// conventions where [`uses_coupon_period`](Self::uses_coupon_period)
    /// holds. If `date3` is absent there, the coupon period is taken to be
    /// one period of `frequency` starting at `date1`.
    ///
    /// # Errors
    ///
    /// Returns `DayCountError::InvalidDate` if the implied coupon date is
    /// out of range.
    pub fn fraction(
        &self,
        date1: Date,
        date2: Date,
        date3: Option<Date>,
        frequency: Frequency,
    ) -> DayCountResult<f64> {
        let period_end = match date3 {
            Some(date3) => date3,
            None if self.uses_coupon_period() => {
                date1.add_months(frequency.months_per_period() as i32)?
            }
            None => date2,
        };

        let fraction = self
            .to_day_count()
            .fraction(date1, date2, period_end, frequency);
        trace!(
            "{} fraction {date1} -> {date2} (period end {period_end}) = {fraction}",
            self.name()
        );
        Ok(fraction)
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Convention {
    type Err = DayCountError;

    /// Parses a registry name. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Convention::all()
            .iter()
            .copied()
            .find(|convention| convention.name() == s)
            .ok_or_else(|| DayCountError::convention_not_found(s))
    }
}

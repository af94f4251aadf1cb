//! Compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of coupon or interest periods per year.
///
/// Only the Actual/Actual denominator depends on it. The default is
/// annual, i.e. one period per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    #[default]
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Looks up the frequency with the given number of periods per year.
    ///
    /// Returns `None` for counts that do not divide the year into whole months.
    #[must_use]
    pub fn from_periods_per_year(periods: u32) -> Option<Self> {
        match periods {
            1 => Some(Frequency::Annual),
            2 => Some(Frequency::SemiAnnual),
            4 => Some(Frequency::Quarterly),
            12 => Some(Frequency::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

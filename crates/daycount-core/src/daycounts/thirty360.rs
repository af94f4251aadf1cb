//! 30/360 day count conventions.
//!
//! All three share one formula and a fixed 360-day denominator. They differ
//! only in their end-of-month rule, see [`Thirty360Rule`].

use super::arithmetic::Thirty360Rule;
use super::{DayCount, THIRTY_360_BASIS};
use crate::types::{Date, Frequency};

// =============================================================================
// 30E/360
// =============================================================================

/// 30E/360 day count convention (registry name `30E360`).
///
/// # Rules
///
/// 1. If D1 is 31 or the last day of February, change D1 to 30
/// 2. If D2 is 31 or the last day of February, change D2 to 30
///
/// Rule 2 is applied even when D2 is the termination date of the
/// instrument, which ISDA exempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThirtyE360;

impl DayCount for ThirtyE360 {
    fn name(&self) -> &'static str {
        "30E360"
    }

    fn numerator(&self, start: Date, end: Date) -> f64 {
        Thirty360Rule::ThirtyE360.day_count(start, end) as f64
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

// =============================================================================
// Eurobond
// =============================================================================

/// Eurobond basis day count convention (registry name `EUROBOND`).
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, change D2 to 30
///
/// No special February handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Eurobond;

impl DayCount for Eurobond {
    fn name(&self) -> &'static str {
        "EUROBOND"
    }

    fn numerator(&self, start: Date, end: Date) -> f64 {
        Thirty360Rule::Eurobond.day_count(start, end) as f64
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

// =============================================================================
// Bond Basis
// =============================================================================

/// US bond basis day count convention (registry name `BONDBASIS`).
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31 AND D1 is now >= 30, change D2 to 30
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondBasis;

impl DayCount for BondBasis {
    fn name(&self) -> &'static str {
        "BONDBASIS"
    }

    fn numerator(&self, start: Date, end: Date) -> f64 {
        Thirty360Rule::BondBasis.day_count(start, end) as f64
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

//! Domain types for day count calculations.
//!
//! - [`Date`]: Calendar date with no time-of-day component
//! - [`Frequency`]: Compounding frequency (periods per year)

mod date;
mod frequency;

pub use date::Date;
pub use frequency::Frequency;

//! # Daycount Core
//!
//! Day count fractions and day counts between calendar dates under the
//! named conventions used for bond and interest accrual calculations.
//!
//! - **Conventions**: `30E360`, `EUROBOND`, `BONDBASIS`, `ACT360`, `ACTACT`
//! - **Registry**: Resolves case-sensitive names, empty names use the default
//! - **Entry points**: [`day_count_fraction`] and [`day_count`]
//!
//! Calendars, business day adjustment and schedule generation are left to
//! callers; they pass in already determined period dates.
//!
//! ## Example
//!
//! ```rust
//! use daycount_core::prelude::*;
//!
//! let start = Date::from_ymd(2007, 1, 31).unwrap();
//! let end = Date::from_ymd(2007, 2, 28).unwrap();
//!
//! assert_eq!(day_count(start, end, "BONDBASIS").unwrap(), 28.0);
//! assert_eq!(day_count(start, end, "30E360").unwrap(), 30.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod accrual;
pub mod config;
pub mod daycounts;
pub mod error;
pub mod registry;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrual::{day_count, day_count_fraction};
    pub use crate::daycounts::{Convention, DayCount};
    pub use crate::error::{DayCountError, DayCountResult};
    pub use crate::registry::{list_conventions, resolve};
    pub use crate::types::{Date, Frequency};
}

// Re-export commonly used types at crate root
pub use accrual::{day_count, day_count_fraction};
pub use daycounts::Convention;
pub use error::{DayCountError, DayCountResult};
pub use types::{Date, Frequency};

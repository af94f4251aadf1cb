//! Convention registry.
//!
//! Read-only map from convention name to [`Convention`], built once on
//! first use and shared by every caller without locking. New conventions
//! are added by extending [`Convention`]; call sites resolve them by name.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::config;
use crate::daycounts::Convention;
use crate::error::{DayCountError, DayCountResult};

static REGISTRY: Lazy<HashMap<&'static str, Convention>> = Lazy::new(|| {
    Convention::all()
        .iter()
        .map(|convention| (convention.name(), *convention))
        .collect()
});

/// Name used when a caller passes an empty convention name.
#[must_use]
pub fn default_convention() -> &'static str {
    &config::current().default_convention
}

/// Looks up a convention by its case-sensitive name.
///
/// An empty name is replaced by [`default_convention`].
///
/// # Errors
///
/// Returns `DayCountError::ConventionNotFound` if no convention is
/// registered under the (defaulted) name.
pub fn resolve(name: &str) -> DayCountResult<Convention> {
    let name = if name.is_empty() {
        let default = default_convention();
        debug!("empty day count convention, using default '{default}'");
        default
    } else {
        name
    };

    REGISTRY.get(name).copied().ok_or_else(|| {
        debug!("day count convention '{name}' is not registered");
        DayCountError::convention_not_found(name)
    })
}

/// Returns the names of all registered conventions, sorted.
#[must_use]
pub fn list_conventions() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Returns true if a convention is registered under `name`.
#[must_use]
pub fn is_registered(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

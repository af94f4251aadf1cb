//! Process-wide configuration.
//!
//! The only setting is the convention used when a caller passes an empty
//! convention name. It can be overridden at build time through the
//! `DAYCOUNT_DEFAULT_CONVENTION` environment variable, or once at start-up
//! with [`init`]. After the first read it never changes.
//!
//! ```rust
//! use daycount_core::config::DayCountConfig;
//!
//! let config = DayCountConfig::from_json(r#"{ "default_convention": "BONDBASIS" }"#).unwrap();
//! assert_eq!(config.default_convention, "BONDBASIS");
//! ```

use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::daycounts::Convention;
use crate::error::{DayCountError, DayCountResult};

/// Environment variable naming the default convention.
pub const DEFAULT_CONVENTION_ENV: &str = "DAYCOUNT_DEFAULT_CONVENTION";

/// Default convention when nothing overrides it.
pub const BUILTIN_DEFAULT_CONVENTION: &str = "30E360";

static CONFIG: OnceCell<DayCountConfig> = OnceCell::new();

/// Day count configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayCountConfig {
    /// Convention used for empty convention names.
    pub default_convention: String,
}

impl Default for DayCountConfig {
    fn default() -> Self {
        Self {
            default_convention: compiled_default_convention().to_string(),
        }
    }
}

impl DayCountConfig {
    /// Creates a configuration with the compiled-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default convention.
    #[must_use]
    pub fn with_default_convention(mut self, name: impl Into<String>) -> Self {
        self.default_convention = name.into();
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// Falls back to the compiled-in defaults when the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(DEFAULT_CONVENTION_ENV) {
            Ok(name) if !name.is_empty() => Self::default().with_default_convention(name),
            _ => Self::default(),
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `DayCountError::ConfigError` if the JSON is malformed.
    pub fn from_json(json: &str) -> DayCountResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DayCountError::config_error(format!("invalid JSON: {e}")))
    }

    /// Checks that the default convention is registered.
    ///
    /// # Errors
    ///
    /// Returns `DayCountError::ConventionNotFound` for an unknown name.
    pub fn validate(&self) -> DayCountResult<Convention> {
        self.default_convention.parse()
    }
}

/// Default convention baked in at compile time.
#[must_use]
pub fn compiled_default_convention() -> &'static str {
    match option_env!("DAYCOUNT_DEFAULT_CONVENTION") {
        Some(name) if !name.is_empty() => name,
        _ => BUILTIN_DEFAULT_CONVENTION,
    }
}

/// Installs the process-wide configuration.
///
/// Must run before the first day count call; afterwards the configuration
/// is fixed.
///
/// # Errors
///
/// Returns `DayCountError::ConventionNotFound` if the default convention is
/// unknown, or `DayCountError::ConfigError` if a configuration is already in
/// place.
pub fn init(config: DayCountConfig) -> DayCountResult<()> {
    config.validate()?;

    CONFIG.set(config).map_err(|rejected| {
        warn!(
            "day count configuration already set, ignoring default '{}'",
            rejected.default_convention
        );
        DayCountError::config_error("configuration already initialised")
    })?;

    debug!("day count default convention set to '{}'", current().default_convention);
    Ok(())
}

/// Returns the active configuration, installing the defaults on first use.
pub fn current() -> &'static DayCountConfig {
    CONFIG.get_or_init(DayCountConfig::default)
}

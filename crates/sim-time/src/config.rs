// crates/sim-time/src/config.rs
// ============================================================================
// Module: Sim Time Configuration
// Description: TOML loading for the degenerate-arithmetic policy.
// Purpose: Let hosts fix sentinel resolution once, outside the code path.
// Dependencies: serde, toml, crate::{arithmetic, error}
// ============================================================================

//! ## Overview
//! Configuration is a small TOML document with an optional `[arithmetic]`
//! table. Missing keys fall back to [`ArithmeticPolicy::STRICT`]; unknown
//! keys are rejected. Loading enforces size, encoding, and path limits.
//!
//! ```toml
//! [arithmetic]
//! zero_division = "unassigned"
//! infinite_times_zero = "zero"
//! overflow = "error"
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::arithmetic::ArithmeticPolicy;
use crate::error::ConfigError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Root configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimTimeConfig {
    /// Degenerate-arithmetic resolution.
    #[serde(default)]
    pub arithmetic: ArithmeticPolicy,
}

impl SimTimeConfig {
    /// Loads configuration from the file at `path`.
    ///
    /// The caller always names the file; nothing is read from the
    /// environment or the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or parsing fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, or
    /// unknown policy names.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Renders configuration as TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}

/// Loads only the arithmetic policy from a config file.
///
/// # Errors
///
/// Returns [`ConfigError`] when loading or parsing fails.
pub fn load_policy(path: &Path) -> Result<ArithmeticPolicy, ConfigError> {
    SimTimeConfig::load(path).map(|config| config.arithmetic)
}

/// Parses only the arithmetic policy from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when the text is not a valid config.
pub fn parse_policy(content: &str) -> Result<ArithmeticPolicy, ConfigError> {
    SimTimeConfig::from_toml_str(content).map(|config| config.arithmetic)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates the caller's path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

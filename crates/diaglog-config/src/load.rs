// crates/diaglog-config/src/load.rs
// ============================================================================
// Module: Config Loading
// Description: Bounded reading of translator config files.
// Purpose: Reject oversized, non-UTF-8, or unreasonable config inputs.
// Dependencies: std, crate::config
// ============================================================================

//! ## Overview
//! Config files are read with hard limits on path length and file size before
//! any parsing happens. Without an explicit path, the path in
//! [`CONFIG_ENV_VAR`] is used; with neither, defaults apply.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::config::TranslatorConfig;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "DIAGLOG_CONFIG";
/// Maximum config file size in bytes.
pub const MAX_CONFIG_FILE_BYTES: usize = 1024 * 1024;
/// Maximum config path length in bytes.
pub const MAX_CONFIG_PATH_BYTES: usize = 4096;
/// Maximum length of one config path component in bytes.
pub const MAX_CONFIG_PATH_COMPONENT_BYTES: usize = 255;

// ============================================================================
// SECTION: Loading
// ============================================================================

impl TranslatorConfig {
    /// Loads configuration from `path`, the [`CONFIG_ENV_VAR`] path, or defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file violates a limit, cannot be read,
    /// or does not parse and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
                Some(value) => PathBuf::from(value),
                None => return Ok(Self::default()),
            },
        };
        let content = read_bounded(&path)?;
        Self::from_toml_str(&content)
    }
}

/// Reads a UTF-8 file after enforcing path and size limits.
fn read_bounded(path: &Path) -> Result<String, ConfigError> {
    validate_path(path)?;
    let file = File::open(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    let mut bytes = Vec::new();
    let limit = u64::try_from(MAX_CONFIG_FILE_BYTES + 1).unwrap_or(u64::MAX);
    file.take(limit).read_to_end(&mut bytes).map_err(|err| ConfigError::Io(err.to_string()))?;
    if bytes.len() > MAX_CONFIG_FILE_BYTES {
        return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
    }
    String::from_utf8(bytes)
        .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))
}

/// Enforces total and per-component path length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_CONFIG_PATH_BYTES {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    if path
        .components()
        .any(|component| component.as_os_str().len() > MAX_CONFIG_PATH_COMPONENT_BYTES)
    {
        return Err(ConfigError::Invalid("config path component too long".to_string()));
    }
    Ok(())
}

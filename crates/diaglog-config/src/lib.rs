// crates/diaglog-config/src/lib.rs
// ============================================================================
// Module: Diagnostic Log Translator Config
// Description: Configuration model, loading, and validation for the translator.
// Purpose: Build translators from a single TOML document.
// Dependencies: diaglog-translator, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Translator settings live in one TOML document: the locale to start in, the
//! replacement for the `C` baseline locale, the base module name, and optional
//! per-language message tables. Loading is bounded and fails closed; a config
//! that loads has also passed [`TranslatorConfig::validate`].

// ============================================================================
// SECTION: Modules
// ============================================================================

mod config;
mod load;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::TranslatorConfig;
pub use load::CONFIG_ENV_VAR;
pub use load::MAX_CONFIG_FILE_BYTES;
pub use load::MAX_CONFIG_PATH_BYTES;
pub use load::MAX_CONFIG_PATH_COMPONENT_BYTES;

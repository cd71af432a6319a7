// crates/diaglog-config/src/config.rs
// ============================================================================
// Module: Translator Config Model
// Description: Typed configuration and validation rules.
// Purpose: Turn validated settings into a configured translator.
// Dependencies: diaglog-translator, serde, thiserror, toml
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use diaglog_translator::DEFAULT_BASE_MODULE;
use diaglog_translator::DEFAULT_FALLBACK_LOCALE;
use diaglog_translator::LocaleEnvironment;
use diaglog_translator::ModuleRegistry;
use diaglog_translator::TranslationTable;
use diaglog_translator::Translator;
use diaglog_translator::TranslatorBuilder;
use diaglog_translator::interpolate::placeholders;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading or validating configuration.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// The config document is not valid TOML for this model.
    #[error("config parse error: {0}")]
    Parse(String),
    /// The config violates a validation rule.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Model
// ============================================================================

/// Translator configuration.
///
/// # Invariants
/// - Unknown fields are rejected.
/// - `translations` maps a language tag (`sv`, `sv_SE`) to message id / text pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Explicit locale; resolved from the environment when absent.
    #[serde(default)]
    pub locale: Option<String>,
    /// Replacement for the `C` baseline locale.
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
    /// Module loaded right after `SYSTEM`.
    #[serde(default = "default_base_module")]
    pub base_module: String,
    /// Message tables per language tag.
    #[serde(default)]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

/// Serde default for `fallback_locale`.
fn default_fallback_locale() -> String {
    DEFAULT_FALLBACK_LOCALE.to_string()
}

/// Serde default for `base_module`.
fn default_base_module() -> String {
    DEFAULT_BASE_MODULE.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            locale: None,
            fallback_locale: default_fallback_locale(),
            base_module: default_base_module(),
            translations: BTreeMap::new(),
        }
    }
}

impl TranslatorConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document does not parse or validate.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration against its validation rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(locale) = &self.locale {
            validate_token("locale", locale)?;
        }
        validate_token("fallback_locale", &self.fallback_locale)?;
        validate_token("base_module", &self.base_module)?;
        for (language, messages) in &self.translations {
            validate_token("translations language", language)?;
            for (msgid, msgstr) in messages {
                validate_placeholders(language, msgid, msgstr)?;
            }
        }
        Ok(())
    }

    /// Returns the configured message tables.
    #[must_use]
    pub fn translation_table(&self) -> TranslationTable {
        let mut table = TranslationTable::new();
        for (language, messages) in &self.translations {
            table.extend_language(language.clone(), messages.clone());
        }
        table
    }

    /// Returns a translator builder preloaded with this configuration.
    #[must_use]
    pub fn builder(
        &self,
        modules: Arc<dyn ModuleRegistry>,
        environment: Arc<dyn LocaleEnvironment>,
    ) -> TranslatorBuilder {
        let builder = Translator::builder(modules)
            .environment(environment)
            .fallback_locale(self.fallback_locale.clone())
            .base_module(self.base_module.clone())
            .localizer(Arc::new(self.translation_table()));
        match &self.locale {
            Some(locale) => builder.locale(locale.clone()),
            None => builder,
        }
    }

    /// Builds a translator from this configuration.
    #[must_use]
    pub fn build_translator(
        &self,
        modules: Arc<dyn ModuleRegistry>,
        environment: Arc<dyn LocaleEnvironment>,
    ) -> Translator {
        self.builder(modules, environment).build()
    }
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Requires every placeholder of a translation to exist in its message id.
fn validate_placeholders(language: &str, msgid: &str, msgstr: &str) -> Result<(), ConfigError> {
    let known = placeholders(msgid);
    match placeholders(msgstr).into_iter().find(|name| !known.contains(name)) {
        Some(name) => Err(ConfigError::Invalid(format!(
            "translations.{language} entry \"{msgid}\" uses unknown placeholder {{{name}}}"
        ))),
        None => Ok(()),
    }
}

/// Requires a non-empty value without whitespace.
fn validate_token(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!("{field} must not contain whitespace")));
    }
    Ok(())
}

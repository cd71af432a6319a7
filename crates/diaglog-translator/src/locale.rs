// crates/diaglog-translator/src/locale.rs
// ============================================================================
// Module: Locale Coordinator
// Description: Ownership of the active locale and its process-wide side effects.
// Purpose: Keep the ambient message locale in sync with the translator's locale.
// Dependencies: crate::environment
// ============================================================================

//! ## Overview
//! The coordinator stores the active locale identifier and applies it as the
//! message-locale category of its [`LocaleEnvironment`] whenever the locale is
//! set or read. With the process environment this state is global: a second
//! coordinator changing its locale changes what the first one observes too.
//!
//! Locale names are never validated. An unknown name is handed to the
//! environment as-is and simply fails to match any translation table.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::environment::C_LOCALE;
use crate::environment::LocaleEnvironment;
use crate::environment::requested_message_locale;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Locale substituted when the environment resolves to the `C` baseline.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en_US.UTF-8";

// ============================================================================
// SECTION: Coordinator
// ============================================================================

/// Owner of the active locale.
///
/// # Invariants
/// - After construction and after every [`LocaleCoordinator::set_locale`], the
///   environment's message-locale category equals the stored locale.
pub struct LocaleCoordinator {
    /// Active locale identifier.
    locale: String,
    /// Replacement for the `C` baseline when resolving from the environment.
    fallback_locale: String,
    /// Ambient locale state mutated on every set and read.
    environment: Arc<dyn LocaleEnvironment>,
}

impl LocaleCoordinator {
    /// Creates a coordinator with the default fallback locale.
    ///
    /// Without an explicit `locale`, the locale is resolved from the environment.
    #[must_use]
    pub fn new(locale: Option<&str>, environment: Arc<dyn LocaleEnvironment>) -> Self {
        Self::with_fallback(locale, DEFAULT_FALLBACK_LOCALE, environment)
    }

    /// Creates a coordinator with a custom replacement for the `C` baseline.
    #[must_use]
    pub fn with_fallback(
        locale: Option<&str>,
        fallback_locale: impl Into<String>,
        environment: Arc<dyn LocaleEnvironment>,
    ) -> Self {
        let mut coordinator = Self {
            locale: String::new(),
            fallback_locale: fallback_locale.into(),
            environment,
        };
        let locale = match locale {
            Some(locale) => locale.to_string(),
            None => coordinator.resolve_default_locale(),
        };
        coordinator.set_locale(locale);
        coordinator
    }

    /// Resolves the locale requested by the environment.
    ///
    /// The `C` baseline is replaced by the fallback locale because its messages
    /// differ from the fallback's source text. The result is applied as the
    /// environment's message locale.
    pub fn resolve_default_locale(&self) -> String {
        let requested = requested_message_locale(self.environment.as_ref());
        let resolved = if requested == C_LOCALE { self.fallback_locale.clone() } else { requested };
        self.environment.set_message_locale(&resolved);
        resolved
    }

    /// Stores `locale` and applies it as the environment's message locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
        self.environment.set_message_locale(&self.locale);
    }

    /// Returns the active locale, re-applying it as the environment's message locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.environment.set_message_locale(&self.locale);
        &self.locale
    }

    /// Returns the replacement used for the `C` baseline.
    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Returns the environment this coordinator drives.
    #[must_use]
    pub fn environment(&self) -> &dyn LocaleEnvironment {
        self.environment.as_ref()
    }
}

impl fmt::Debug for LocaleCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCoordinator")
            .field("locale", &self.locale)
            .field("fallback_locale", &self.fallback_locale)
            .finish_non_exhaustive()
    }
}

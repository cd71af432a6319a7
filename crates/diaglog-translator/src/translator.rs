// crates/diaglog-translator/src/translator.rs
// ============================================================================
// Module: Translator
// Description: Rendering of log entries into localized display text.
// Purpose: Combine locale coordination, catalog lookup, and interpolation.
// Dependencies: thiserror, crate::{catalog, environment, events, locale, localizer}
// ============================================================================

//! ## Overview
//! [`Translator`] turns a [`LogEntry`] into text in the active locale:
//!
//! 1. The active locale is re-applied to the environment, and `LC_ALL` is forced
//!    to it for the duration of the call.
//! 2. The template for the entry's module and tag is looked up in the lazily
//!    built catalog. Without one, the entry's own fallback string is returned.
//! 3. The template is localized for the effective environment locale and the
//!    entry's arguments are interpolated into it.
//!
//! Missing translations are never errors. The only failure is a catalog that
//! cannot be built, which surfaces from the first call that needs it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::catalog::CatalogError;
use crate::catalog::CatalogRegistry;
use crate::catalog::DEFAULT_BASE_MODULE;
use crate::catalog::ModuleRegistry;
use crate::entry::LogEntry;
use crate::environment::LC_ALL;
use crate::environment::LocaleEnvironment;
use crate::environment::ProcessLocaleEnvironment;
use crate::environment::ScopedVar;
use crate::environment::effective_message_locale;
use crate::events::EventSink;
use crate::events::NoopEventSink;
use crate::events::TranslatorEvent;
use crate::interpolate::interpolate;
use crate::locale::DEFAULT_FALLBACK_LOCALE;
use crate::locale::LocaleCoordinator;
use crate::localizer::MessageLocalizer;
use crate::localizer::SourceText;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the translator.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslatorError {
    /// The catalog could not be built.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// A process-wide translator is already installed.
    #[error("process translator already initialized")]
    AlreadyInitialized,
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Configures and constructs a [`Translator`].
pub struct TranslatorBuilder {
    /// Explicit locale; resolved from the environment when `None`.
    locale: Option<String>,
    /// Replacement for the `C` baseline.
    fallback_locale: String,
    /// Module loaded after `SYSTEM`.
    base_module: String,
    /// Active evaluation modules.
    modules: Arc<dyn ModuleRegistry>,
    /// Ambient locale state.
    environment: Arc<dyn LocaleEnvironment>,
    /// Localized template source.
    localizer: Arc<dyn MessageLocalizer>,
    /// Event destination.
    events: Arc<dyn EventSink>,
}

impl TranslatorBuilder {
    /// Starts a builder over `modules` using the process environment.
    #[must_use]
    pub fn new(modules: Arc<dyn ModuleRegistry>) -> Self {
        Self {
            locale: None,
            fallback_locale: DEFAULT_FALLBACK_LOCALE.to_string(),
            base_module: DEFAULT_BASE_MODULE.to_string(),
            modules,
            environment: Arc::new(ProcessLocaleEnvironment),
            localizer: Arc::new(SourceText),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Sets an explicit locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the replacement for the `C` baseline locale.
    #[must_use]
    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    /// Sets the module loaded right after `SYSTEM`.
    #[must_use]
    pub fn base_module(mut self, module: impl Into<String>) -> Self {
        self.base_module = module.into();
        self
    }

    /// Replaces the locale environment.
    #[must_use]
    pub fn environment(mut self, environment: Arc<dyn LocaleEnvironment>) -> Self {
        self.environment = environment;
        self
    }

    /// Replaces the message localizer.
    #[must_use]
    pub fn localizer(mut self, localizer: Arc<dyn MessageLocalizer>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Builds the translator, applying its locale to the environment.
    #[must_use]
    pub fn build(self) -> Translator {
        let coordinator = LocaleCoordinator::with_fallback(
            self.locale.as_deref(),
            self.fallback_locale,
            self.environment,
        );
        let translator = Translator {
            coordinator,
            catalogs: CatalogRegistry::new(self.base_module, self.modules),
            localizer: self.localizer,
            events: self.events,
        };
        translator.emit(TranslatorEvent::LocaleApplied {
            locale: translator.coordinator.locale().to_string(),
        });
        translator
    }
}

// ============================================================================
// SECTION: Translator
// ============================================================================

/// Renders log entries in the active locale.
///
/// # Invariants
/// - The catalog is built at most once per translator.
/// - Every call that renders text re-applies the active locale to the environment.
/// - Only one translator should drive a shared environment at a time.
pub struct Translator {
    /// Active locale owner.
    coordinator: LocaleCoordinator,
    /// Lazily built catalog.
    catalogs: CatalogRegistry,
    /// Localized template source.
    localizer: Arc<dyn MessageLocalizer>,
    /// Event destination.
    events: Arc<dyn EventSink>,
}

impl Translator {
    /// Creates a translator on the process environment with default settings.
    ///
    /// Without an explicit `locale`, the locale is resolved from the environment.
    ///
    /// `modules` must register the base module (`Basic` unless the builder says
    /// otherwise). Without it the catalog cannot be built and every translation
    /// fails with [`CatalogError::UnknownModule`], built-in `SYSTEM` tags included.
    #[must_use]
    pub fn new(locale: Option<&str>, modules: Arc<dyn ModuleRegistry>) -> Self {
        let builder = TranslatorBuilder::new(modules);
        match locale {
            Some(locale) => builder.locale(locale).build(),
            None => builder.build(),
        }
    }

    /// Starts a builder over `modules`.
    #[must_use]
    pub fn builder(modules: Arc<dyn ModuleRegistry>) -> TranslatorBuilder {
        TranslatorBuilder::new(modules)
    }

    /// Returns the active locale, re-applying it to the environment.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.coordinator.locale()
    }

    /// Changes the active locale and applies it to the environment.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.coordinator.set_locale(locale);
        self.emit(TranslatorEvent::LocaleApplied {
            locale: self.coordinator.locale().to_string(),
        });
    }

    /// Resolves the locale the environment requests, as at construction.
    pub fn resolve_default_locale(&self) -> String {
        self.coordinator.resolve_default_locale()
    }

    /// Returns the full catalog, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError`] when the catalog cannot be built.
    pub fn all_tag_descriptions(&self) -> Result<&Catalog, TranslatorError> {
        let fresh = !self.catalogs.is_loaded();
        let catalog = self.catalogs.load()?;
        if fresh {
            self.emit(TranslatorEvent::CatalogLoaded {
                modules: catalog.len(),
                tags: catalog.tag_count(),
            });
        }
        Ok(catalog)
    }

    /// Translates the entry's message without timestamp or level.
    ///
    /// Returns the entry's fallback string when no template exists.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError`] when the catalog cannot be built.
    pub fn translate_tag(&self, entry: &LogEntry) -> Result<String, TranslatorError> {
        let environment = self.coordinator.environment();
        let _scope = ScopedVar::set(environment, LC_ALL, self.coordinator.locale());
        let catalog = self.all_tag_descriptions()?;
        let Some(template) = catalog.lookup(&entry.module, &entry.tag) else {
            self.emit(TranslatorEvent::TranslationMissing {
                module: entry.module.clone(),
                tag: entry.tag.clone(),
            });
            return Ok(entry.string.clone());
        };
        Ok(interpolate(self.localize(environment, template), &entry.args))
    }

    /// Renders the entry as `"<timestamp> <level> <message>"`.
    ///
    /// The timestamp is right-aligned in 7 columns with 2 decimals and the
    /// level left-aligned in 9 columns.
    ///
    /// # Errors
    ///
    /// Returns [`TranslatorError`] when the catalog cannot be built.
    pub fn format_entry(&self, entry: &LogEntry) -> Result<String, TranslatorError> {
        let message = self.translate_tag(entry)?;
        Ok(format!("{:7.2} {:<9} {}", entry.timestamp, entry.level, message))
    }

    /// Returns the localized description of a test case.
    ///
    /// Modules are searched in load order; the first that describes `test_case` wins.
    #[must_use]
    pub fn test_case_description(&self, test_case: &str) -> Option<String> {
        let environment = self.coordinator.environment();
        let _scope = ScopedVar::set(environment, LC_ALL, self.coordinator.locale());
        let registered = self.catalogs.module_registry().modules();
        let order = self.catalogs.load_order(&registered).ok()?;
        order.into_iter().find_map(|(_, module)| {
            let descriptions = module.source.test_case_descriptions();
            let description = descriptions.get(test_case)?;
            Some(self.localize(environment, description).to_string())
        })
    }

    /// Localizes `template` for the environment's effective locale.
    fn localize<'a>(&'a self, environment: &dyn LocaleEnvironment, template: &'a str) -> &'a str {
        let locale = effective_message_locale(environment);
        self.localizer.localize(&locale, template).unwrap_or(template)
    }

    /// Sends an event to the sink, ignoring sink failures.
    fn emit(&self, event: TranslatorEvent) {
        let _ = self.events.record(&event);
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("coordinator", &self.coordinator)
            .field("base_module", &self.catalogs.base_module())
            .field("catalog_loaded", &self.catalogs.is_loaded())
            .finish_non_exhaustive()
    }
}

// crates/diaglog-translator/src/lib.rs
// ============================================================================
// Module: Diagnostic Log Translator
// Description: Localized rendering of structured diagnostic log entries.
// Purpose: Resolve, localize, and interpolate message templates per entry.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Evaluation modules emit [`LogEntry`] records identified by module and tag.
//! This crate renders them for people: the [`Translator`] assembles every
//! module's message catalog once, keeps the process message locale in step
//! with its own, and interpolates entry arguments into the localized template.
//! Entries without a template render as their own fallback string.
//! Invariants:
//! - The catalog is built lazily, once per translator, and never mutated.
//! - Missing translations degrade to fallback text; they are never errors.
//! - Locale state is process-wide; run one translator per process (see [`global`]).

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod entry;
pub mod environment;
pub mod events;
pub mod global;
pub mod interpolate;
pub mod locale;
pub mod localizer;
pub mod system;
pub mod translator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use catalog::CatalogRegistry;
pub use catalog::DEFAULT_BASE_MODULE;
pub use catalog::ModuleList;
pub use catalog::ModuleRegistry;
pub use catalog::RegisteredModule;
pub use catalog::TranslationCatalog;
pub use entry::Level;
pub use entry::LogEntry;
pub use environment::InMemoryLocaleEnvironment;
pub use environment::LocaleEnvironment;
pub use environment::ProcessLocaleEnvironment;
pub use events::EventSink;
pub use events::EventSinkError;
pub use events::JsonLineEventSink;
pub use events::NoopEventSink;
pub use events::TranslatorEvent;
pub use locale::DEFAULT_FALLBACK_LOCALE;
pub use locale::LocaleCoordinator;
pub use localizer::MessageLocalizer;
pub use localizer::SourceText;
pub use localizer::TranslationTable;
pub use system::SYSTEM_MODULE;
pub use system::SystemCatalog;
pub use translator::Translator;
pub use translator::TranslatorBuilder;
pub use translator::TranslatorError;

// crates/diaglog-translator/src/events.rs
// ============================================================================
// Module: Translator Events
// Description: Structured events emitted while translating log entries.
// Purpose: Let hosts observe catalog builds, locale changes, and misses.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The translator reports what it does through an [`EventSink`]. Events are
//! informational: a sink failure never changes a translation result, and the
//! default [`NoopEventSink`] discards everything. [`JsonLineEventSink`] writes
//! one JSON record per line to any writer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::sync::PoisonError;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Event emitted by the translator.
///
/// # Invariants
/// - Variants and field names are stable for log consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TranslatorEvent {
    /// The catalog was built.
    CatalogLoaded {
        /// Number of module tables installed.
        modules: usize,
        /// Number of templates across all modules.
        tags: usize,
    },
    /// A locale was applied to the environment.
    LocaleApplied {
        /// Applied locale identifier.
        locale: String,
    },
    /// No template exists for an entry; the fallback string was used.
    TranslationMissing {
        /// Entry module.
        module: String,
        /// Entry tag.
        tag: String,
    },
}

// ============================================================================
// SECTION: Sink Errors
// ============================================================================

/// Errors emitted by event sinks.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum EventSinkError {
    /// The event could not be serialized.
    #[error("event serialization failed: {0}")]
    Serialize(String),
    /// The event could not be written.
    #[error("event write failed: {0}")]
    Write(String),
}

// ============================================================================
// SECTION: Sink Trait
// ============================================================================

/// Receives translator events.
pub trait EventSink: Send + Sync {
    /// Records one event.
    ///
    /// # Errors
    ///
    /// Returns [`EventSinkError`] when the event cannot be recorded.
    fn record(&self, event: &TranslatorEvent) -> Result<(), EventSinkError>;
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn record(&self, _event: &TranslatorEvent) -> Result<(), EventSinkError> {
        Ok(())
    }
}

// ============================================================================
// SECTION: JSON Line Sink
// ============================================================================

/// Sink writing each event as one JSON line.
pub struct JsonLineEventSink<W> {
    /// Destination writer.
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineEventSink<W> {
    /// Creates a sink writing to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> EventSink for JsonLineEventSink<W> {
    fn record(&self, event: &TranslatorEvent) -> Result<(), EventSinkError> {
        let mut line =
            serde_json::to_vec(event).map_err(|err| EventSinkError::Serialize(err.to_string()))?;
        line.push(b'\n');
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&line).map_err(|err| EventSinkError::Write(err.to_string()))?;
        writer.flush().map_err(|err| EventSinkError::Write(err.to_string()))
    }
}

#[cfg(test)]
mod tests;

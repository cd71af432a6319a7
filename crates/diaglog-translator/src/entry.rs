// crates/diaglog-translator/src/entry.rs
// ============================================================================
// Module: Diagnostic Log Entries
// Description: Log entry records produced by the evaluation engine.
// Purpose: Carry module, tag, severity, and named arguments into translation.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`LogEntry`] is one structured diagnostic record: when it was emitted,
//! how severe it is, which module produced it, the symbolic tag naming the
//! message, and the named arguments the message template refers to.
//!
//! Every entry carries a precomputed fallback `string`. The translator returns
//! it verbatim whenever no template exists for the entry's module and tag, so
//! it must always be displayable on its own.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Severity Levels
// ============================================================================

/// Severity of a diagnostic log entry.
///
/// # Invariants
/// - Variants are ordered from least to most severe.
/// - Labels are stable; they are the engine's wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Level {
    /// Most verbose debugging output.
    Debug3,
    /// Verbose debugging output.
    Debug2,
    /// Debugging output.
    Debug,
    /// Informational message.
    Info,
    /// Noteworthy but harmless condition.
    Notice,
    /// Condition that likely needs attention.
    Warning,
    /// Definite problem.
    Error,
    /// Problem severe enough to stop evaluation.
    Critical,
}

/// Ordered list of all severity levels.
pub const ALL_LEVELS: &[Level] = &[
    Level::Debug3,
    Level::Debug2,
    Level::Debug,
    Level::Info,
    Level::Notice,
    Level::Warning,
    Level::Error,
    Level::Critical,
];

impl Level {
    /// Returns the canonical level label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug3 => "DEBUG3",
            Self::Debug2 => "DEBUG2",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Parses a level label (case-insensitive, surrounding whitespace ignored).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        ALL_LEVELS.iter().copied().find(|level| level.as_str().eq_ignore_ascii_case(value))
    }
}

impl TryFrom<String> for Level {
    type Error = String;

    fn try_from(value: String) -> Result<Self, <Self as TryFrom<String>>::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown log level: {value}"))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to `pad` so width and alignment flags apply to the label.
        f.pad(self.as_str())
    }
}

// ============================================================================
// SECTION: Log Entry
// ============================================================================

/// One diagnostic record emitted by the evaluation engine.
///
/// # Invariants
/// - `module` and `tag` together identify at most one template per locale.
/// - `string` is always a valid rendering of the entry, translated or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LogEntryRecord")]
pub struct LogEntry {
    /// Seconds elapsed since evaluation started.
    pub timestamp: f64,
    /// Severity level.
    pub level: Level,
    /// Name of the producing module (e.g., `"SYSTEM"`, `"BASIC"`).
    pub module: String,
    /// Symbolic message tag within the module.
    pub tag: String,
    /// Named arguments referenced by the message template.
    pub args: BTreeMap<String, Value>,
    /// Precomputed untranslated rendering.
    pub string: String,
}

impl LogEntry {
    /// Creates an entry and precomputes its fallback string.
    #[must_use]
    pub fn new(
        timestamp: f64,
        level: Level,
        module: impl Into<String>,
        tag: impl Into<String>,
        args: BTreeMap<String, Value>,
    ) -> Self {
        let mut entry = Self {
            timestamp,
            level,
            module: module.into(),
            tag: tag.into(),
            args,
            string: String::new(),
        };
        entry.string = entry.fallback_string();
        entry
    }

    /// Returns the arguments rendered as sorted `key=value` pairs joined by `"; "`.
    #[must_use]
    pub fn argstr(&self) -> String {
        self.args
            .iter()
            .map(|(key, value)| format!("{key}={}", printable(value)))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Builds the untranslated `MODULE:TAG args` rendering.
    fn fallback_string(&self) -> String {
        if self.args.is_empty() {
            return format!("{}:{}", self.module, self.tag);
        }
        format!("{}:{} {}", self.module, self.tag, self.argstr())
    }
}

/// Wire form of a log entry; `args` and `string` are optional.
#[derive(Deserialize)]
struct LogEntryRecord {
    /// Seconds elapsed since evaluation started.
    timestamp: f64,
    /// Severity level.
    level: Level,
    /// Producing module.
    module: String,
    /// Message tag.
    tag: String,
    /// Named arguments.
    #[serde(default)]
    args: BTreeMap<String, Value>,
    /// Optional precomputed rendering.
    #[serde(default)]
    string: Option<String>,
}

impl From<LogEntryRecord> for LogEntry {
    fn from(record: LogEntryRecord) -> Self {
        let supplied = record.string;
        let mut entry = Self {
            timestamp: record.timestamp,
            level: record.level,
            module: record.module,
            tag: record.tag,
            args: record.args,
            string: String::new(),
        };
        entry.string = supplied.unwrap_or_else(|| entry.fallback_string());
        entry
    }
}

// ============================================================================
// SECTION: Printable Values
// ============================================================================

/// Converts an argument value to the text substituted into templates.
///
/// Strings are used verbatim, `null` renders empty, arrays are joined by
/// `", "`, and objects render as compact JSON.
#[must_use]
pub fn printable(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(printable).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

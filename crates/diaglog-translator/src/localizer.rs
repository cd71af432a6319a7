// crates/diaglog-translator/src/localizer.rs
// ============================================================================
// Module: Message Localization
// Description: Mapping from English message templates to localized templates.
// Purpose: Provide the per-locale text behind each catalog template.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Catalog templates are English source text and double as message ids. A
//! [`MessageLocalizer`] maps a message id to its text in a locale; when it has
//! nothing, the English template is used unchanged.
//!
//! Locale names are matched the way message-catalog lookups usually are:
//! `sv_SE.UTF-8@euro` tries `sv_SE`, then `sv`. The `C` and `POSIX` baselines
//! never localize.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::environment::C_LOCALE;

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Source of localized message templates.
pub trait MessageLocalizer: Send + Sync {
    /// Returns the localized template for `msgid`, if `locale` has one.
    fn localize<'a>(&'a self, locale: &str, msgid: &str) -> Option<&'a str>;
}

/// Localizer that always keeps the English source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceText;

impl MessageLocalizer for SourceText {
    fn localize<'a>(&'a self, _locale: &str, _msgid: &str) -> Option<&'a str> {
        None
    }
}

// ============================================================================
// SECTION: Translation Table
// ============================================================================

/// In-memory message tables keyed by language tag, then message id.
///
/// # Invariants
/// - Language tags are stored as given (e.g., `"sv"`, `"sv_SE"`).
/// - Empty translations are treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Messages per language tag.
    languages: BTreeMap<String, BTreeMap<String, String>>,
}

impl TranslationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one translation.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        msgid: impl Into<String>,
        msgstr: impl Into<String>,
    ) {
        self.languages.entry(language.into()).or_default().insert(msgid.into(), msgstr.into());
    }

    /// Merges a language's messages into the table, replacing existing message ids.
    pub fn extend_language(
        &mut self,
        language: impl Into<String>,
        messages: impl IntoIterator<Item = (String, String)>,
    ) {
        self.languages.entry(language.into()).or_default().extend(messages);
    }

    /// Returns the language tags with at least one message.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(tag, _)| tag.as_str())
    }

    /// Total number of translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.values().map(BTreeMap::len).sum()
    }

    /// Whether the table holds no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageLocalizer for TranslationTable {
    fn localize<'a>(&'a self, locale: &str, msgid: &str) -> Option<&'a str> {
        locale_candidates(locale).iter().find_map(|candidate| {
            self.languages
                .get(candidate)
                .and_then(|messages| messages.get(msgid))
                .map(String::as_str)
                .filter(|msgstr| !msgstr.is_empty())
        })
    }
}

// ============================================================================
// SECTION: Locale Candidates
// ============================================================================

/// Returns the language tags to try for `locale`, most specific first.
///
/// Codeset (`.UTF-8`) and modifier (`@euro`) suffixes are dropped. Baseline
/// locales yield no candidates.
#[must_use]
pub fn locale_candidates(locale: &str) -> Vec<String> {
    let base = locale.split(['.', '@']).next().unwrap_or_default().trim();
    if base.is_empty() || base == C_LOCALE || base == "POSIX" {
        return Vec::new();
    }
    let mut candidates = vec![base.to_string()];
    if let Some((language, _territory)) = base.split_once('_')
        && !language.is_empty()
    {
        candidates.push(language.to_string());
    }
    candidates
}

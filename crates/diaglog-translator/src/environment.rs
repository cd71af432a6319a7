// crates/diaglog-translator/src/environment.rs
// ============================================================================
// Module: Locale Environment
// Description: Process-wide locale state consulted by message lookups.
// Purpose: Isolate environment variables and the message-locale category.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Message localization is keyed by ambient process state rather than by an
//! explicit parameter: the `LC_ALL`, `LC_MESSAGES`, and `LANG` variables plus
//! the process message-locale category. [`LocaleEnvironment`] is the seam over
//! that state. [`ProcessLocaleEnvironment`] mutates the real process, so every
//! instance shares one global state; [`InMemoryLocaleEnvironment`] keeps the
//! same state private to one value.
//!
//! Writes to the real process environment are serialized through a process-wide
//! lock, but readers outside this crate (other threads calling
//! [`std::env::var`], C libraries) are not. Only one translator should drive
//! the process environment at a time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::RwLock;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Variable overriding every locale category.
pub const LC_ALL: &str = "LC_ALL";
/// Variable selecting the message-locale category.
pub const LC_MESSAGES: &str = "LC_MESSAGES";
/// Variable supplying the default for every category.
pub const LANG: &str = "LANG";
/// Unlocalized baseline locale.
pub const C_LOCALE: &str = "C";

/// Variables consulted when resolving the message locale, highest precedence first.
const MESSAGE_LOCALE_VARS: &[&str] = &[LC_ALL, LC_MESSAGES, LANG];

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Ambient locale state shared by everything running in one environment.
pub trait LocaleEnvironment: Send + Sync {
    /// Returns the value of an environment variable.
    fn var(&self, name: &str) -> Option<String>;

    /// Sets an environment variable.
    fn set_var(&self, name: &str, value: &str);

    /// Removes an environment variable.
    fn remove_var(&self, name: &str);

    /// Returns the current message-locale category setting, if one was applied.
    fn message_locale(&self) -> Option<String>;

    /// Applies `locale` as the message-locale category setting.
    fn set_message_locale(&self, locale: &str);
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the message locale the environment asks for.
///
/// Returns the first non-empty of `LC_ALL`, `LC_MESSAGES`, `LANG`, or
/// [`C_LOCALE`] when none is set.
#[must_use]
pub fn requested_message_locale(environment: &dyn LocaleEnvironment) -> String {
    MESSAGE_LOCALE_VARS
        .iter()
        .find_map(|name| non_empty(environment.var(name)))
        .unwrap_or_else(|| C_LOCALE.to_string())
}

/// Returns the locale a message lookup observes right now.
///
/// `LC_ALL` overrides the category setting; with neither present the
/// baseline [`C_LOCALE`] applies.
#[must_use]
pub fn effective_message_locale(environment: &dyn LocaleEnvironment) -> String {
    non_empty(environment.var(LC_ALL))
        .or_else(|| non_empty(environment.message_locale()))
        .unwrap_or_else(|| C_LOCALE.to_string())
}

/// Filters out empty values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

// ============================================================================
// SECTION: Scoped Override
// ============================================================================

/// Sets a variable for the lifetime of the guard, then restores the prior state.
///
/// # Invariants
/// - On drop the variable holds its previous value, or is removed if it had none.
pub struct ScopedVar<'a> {
    /// Environment the override applies to.
    environment: &'a dyn LocaleEnvironment,
    /// Overridden variable.
    name: &'static str,
    /// Value present before the override.
    previous: Option<String>,
}

impl<'a> ScopedVar<'a> {
    /// Sets `name` to `value` until the returned guard is dropped.
    #[must_use]
    pub fn set(environment: &'a dyn LocaleEnvironment, name: &'static str, value: &str) -> Self {
        let previous = environment.var(name);
        environment.set_var(name, value);
        Self {
            environment,
            name,
            previous,
        }
    }
}

impl Drop for ScopedVar<'_> {
    fn drop(&mut self) {
        match self.previous.as_deref() {
            Some(value) => self.environment.set_var(self.name, value),
            None => self.environment.remove_var(self.name),
        }
    }
}

// ============================================================================
// SECTION: Process Environment
// ============================================================================

/// Serializes this crate's writes to the process environment.
static PROCESS_ENV_LOCK: Mutex<()> = Mutex::new(());

/// Process message-locale category; `None` until first applied.
static PROCESS_MESSAGE_LOCALE: RwLock<Option<String>> = RwLock::new(None);

/// The real process environment.
///
/// # Invariants
/// - All instances observe and mutate the same process-global state.
/// - Values containing NUL bytes are ignored rather than applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLocaleEnvironment;

impl LocaleEnvironment for ProcessLocaleEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        let _guard = PROCESS_ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        env::var(name).ok()
    }

    #[allow(unsafe_code, reason = "Mutating the process environment is inherently unsafe.")]
    fn set_var(&self, name: &str, value: &str) {
        if name.is_empty() || name.contains(['=', '\0']) || value.contains('\0') {
            return;
        }
        let _guard = PROCESS_ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        // SAFETY: writes from this crate are serialized by `PROCESS_ENV_LOCK`,
        // and callers are required to run a single translator per process.
        unsafe { env::set_var(name, value) };
    }

    #[allow(unsafe_code, reason = "Mutating the process environment is inherently unsafe.")]
    fn remove_var(&self, name: &str) {
        if name.is_empty() || name.contains(['=', '\0']) {
            return;
        }
        let _guard = PROCESS_ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        // SAFETY: see `set_var`.
        unsafe { env::remove_var(name) };
    }

    fn message_locale(&self) -> Option<String> {
        PROCESS_MESSAGE_LOCALE.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_message_locale(&self, locale: &str) {
        if locale.contains('\0') {
            return;
        }
        *PROCESS_MESSAGE_LOCALE.write().unwrap_or_else(PoisonError::into_inner) =
            Some(locale.to_string());
    }
}

// ============================================================================
// SECTION: In-Memory Environment
// ============================================================================

/// Locale environment private to one value.
#[derive(Debug, Default)]
pub struct InMemoryLocaleEnvironment {
    /// Environment variables.
    vars: Mutex<BTreeMap<String, String>>,
    /// Message-locale category setting.
    message_locale: Mutex<Option<String>>,
}

impl InMemoryLocaleEnvironment {
    /// Creates an empty environment (resolves to the `C` locale).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, builder style.
    #[must_use]
    pub fn with_var(self, name: &str, value: &str) -> Self {
        self.set_var(name, value);
        self
    }
}

impl LocaleEnvironment for InMemoryLocaleEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner).get(name).cloned()
    }

    fn set_var(&self, name: &str, value: &str) {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
    }

    fn remove_var(&self, name: &str) {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner).remove(name);
    }

    fn message_locale(&self) -> Option<String> {
        self.message_locale.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_message_locale(&self, locale: &str) {
        *self.message_locale.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(locale.to_string());
    }
}

#[cfg(test)]
mod tests;

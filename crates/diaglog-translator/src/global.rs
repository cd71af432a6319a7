// crates/diaglog-translator/src/global.rs
// ============================================================================
// Module: Process Translator
// Description: The single translator installed for the whole process.
// Purpose: Give process-global locale state one process-global owner.
// Dependencies: std, crate::translator
// ============================================================================

//! ## Overview
//! Locale state in the process environment is shared by everything in the
//! process, so at most one translator should drive it. [`initialize`] installs
//! that translator once; later calls fail with
//! [`TranslatorError::AlreadyInitialized`]. Access goes through a mutex, which
//! serializes translation calls made from different threads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

use crate::translator::Translator;
use crate::translator::TranslatorError;

// ============================================================================
// SECTION: Instance
// ============================================================================

/// Process-wide translator slot.
static INSTANCE: OnceLock<Mutex<Translator>> = OnceLock::new();

/// Installs `translator` as the process translator.
///
/// # Errors
///
/// Returns [`TranslatorError::AlreadyInitialized`] when a translator is already installed;
/// the supplied translator is dropped.
pub fn initialize(translator: Translator) -> Result<&'static Mutex<Translator>, TranslatorError> {
    INSTANCE.set(Mutex::new(translator)).map_err(|_| TranslatorError::AlreadyInitialized)?;
    INSTANCE.get().ok_or(TranslatorError::AlreadyInitialized)
}

/// Returns the process translator, if one was installed.
#[must_use]
pub fn instance() -> Option<&'static Mutex<Translator>> {
    INSTANCE.get()
}

/// Runs `f` with exclusive access to the process translator.
///
/// Returns `None` when no translator is installed.
pub fn with_instance<R>(f: impl FnOnce(&mut Translator) -> R) -> Option<R> {
    let instance = INSTANCE.get()?;
    let mut translator = instance.lock().unwrap_or_else(PoisonError::into_inner);
    Some(f(&mut translator))
}

// crates/diaglog-translator/src/environment/tests.rs
// ============================================================================
// Module: Locale Environment Tests
// Description: Unit tests for locale resolution and scoped overrides.
// Purpose: Pin POSIX precedence and restore-on-drop behavior.
// Dependencies: diaglog-translator
// ============================================================================

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::C_LOCALE;
use super::InMemoryLocaleEnvironment;
use super::LANG;
use super::LC_ALL;
use super::LC_MESSAGES;
use super::LocaleEnvironment;
use super::ProcessLocaleEnvironment;
use super::ScopedVar;
use super::effective_message_locale;
use super::requested_message_locale;

// ============================================================================
// SECTION: Resolution Tests
// ============================================================================

#[test]
fn requested_locale_defaults_to_c() {
    let environment = InMemoryLocaleEnvironment::new();
    assert_eq!(requested_message_locale(&environment), C_LOCALE);
}

#[test]
fn requested_locale_follows_posix_precedence() {
    let environment = InMemoryLocaleEnvironment::new().with_var(LANG, "fr_FR.UTF-8");
    assert_eq!(requested_message_locale(&environment), "fr_FR.UTF-8");

    environment.set_var(LC_MESSAGES, "sv_SE.UTF-8");
    assert_eq!(requested_message_locale(&environment), "sv_SE.UTF-8");

    environment.set_var(LC_ALL, "da_DK.UTF-8");
    assert_eq!(requested_message_locale(&environment), "da_DK.UTF-8");
}

#[test]
fn requested_locale_skips_empty_values() {
    let environment =
        InMemoryLocaleEnvironment::new().with_var(LC_ALL, "").with_var(LANG, "nb_NO.UTF-8");
    assert_eq!(requested_message_locale(&environment), "nb_NO.UTF-8");
}

#[test]
fn effective_locale_prefers_lc_all_over_category() {
    let environment = InMemoryLocaleEnvironment::new();
    assert_eq!(effective_message_locale(&environment), C_LOCALE);

    environment.set_message_locale("sv_SE.UTF-8");
    assert_eq!(effective_message_locale(&environment), "sv_SE.UTF-8");

    environment.set_var(LC_ALL, "fr_FR.UTF-8");
    assert_eq!(effective_message_locale(&environment), "fr_FR.UTF-8");
}

// ============================================================================
// SECTION: Scoped Override Tests
// ============================================================================

#[test]
fn scoped_var_restores_previous_value() {
    let environment = InMemoryLocaleEnvironment::new().with_var(LC_ALL, "fr_FR.UTF-8");
    {
        let _guard = ScopedVar::set(&environment, LC_ALL, "sv_SE.UTF-8");
        assert_eq!(environment.var(LC_ALL).as_deref(), Some("sv_SE.UTF-8"));
    }
    assert_eq!(environment.var(LC_ALL).as_deref(), Some("fr_FR.UTF-8"));
}

#[test]
fn scoped_var_removes_when_previously_unset() {
    let environment = InMemoryLocaleEnvironment::new();
    {
        let _guard = ScopedVar::set(&environment, LC_ALL, "sv_SE.UTF-8");
        assert!(environment.var(LC_ALL).is_some());
    }
    assert_eq!(environment.var(LC_ALL), None);
}

// ============================================================================
// SECTION: Process Environment Tests
// ============================================================================

#[test]
fn process_environment_round_trips_variables() {
    const NAME: &str = "DIAGLOG_TRANSLATOR_ENV_TEST";
    let environment = ProcessLocaleEnvironment;
    {
        let _guard = ScopedVar::set(&environment, NAME, "xx_XX.UTF-8");
        assert_eq!(environment.var(NAME).as_deref(), Some("xx_XX.UTF-8"));
        assert_eq!(std::env::var(NAME).ok().as_deref(), Some("xx_XX.UTF-8"));
    }
    assert_eq!(environment.var(NAME), None);
}

#[test]
fn process_environment_ignores_nul_values() {
    const NAME: &str = "DIAGLOG_TRANSLATOR_NUL_TEST";
    let environment = ProcessLocaleEnvironment;
    environment.set_var(NAME, "bad\0value");
    assert_eq!(environment.var(NAME), None);
}

// crates/diaglog-config/tests/load_validation.rs
// ============================================================================
// Module: Config Load Validation Tests
// Description: Bounded file loading and its fail-closed guards.
// Purpose: Ensure oversized, non-UTF-8, and unreasonable inputs are rejected.
// Dependencies: diaglog-config, tempfile
// ============================================================================

//! ## Overview
//! Exercises [`diaglog_config::TranslatorConfig::load`] against real files.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;

use diaglog_config::ConfigError;
use diaglog_config::MAX_CONFIG_FILE_BYTES;
use diaglog_config::MAX_CONFIG_PATH_BYTES;
use diaglog_config::TranslatorConfig;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<TranslatorConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) if error.to_string().contains(needle) => Ok(()),
        Err(error) => Err(format!("expected error containing {needle:?}, got {error}")),
        Ok(_) => Err(format!("expected error containing {needle:?}, got ok")),
    }
}

fn write_config(dir: &TempDir, bytes: &[u8]) -> Result<PathBuf, String> {
    let path = dir.path().join("diaglog.toml");
    fs::write(&path, bytes).map_err(|err| err.to_string())?;
    Ok(path)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn load_reads_valid_file() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = write_config(
        &dir,
        r#"
locale = "sv_SE.UTF-8"

[translations.sv]
"Profile was read from {name}." = "Profilen lästes från {name}."
"#.as_bytes(),
    )?;
    let config = TranslatorConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    assert_eq!(config.locale.as_deref(), Some("sv_SE.UTF-8"));
    assert_eq!(config.translation_table().len(), 1);
    Ok(())
}

#[test]
fn load_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = TranslatorConfig::load(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let mut content = b"# ".to_vec();
    content.resize(MAX_CONFIG_FILE_BYTES + 1, b'x');
    let path = write_config(&dir, &content)?;
    assert_invalid(TranslatorConfig::load(Some(&path)), "config file exceeds size limit")
}

#[test]
fn load_accepts_file_at_size_limit() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let mut content = b"# ".to_vec();
    content.resize(MAX_CONFIG_FILE_BYTES, b'x');
    let path = write_config(&dir, &content)?;
    TranslatorConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = write_config(&dir, &[b'#', b' ', 0xFF, 0xFE, b'\n'])?;
    assert_invalid(TranslatorConfig::load(Some(&path)), "config file must be utf-8")
}

#[test]
fn load_rejects_overlong_path() -> TestResult {
    let path = PathBuf::from("a/".repeat(MAX_CONFIG_PATH_BYTES / 2 + 1));
    assert_invalid(TranslatorConfig::load(Some(&path)), "config path exceeds max length")
}

#[test]
fn load_rejects_overlong_component() -> TestResult {
    let path = PathBuf::from("c".repeat(300));
    assert_invalid(TranslatorConfig::load(Some(&path)), "config path component too long")
}

#[test]
fn load_validates_after_parsing() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = write_config(&dir, b"base_module = \"\"\n")?;
    assert_invalid(TranslatorConfig::load(Some(&path)), "base_module must be non-empty")
}

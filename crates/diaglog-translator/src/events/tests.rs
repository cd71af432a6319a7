// crates/diaglog-translator/src/events/tests.rs
// ============================================================================
// Module: Translator Event Tests
// Description: Unit tests for event serialization and JSON line output.
// Purpose: Keep event records stable for log consumers.
// Dependencies: diaglog-translator, serde_json
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

use std::io;
use std::io::Write;

use serde_json::Value;
use serde_json::json;

use super::EventSink;
use super::EventSinkError;
use super::JsonLineEventSink;
use super::NoopEventSink;
use super::TranslatorEvent;

/// Writer that rejects every write.
struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn events_serialize_with_tag() {
    let value = serde_json::to_value(TranslatorEvent::TranslationMissing {
        module: "BASIC".to_string(),
        tag: "B99".to_string(),
    })
    .unwrap();
    assert_eq!(value, json!({"event": "translation_missing", "module": "BASIC", "tag": "B99"}));
}

#[test]
fn json_line_sink_writes_one_record_per_line() {
    let sink = JsonLineEventSink::new(Vec::new());
    sink.record(&TranslatorEvent::CatalogLoaded {
        modules: 2,
        tags: 30,
    })
    .unwrap();
    sink.record(&TranslatorEvent::LocaleApplied {
        locale: "sv_SE.UTF-8".to_string(),
    })
    .unwrap();

    let output = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<Value> =
        output.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], json!({"event": "catalog_loaded", "modules": 2, "tags": 30}));
    assert_eq!(lines[1]["locale"], "sv_SE.UTF-8");
}

#[test]
fn json_line_sink_reports_write_failures() {
    let sink = JsonLineEventSink::new(FailingWriter);
    let error = sink
        .record(&TranslatorEvent::LocaleApplied {
            locale: "C".to_string(),
        })
        .unwrap_err();
    assert!(matches!(error, EventSinkError::Write(_)));
    assert!(error.to_string().contains("disk full"));
}

#[test]
fn noop_sink_accepts_everything() {
    assert!(
        NoopEventSink
            .record(&TranslatorEvent::LocaleApplied {
                locale: "C".to_string(),
            })
            .is_ok()
    );
}

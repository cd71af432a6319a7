// crates/diaglog-translator/src/interpolate/tests.rs
// ============================================================================
// Module: Template Interpolation Tests
// Description: Unit tests for placeholder substitution and edge cases.
// Purpose: Pin single-pass substitution and literal handling of unknown names.
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

use std::collections::BTreeMap;

use serde_json::Value;
use serde_json::json;

use super::interpolate;
use super::placeholders;

fn args(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
}

// ============================================================================
// SECTION: Substitution
// ============================================================================

#[test]
fn substitutes_single_placeholder() {
    let rendered =
        interpolate("Profile was read from {name}.", &args(&[("name", json!("/etc/p.json"))]));
    assert_eq!(rendered, "Profile was read from /etc/p.json.");
}

#[test]
fn substitutes_repeated_and_multiple_placeholders() {
    let rendered = interpolate(
        "{ns} for {name}/{type}/{class}; again {ns}",
        &args(&[
            ("ns", json!("ns1.example")),
            ("name", json!("example.com")),
            ("type", json!("SOA")),
            ("class", json!("IN")),
        ]),
    );
    assert_eq!(rendered, "ns1.example for example.com/SOA/IN; again ns1.example");
}

#[test]
fn renders_non_string_values() {
    let rendered = interpolate(
        "Big packet size ({size}) via {servers}",
        &args(&[("size", json!(4096)), ("servers", json!(["a", "b"]))]),
    );
    assert_eq!(rendered, "Big packet size (4096) via a, b");
}

#[test]
fn missing_argument_is_left_literal() {
    assert_eq!(
        interpolate("Fatal error in {module}: {msg}", &BTreeMap::new()),
        "Fatal error in {module}: {msg}"
    );
}

#[test]
fn substituted_values_are_not_rescanned() {
    let rendered = interpolate("{a} and {b}", &args(&[("a", json!("{b}")), ("b", json!("B"))]));
    assert_eq!(rendered, "{b} and B");
}

#[test]
fn malformed_braces_are_emitted_as_is() {
    let empty = BTreeMap::new();
    assert_eq!(interpolate("Hello {world", &empty), "Hello {world");
    assert_eq!(interpolate("Hello {}", &empty), "Hello {}");
    assert_eq!(interpolate("{a b} {{x}}", &args(&[("x", json!("X"))])), "{a b} {X}");
    assert_eq!(interpolate("closing } only", &empty), "closing } only");
    assert_eq!(interpolate("{", &empty), "{");
}

#[test]
fn handles_non_ascii_text() {
    let rendered = interpolate(
        "Både {ns} och {zone} är avstängda",
        &args(&[("ns", json!("ns1")), ("zone", json!("exempel.se"))]),
    );
    assert_eq!(rendered, "Både ns1 och exempel.se är avstängda");
}

// ============================================================================
// SECTION: Placeholder Discovery
// ============================================================================

#[test]
fn placeholders_lists_names_in_order() {
    assert_eq!(
        placeholders("DNS query to {ns} for {name}/{type}/{class} failed with error: {message}"),
        vec!["ns", "name", "type", "class", "message"]
    );
    assert!(placeholders("Both IPv4 and IPv6 are disabled.").is_empty());
    assert_eq!(placeholders("{a}{a} {bad name} {"), vec!["a", "a"]);
}

// ============================================================================
// SECTION: Properties
// ============================================================================

mod properties {
    use std::collections::BTreeMap;

    use proptest::prelude::*;
    use serde_json::json;

    use super::super::interpolate;

    proptest! {
        #[test]
        fn templates_without_braces_are_unchanged(template in "[^{}]{0,64}") {
            prop_assert_eq!(interpolate(&template, &BTreeMap::new()), template);
        }

        #[test]
        fn placeholder_is_replaced_by_value(
            prefix in "[^{}]{0,16}",
            suffix in "[^{}]{0,16}",
            name in "[a-z_][a-z0-9_]{0,8}",
            value in "[^{}]{0,16}",
        ) {
            let template = format!("{prefix}{{{name}}}{suffix}");
            let mut args = BTreeMap::new();
            args.insert(name.clone(), json!(value.clone()));
            let rendered = interpolate(&template, &args);
            let placeholder = format!("{{{name}}}");
            prop_assert_eq!(&rendered, &format!("{prefix}{value}{suffix}"));
            prop_assert!(!rendered.contains(&placeholder));
        }

        #[test]
        fn interpolation_never_panics(template in ".{0,64}", value in ".{0,16}") {
            let mut args = BTreeMap::new();
            args.insert("x".to_string(), json!(value));
            let _ = interpolate(&template, &args);
        }
    }
}

// crates/diaglog-translator/src/system.rs
// ============================================================================
// Module: Built-in SYSTEM Catalog
// Description: Message templates for the engine's own operational messages.
// Purpose: Provide the catalog installed under the `SYSTEM` module key.
// Dependencies: crate::catalog
// ============================================================================

//! ## Overview
//! The `SYSTEM` catalog is owned by the translator rather than supplied by an
//! evaluation module. Its English text is part of the external contract: other
//! locales translate these exact strings, so they must not be reworded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::catalog::CatalogError;
use crate::catalog::TranslationCatalog;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Module key of the built-in catalog.
pub const SYSTEM_MODULE: &str = "SYSTEM";

/// Tag to template entries of the built-in catalog.
pub const SYSTEM_TAGS: &[(&str, &str)] = &[
    ("CANNOT_CONTINUE", "Not enough data about {zone} to continue testing."),
    ("PROFILE_FILE", "Profile was read from {name}."),
    ("DEPENDENCY_VERSION", "Using prerequisite module {name} version {version}."),
    ("GLOBAL_VERSION", "Using version {version} of the Zonemaster engine."),
    ("LOGGER_CALLBACK_ERROR", "Logger callback died with error: {exception}"),
    (
        "LOOKUP_ERROR",
        "DNS query to {ns} for {name}/{type}/{class} failed with error: {message}",
    ),
    ("MODULE_ERROR", "Fatal error in {module}: {msg}"),
    ("MODULE_VERSION", "Using module {module} version {version}."),
    ("MODULE_END", "Module {module} finished running."),
    ("NO_NETWORK", "Both IPv4 and IPv6 are disabled."),
    ("POLICY_DISABLED", "The module {name} was disabled by the policy."),
    (
        "UNKNOWN_METHOD",
        "Request to run {method} in module {module}, but that method does not exist.",
    ),
    (
        "UNKNOWN_MODULE",
        "Request to run {method} in module {module}, but that module does not exist.",
    ),
    ("SKIP_IPV4_DISABLED", "IPv4 is disabled, not sending \"{rrtype}\" query to {ns}."),
    ("SKIP_IPV6_DISABLED", "IPv6 is disabled, not sending \"{rrtype}\" query to {ns}."),
    ("FAKE_DELEGATION", "Followed a fake delegation."),
    ("ADDED_FAKE_DELEGATION", "Added a fake delegation for domain {domain} to name server {ns}."),
    (
        "FAKE_DELEGATION_TO_SELF",
        "Name server {ns} not adding fake delegation for domain {domain} to itself.",
    ),
    (
        "FAKE_DELEGATION_IN_ZONE_NO_IP",
        "The fake delegation of domain {domain} includes an in-zone name server {nsname} \
         without mandatory glue (without IP address).",
    ),
    (
        "FAKE_DELEGATION_NO_IP",
        "The fake delegation of domain {domain} includes a name server {nsname} that cannot be \
         resolved to any IP address.",
    ),
    ("PACKET_BIG", "Big packet size ({size}) (try with \"{command}\")."),
];

// ============================================================================
// SECTION: Catalog Source
// ============================================================================

/// Catalog source for the built-in `SYSTEM` module.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCatalog;

impl TranslationCatalog for SystemCatalog {
    fn catalog(&self) -> Result<BTreeMap<String, String>, CatalogError> {
        Ok(SYSTEM_TAGS
            .iter()
            .map(|(tag, template)| ((*tag).to_string(), (*template).to_string()))
            .collect())
    }
}

//! Error code catalog and lookup.
//!
//! Codes have the form `CF-<subsystem>-<n>`:
//!
//! | Subsystem | Area |
//! |-----------|------|
//! | 0 | internal |
//! | 1 | block parser |
//! | 2 | document loading |
//! | 3 | configuration validation and access |

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Metadata for an error code.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Subsystem name (e.g., "yaml", "loader")
    pub subsystem: &'static str,

    /// Short title for the error
    pub title: &'static str,

    /// Default message shown when a diagnostic has no problem statement
    pub message_template: &'static str,

    /// When this error was introduced (version)
    pub since_version: &'static str,
}

const fn entry(
    code: &'static str,
    subsystem: &'static str,
    title: &'static str,
    message_template: &'static str,
) -> (&'static str, ErrorCodeInfo) {
    (
        code,
        ErrorCodeInfo {
            subsystem,
            title,
            message_template,
            since_version: "0.1.0",
        },
    )
}

const ENTRIES: &[(&str, ErrorCodeInfo)] = &[
    entry(
        "CF-0-1",
        "internal",
        "Internal Error",
        "An unexpected internal error occurred",
    ),
    entry(
        "CF-1-1",
        "yaml",
        "Invalid Indentation",
        "A line is indented differently from the block it belongs to",
    ),
    entry(
        "CF-1-2",
        "yaml",
        "List Item Without Key",
        "A `- item` line appears where a `key: value` entry was expected",
    ),
    entry(
        "CF-1-3",
        "yaml",
        "Invalid Mapping Entry",
        "A line inside a mapping has no `:` separator",
    ),
    entry(
        "CF-1-4",
        "yaml",
        "Expected List Item",
        "A sequence is followed by a line that is not a `- item`",
    ),
    entry(
        "CF-1-5",
        "yaml",
        "Nesting Too Deep",
        "Blocks are nested more deeply than the parser accepts",
    ),
    entry(
        "CF-2-1",
        "loader",
        "Document Not Found",
        "None of the expected configuration files exist",
    ),
    entry(
        "CF-2-2",
        "loader",
        "Unreadable Document",
        "A configuration file exists but could not be read",
    ),
    entry(
        "CF-2-3",
        "loader",
        "Malformed Document",
        "A configuration document is empty or its root is not a mapping",
    ),
    entry(
        "CF-2-4",
        "loader",
        "Invalid JSON",
        "A JSON document could not be parsed",
    ),
    entry(
        "CF-3-1",
        "config",
        "Missing Required Sections",
        "The merged configuration lacks required top-level sections",
    ),
    entry(
        "CF-3-2",
        "config",
        "Malformed Sections",
        "Required top-level sections must be mappings",
    ),
    entry(
        "CF-3-3",
        "config",
        "Invalid Project Name",
        "Project names must name a single directory under the projects root",
    ),
    entry(
        "CF-3-4",
        "config",
        "Key Not Found",
        "A required configuration key is absent",
    ),
];

/// Global error catalog, keyed by code.
pub static ERROR_CATALOG: Lazy<HashMap<&'static str, ErrorCodeInfo>> =
    Lazy::new(|| ENTRIES.iter().cloned().collect());

/// Look up error code information.
///
/// ```
/// use factory_error_reporting::catalog::get_error_info;
///
/// let info = get_error_info("CF-1-1").unwrap();
/// assert_eq!(info.title, "Invalid Indentation");
/// ```
pub fn get_error_info(code: &str) -> Option<&'static ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

/// Get the subsystem name for an error code.
pub fn get_subsystem(code: &str) -> Option<&'static str> {
    get_error_info(code).map(|info| info.subsystem)
}

//! Error types for block parsing.

use thiserror::Error;

/// Result type alias for factory-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural errors raised while turning lines into a tree.
///
/// Line numbers are 1-based and refer to physical lines of the input,
/// including the comment and blank lines the preprocessor dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A line is indented deeper than its block without a parent key claiming it.
    #[error("line {line}: invalid indentation (expected {expected} spaces, found {found}): {content}")]
    InvalidIndentation {
        line: usize,
        expected: usize,
        found: usize,
        content: String,
    },

    /// A `- item` line appeared where a mapping key was expected.
    #[error("line {line}: list item without a parent key at indent {indent}: {content}")]
    ListItemWithoutKey {
        line: usize,
        indent: usize,
        content: String,
    },

    /// A mapping line without a `:` separator.
    #[error("line {line}: invalid mapping entry (expected `key: value`): {content}")]
    InvalidMappingEntry { line: usize, content: String },

    /// A non-dash line at the indentation of a top-level sequence.
    #[error("line {line}: expected a `- item` line inside a sequence: {content}")]
    ExpectedListItem { line: usize, content: String },

    /// Blocks nested deeper than the parser accepts.
    #[error("line {line}: blocks nested more than {limit} levels deep")]
    NestingTooDeep { line: usize, limit: usize },
}

impl Error {
    /// The 1-based physical line the error points at.
    pub fn line(&self) -> usize {
        match self {
            Error::InvalidIndentation { line, .. }
            | Error::ListItemWithoutKey { line, .. }
            | Error::InvalidMappingEntry { line, .. }
            | Error::ExpectedListItem { line, .. }
            | Error::NestingTooDeep { line, .. } => *line,
        }
    }

    /// Short label for the kind of failure, without the line prefix.
    pub fn label(&self) -> &'static str {
        match self {
            Error::InvalidIndentation { .. } => "invalid indentation",
            Error::ListItemWithoutKey { .. } => "list item without a parent key",
            Error::InvalidMappingEntry { .. } => "invalid mapping entry",
            Error::ExpectedListItem { .. } => "expected a list item",
            Error::NestingTooDeep { .. } => "nesting too deep",
        }
    }
}

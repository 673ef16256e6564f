//! Source locations within configuration files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A 1-based line in a named file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Character range of this location's line within `text`, trailing
    /// newline excluded and leading indentation skipped.
    ///
    /// Returns `None` when the line is past the end of the text.
    pub fn char_span(&self, text: &str) -> Option<Range<usize>> {
        let index = self.line.checked_sub(1)?;
        let mut offset = 0;
        for (i, line) in text.split('\n').enumerate() {
            let len = line.chars().count();
            if i == index {
                let content = line.trim_end_matches('\r');
                let indent = content.chars().take_while(|c| *c == ' ').count();
                let end = offset + content.chars().count();
                return Some((offset + indent).min(end)..end);
            }
            offset += len + 1;
        }
        None
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SourceLocation::new("a.yaml", 4).to_string(), "a.yaml:4");
    }

    #[test]
    fn test_char_span() {
        let text = "a: 1\n  b: 2\nc: 3";
        assert_eq!(SourceLocation::new("f", 1).char_span(text), Some(0..4));
        assert_eq!(SourceLocation::new("f", 2).char_span(text), Some(7..11));
        assert_eq!(SourceLocation::new("f", 3).char_span(text), Some(12..16));
        assert_eq!(SourceLocation::new("f", 4).char_span(text), None);
        assert_eq!(SourceLocation::new("f", 0).char_span(text), None);
    }

    #[test]
    fn test_char_span_counts_chars_not_bytes() {
        let text = "voice: Светлана\nspeed: 1.0\n";
        assert_eq!(SourceLocation::new("f", 2).char_span(text), Some(16..26));
    }
}

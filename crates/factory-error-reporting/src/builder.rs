//! Builder API for diagnostic messages.

use crate::diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
use crate::source::SourceLocation;

/// Builder for [`DiagnosticMessage`].
///
/// ```
/// use factory_error_reporting::DiagnosticMessageBuilder;
///
/// let msg = DiagnosticMessageBuilder::error("Project config not found")
///     .with_code("CF-2-1")
///     .problem("No configuration file exists for project `leo`")
///     .add_detail("Tried `projects/leo/config.yaml`")
///     .add_hint("Is the project name spelled correctly?")
///     .build();
///
/// assert_eq!(msg.details.len(), 1);
/// assert_eq!(msg.hints.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    message: DiagnosticMessage,
}

impl DiagnosticMessageBuilder {
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            message: DiagnosticMessage::new(kind, title),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    /// Set the error code (`CF-<subsystem>-<n>`).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.message.code = Some(code.into());
        self
    }

    /// Set the problem statement: what went wrong.
    pub fn problem(mut self, problem: impl Into<MessageContent>) -> Self {
        self.message.problem = Some(problem.into());
        self
    }

    /// Add an error detail (✖ bullet).
    pub fn add_detail(self, detail: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Error, detail)
    }

    /// Add an info detail (ℹ bullet).
    pub fn add_info(self, info: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Info, info)
    }

    /// Add a note detail (• bullet).
    pub fn add_note(self, note: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Note, note)
    }

    /// Add a hint. Hints are phrased as questions.
    pub fn add_hint(mut self, hint: impl Into<MessageContent>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.message.location = Some(location);
        self
    }

    pub fn build(self) -> DiagnosticMessage {
        self.message
    }

    fn push_detail(mut self, kind: DetailKind, content: impl Into<MessageContent>) -> Self {
        self.message.details.push(DetailItem {
            kind,
            content: content.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_detail_order() {
        let msg = DiagnosticMessageBuilder::error("t")
            .add_detail("one")
            .add_info("two")
            .add_note("three")
            .build();
        let kinds: Vec<_> = msg.details.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DetailKind::Error, DetailKind::Info, DetailKind::Note]);
        assert_eq!(msg.details[2].content.as_str(), "three");
    }

    #[test]
    fn test_builder_sets_kind_code_and_location() {
        let msg = DiagnosticMessageBuilder::new(DiagnosticKind::Warning, "w")
            .with_code("CF-1-1")
            .with_location(SourceLocation::new("a.yaml", 7))
            .build();
        assert_eq!(msg.kind, DiagnosticKind::Warning);
        assert_eq!(msg.code.as_deref(), Some("CF-1-1"));
        assert_eq!(msg.location, Some(SourceLocation::new("a.yaml", 7)));
        assert!(msg.problem.is_none());
    }
}

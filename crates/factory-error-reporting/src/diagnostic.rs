//! Core diagnostic message types.
//!
//! Messages follow a tidyverse-style structure: a short title, a problem
//! statement, bulleted details, and hints that end with a question mark.

use crate::source::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error that prevents completion
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
}

impl DiagnosticKind {
    fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
        }
    }
}

/// How detail items should be presented (x/i bullet style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailKind {
    /// Error detail (✖ bullet)
    Error,
    /// Info detail (ℹ bullet)
    Info,
    /// Note detail (plain bullet)
    Note,
}

impl DetailKind {
    fn bullet(self) -> &'static str {
        match self {
            DetailKind::Error => "✖",
            DetailKind::Info => "ℹ",
            DetailKind::Note => "•",
        }
    }

    fn name(self) -> &'static str {
        match self {
            DetailKind::Error => "error",
            DetailKind::Info => "info",
            DetailKind::Note => "note",
        }
    }
}

/// The content of a message or detail item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    /// Plain text content
    Plain(String),
    /// Markdown content (backticks mark keys, paths and values)
    Markdown(String),
}

impl MessageContent {
    pub fn as_str(&self) -> &str {
        match self {
            MessageContent::Plain(s) => s,
            MessageContent::Markdown(s) => s,
        }
    }

    /// Convert to JSON value with type information
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        match self {
            MessageContent::Plain(s) => json!({ "type": "plain", "content": s }),
            MessageContent::Markdown(s) => json!({ "type": "markdown", "content": s }),
        }
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        MessageContent::Markdown(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        MessageContent::Markdown(s.to_string())
    }
}

/// A detail bullet in a diagnostic message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    pub kind: DetailKind,
    pub content: MessageContent,
}

/// A diagnostic message.
///
/// Structure:
/// 1. **Code**: optional `CF-<subsystem>-<n>` error code
/// 2. **Title**: brief error message
/// 3. **Kind**: Error, Warning, Info
/// 4. **Problem**: what went wrong
/// 5. **Details**: specific information, one fact per bullet
/// 6. **Hints**: optional guidance for fixing
/// 7. **Location**: optional file and line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub title: String,
    pub kind: DiagnosticKind,
    pub problem: Option<MessageContent>,
    pub details: Vec<DetailItem>,
    pub hints: Vec<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl DiagnosticMessage {
    /// Create a new diagnostic message with just a title and kind.
    ///
    /// Prefer [`DiagnosticMessageBuilder`](crate::DiagnosticMessageBuilder).
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            code: None,
            title: title.into(),
            kind,
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
            location: None,
        }
    }

    /// The problem statement, falling back to the catalog's message for the code.
    pub fn problem_text(&self) -> Option<&str> {
        self.problem.as_ref().map(MessageContent::as_str).or_else(|| {
            self.code
                .as_deref()
                .and_then(crate::catalog::get_error_info)
                .map(|info| info.message_template)
        })
    }

    /// Render as text.
    ///
    /// ```text
    /// Error [CF-2-1]: title
    ///   --> file:line
    /// Problem statement here
    /// ✖ Error detail
    /// ℹ Info detail
    /// ? Hint
    /// ```
    ///
    /// When `source` holds the text of the file the location points into, an
    /// `ariadne` snippet of the offending line replaces the title, location
    /// and problem lines.
    pub fn to_text(&self, source: Option<&str>) -> String {
        let mut result = String::new();

        let snippet = match (&self.location, source) {
            (Some(location), Some(text)) => self.render_ariadne_snippet(location, text),
            _ => None,
        };

        match snippet {
            Some(snippet) => result.push_str(&snippet),
            None => {
                let _ = match &self.code {
                    Some(code) => writeln!(result, "{} [{}]: {}", self.kind.label(), code, self.title),
                    None => writeln!(result, "{}: {}", self.kind.label(), self.title),
                };
                if let Some(location) = &self.location {
                    let _ = writeln!(result, "  --> {location}");
                }
                if let Some(problem) = self.problem_text() {
                    let _ = writeln!(result, "{problem}");
                }
            }
        }

        for detail in &self.details {
            let _ = writeln!(result, "{} {}", detail.kind.bullet(), detail.content.as_str());
        }
        for hint in &self.hints {
            let _ = writeln!(result, "? {}", hint.as_str());
        }

        result
    }

    /// Render as a JSON value. Known codes also carry their catalog subsystem.
    ///
    /// ```
    /// use factory_error_reporting::DiagnosticMessageBuilder;
    ///
    /// let msg = DiagnosticMessageBuilder::error("Something went wrong")
    ///     .with_code("CF-2-1")
    ///     .build();
    /// let json = msg.to_json();
    /// assert_eq!(json["kind"], "error");
    /// assert_eq!(json["title"], "Something went wrong");
    /// assert_eq!(json["subsystem"], "loader");
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        let mut obj = json!({
            "kind": self.kind.label().to_lowercase(),
            "title": self.title,
        });

        if let Some(code) = &self.code {
            obj["code"] = json!(code);
            if let Some(subsystem) = crate::catalog::get_subsystem(code) {
                obj["subsystem"] = json!(subsystem);
            }
        }
        if let Some(problem) = &self.problem {
            obj["problem"] = problem.to_json();
        }
        if !self.details.is_empty() {
            let details: Vec<_> = self
                .details
                .iter()
                .map(|d| json!({ "kind": d.kind.name(), "content": d.content.to_json() }))
                .collect();
            obj["details"] = json!(details);
        }
        if !self.hints.is_empty() {
            let hints: Vec<_> = self.hints.iter().map(MessageContent::to_json).collect();
            obj["hints"] = json!(hints);
        }
        if let Some(location) = &self.location {
            obj["location"] = json!(location);
        }

        obj
    }

    fn render_ariadne_snippet(&self, location: &SourceLocation, text: &str) -> Option<String> {
        use ariadne::{Color, Config, Label, Report, ReportKind, Source};

        let span = location.char_span(text)?;
        let file = location.file.clone();

        let (report_kind, color) = match self.kind {
            DiagnosticKind::Error => (ReportKind::Error, Color::Red),
            DiagnosticKind::Warning => (ReportKind::Warning, Color::Yellow),
            DiagnosticKind::Info => (ReportKind::Advice, Color::Cyan),
        };

        let message = match &self.code {
            Some(code) => format!("[{}] {}", code, self.title),
            None => self.title.clone(),
        };
        let label = self.problem_text().unwrap_or(&self.title).to_string();

        let report = Report::build(report_kind, file.clone(), span.start)
            .with_config(Config::default().with_color(false))
            .with_message(message)
            .with_label(Label::new((file.clone(), span)).with_message(label).with_color(color))
            .finish();

        let mut output = Vec::new();
        report.write((file, Source::from(text)), &mut output).ok()?;
        String::from_utf8(output).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticMessageBuilder;

    #[test]
    fn test_message_content_from_str() {
        let content: MessageContent = "test".into();
        assert_eq!(content.as_str(), "test");
        assert!(matches!(content, MessageContent::Markdown(_)));
    }

    #[test]
    fn test_to_text_without_source() {
        let msg = DiagnosticMessageBuilder::error("Missing required config sections")
            .with_code("CF-3-1")
            .add_detail("`audio` is not defined")
            .add_detail("`video` is not defined")
            .add_info("Sections are looked up in the shared and the project config")
            .add_hint("Add the sections to `config/shared.yaml`?")
            .build();

        insta::assert_snapshot!(msg.to_text(None), @r"
        Error [CF-3-1]: Missing required config sections
        The merged configuration lacks required top-level sections
        ✖ `audio` is not defined
        ✖ `video` is not defined
        ℹ Sections are looked up in the shared and the project config
        ? Add the sections to `config/shared.yaml`?
        ");
    }

    #[test]
    fn test_to_text_shows_location_line() {
        let msg = DiagnosticMessageBuilder::error("Invalid indentation")
            .problem("expected 2 spaces, found 6")
            .with_location(SourceLocation::new("config.yaml", 3))
            .build();
        let text = msg.to_text(None);
        assert!(text.contains("  --> config.yaml:3\n"), "{text}");
        assert!(text.contains("expected 2 spaces, found 6"));
    }

    #[test]
    fn test_to_text_with_source_renders_snippet() {
        let source = "video:\n  fps: 30\n      extra: 1\n";
        let msg = DiagnosticMessageBuilder::error("Invalid indentation")
            .with_code("CF-1-1")
            .problem("expected 2 spaces, found 6")
            .with_location(SourceLocation::new("config.yaml", 3))
            .add_hint("Align the line with its siblings?")
            .build();
        let text = msg.to_text(Some(source));
        assert!(text.contains("[CF-1-1] Invalid indentation"), "{text}");
        assert!(text.contains("extra: 1"), "{text}");
        assert!(text.contains("config.yaml"), "{text}");
        assert!(text.ends_with("? Align the line with its siblings?\n"), "{text}");
    }

    #[test]
    fn test_snippet_falls_back_when_line_out_of_range() {
        let msg = DiagnosticMessageBuilder::error("Bad")
            .with_location(SourceLocation::new("f.yaml", 10))
            .build();
        assert!(msg.to_text(Some("a: 1\n")).starts_with("Error: Bad\n  --> f.yaml:10\n"));
    }

    #[test]
    fn test_to_json() {
        let msg = DiagnosticMessageBuilder::new(DiagnosticKind::Warning, "Tab indentation")
            .with_code("CF-1-1")
            .add_note("tabs are not counted as indentation")
            .with_location(SourceLocation::new("shared.yaml", 2))
            .build();
        insta::assert_json_snapshot!(msg.to_json(), @r#"
        {
          "kind": "warning",
          "title": "Tab indentation",
          "code": "CF-1-1",
          "subsystem": "yaml",
          "details": [
            {
              "kind": "note",
              "content": {
                "type": "markdown",
                "content": "tabs are not counted as indentation"
              }
            }
          ],
          "location": {
            "file": "shared.yaml",
            "line": 2
          }
        }
        "#);
    }

    #[test]
    fn test_to_json_unknown_code_has_no_subsystem() {
        let msg = DiagnosticMessageBuilder::error("Odd").with_code("CF-9-9").build();
        let json = msg.to_json();
        assert_eq!(json["code"], "CF-9-9");
        assert!(json.get("subsystem").is_none());
    }
}

//! Conversion of ConfigError to DiagnosticMessage.

use factory_config::{ConfigError, DocumentKind};
use factory_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder, SourceLocation};

/// Error code for a block parser error.
fn yaml_error_code(error: &factory_yaml::Error) -> &'static str {
    match error {
        factory_yaml::Error::InvalidIndentation { .. } => "CF-1-1",
        factory_yaml::Error::ListItemWithoutKey { .. } => "CF-1-2",
        factory_yaml::Error::InvalidMappingEntry { .. } => "CF-1-3",
        factory_yaml::Error::ExpectedListItem { .. } => "CF-1-4",
        factory_yaml::Error::NestingTooDeep { .. } => "CF-1-5",
    }
}

/// Convert a ConfigError to a DiagnosticMessage.
pub fn config_error_to_diagnostic(error: &ConfigError) -> DiagnosticMessage {
    match error {
        ConfigError::MissingDocument { kind, candidates } => {
            let mut builder = DiagnosticMessageBuilder::error(format!("{} not found", capitalize(&kind.to_string())))
                .with_code("CF-2-1");
            for candidate in candidates {
                builder = builder.add_detail(format!("Tried `{}`", candidate.display()));
            }
            let hint = match kind {
                DocumentKind::Shared => "Is `--root` pointing at the repository root?",
                DocumentKind::Project => "Is the project name spelled as its directory under `projects/`?",
                DocumentKind::ContentPlan => "Has a content plan been generated for this project?",
            };
            builder.add_hint(hint).build()
        }

        ConfigError::Read { path, source } => DiagnosticMessageBuilder::error("Could not read config file")
            .with_code("CF-2-2")
            .problem(source.to_string())
            .add_detail(format!("In file `{}`", path.display()))
            .build(),

        ConfigError::MalformedDocument { path, reason } => {
            DiagnosticMessageBuilder::error("Malformed config document")
                .with_code("CF-2-3")
                .problem(capitalize(reason))
                .add_detail(format!("In file `{}`", path.display()))
                .add_hint("The top level of a config file must be `key: value` entries?")
                .build()
        }

        ConfigError::MalformedBlock { path, source } => {
            let mut builder = DiagnosticMessageBuilder::error(capitalize(source.label()))
                .with_code(yaml_error_code(source))
                .problem(source.to_string())
                .with_location(SourceLocation::new(path.display().to_string(), source.line()));
            if let factory_yaml::Error::NestingTooDeep { limit, .. } = source {
                builder = builder.add_note(format!("At most {limit} levels of nested blocks are accepted"));
            }
            if let Some(hint) = yaml_hint(source) {
                builder = builder.add_hint(hint);
            }
            builder.build()
        }

        ConfigError::InvalidJson { path, source } => DiagnosticMessageBuilder::error("Invalid JSON")
            .with_code("CF-2-4")
            .problem(source.to_string())
            .with_location(SourceLocation::new(path.display().to_string(), source.line()))
            .build(),

        ConfigError::MissingSections { missing } => {
            let mut builder = DiagnosticMessageBuilder::error("Missing required config sections")
                .with_code("CF-3-1");
            for section in missing {
                builder = builder.add_detail(format!("`{section}` is not defined"));
            }
            builder
                .add_info("Sections may come from `config/shared.yaml` or the project config")
                .add_hint("Add the missing sections to `config/shared.yaml`?")
                .build()
        }

        ConfigError::MalformedSections { sections } => {
            let mut builder =
                DiagnosticMessageBuilder::error("Config sections must be mappings").with_code("CF-3-2");
            for section in sections {
                builder = builder.add_detail(format!("`{section}` is not a mapping"));
            }
            builder.build()
        }

        ConfigError::InvalidProjectName { name } => DiagnosticMessageBuilder::error("Invalid project name")
            .with_code("CF-3-3")
            .add_detail(format!("`{name}` is not a single directory name"))
            .build(),

        ConfigError::KeyNotFound { key } => DiagnosticMessageBuilder::error("Key not found")
            .with_code("CF-3-4")
            .add_detail(format!("`{key}` is not set in the merged configuration"))
            .add_hint("Hyphens and underscores are interchangeable in keys; is the path spelled correctly?")
            .build(),
    }
}

fn yaml_hint(error: &factory_yaml::Error) -> Option<&'static str> {
    match error {
        factory_yaml::Error::InvalidIndentation { .. } => {
            Some("Indent nested blocks under a `key:` line that has no value?")
        }
        factory_yaml::Error::ListItemWithoutKey { .. } => {
            Some("Put `- item` lines under a `key:` line, indented deeper?")
        }
        factory_yaml::Error::InvalidMappingEntry { .. } => Some("Did you forget the `:` after the key?"),
        factory_yaml::Error::ExpectedListItem { .. } => None,
        factory_yaml::Error::NestingTooDeep { .. } => {
            Some("Could the deepest blocks be flattened or written as inline `[..]` / `{..}` values?")
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_diagnostic() {
        let error = ConfigError::MissingSections {
            missing: vec!["audio".into(), "video".into()],
        };
        let diagnostic = config_error_to_diagnostic(&error);

        assert_eq!(diagnostic.code.as_deref(), Some("CF-3-1"));
        assert_eq!(diagnostic.details.len(), 2);
        insta::assert_snapshot!(diagnostic.to_text(None), @r"
        Error [CF-3-1]: Missing required config sections
        The merged configuration lacks required top-level sections
        ✖ `audio` is not defined
        ✖ `video` is not defined
        ℹ Sections may come from `config/shared.yaml` or the project config
        ? Add the missing sections to `config/shared.yaml`?
        ");
    }

    #[test]
    fn test_block_error_has_location() {
        let error = ConfigError::MalformedBlock {
            path: "projects/leo/config.yaml".into(),
            source: factory_yaml::Error::InvalidMappingEntry {
                line: 4,
                content: "just text".into(),
            },
        };
        let diagnostic = config_error_to_diagnostic(&error);

        assert_eq!(diagnostic.code.as_deref(), Some("CF-1-3"));
        assert_eq!(
            diagnostic.location,
            Some(SourceLocation::new("projects/leo/config.yaml", 4))
        );
        assert_eq!(diagnostic.hints.len(), 1);
    }

    #[test]
    fn test_nesting_error_diagnostic() {
        let error = ConfigError::MalformedBlock {
            path: "deep.yaml".into(),
            source: factory_yaml::Error::NestingTooDeep {
                line: 130,
                limit: factory_yaml::MAX_DEPTH,
            },
        };
        let diagnostic = config_error_to_diagnostic(&error);

        assert_eq!(diagnostic.code.as_deref(), Some("CF-1-5"));
        assert_eq!(diagnostic.title, "Nesting too deep");
        assert_eq!(diagnostic.location, Some(SourceLocation::new("deep.yaml", 130)));
        assert_eq!(
            diagnostic.details[0].content.as_str(),
            "At most 128 levels of nested blocks are accepted"
        );
        assert_eq!(diagnostic.hints.len(), 1);
        assert!(factory_error_reporting::get_error_info("CF-1-5").is_some());
    }

    #[test]
    fn test_missing_document_lists_candidates() {
        let error = ConfigError::MissingDocument {
            kind: DocumentKind::Project,
            candidates: vec!["p/config.yaml".into(), "p/config.json".into()],
        };
        insta::assert_snapshot!(config_error_to_diagnostic(&error).to_text(None), @r"
        Error [CF-2-1]: Project config not found
        None of the expected configuration files exist
        ✖ Tried `p/config.yaml`
        ✖ Tried `p/config.json`
        ? Is the project name spelled as its directory under `projects/`?
        ");
    }

    #[test]
    fn test_every_code_is_in_catalog() {
        let errors = [
            ConfigError::InvalidProjectName { name: "..".into() },
            ConfigError::KeyNotFound { key: "a.b".into() },
            ConfigError::MalformedSections {
                sections: vec!["audio".into()],
            },
            ConfigError::MalformedDocument {
                path: "x.yaml".into(),
                reason: "document is empty".into(),
            },
        ];
        for error in &errors {
            let code = config_error_to_diagnostic(error).code.unwrap();
            assert!(factory_error_reporting::get_error_info(&code).is_some(), "{code}");
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("invalid indentation"), "Invalid indentation");
        assert_eq!(capitalize(""), "");
    }
}

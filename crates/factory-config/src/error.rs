//! Errors raised while loading and reading configuration.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for factory-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Which document a load step was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// The base layer shared by every project.
    Shared,
    /// The per-project override layer.
    Project,
    /// A project's content plan.
    ContentPlan,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Shared => write!(f, "shared config"),
            DocumentKind::Project => write!(f, "project config"),
            DocumentKind::ContentPlan => write!(f, "content plan"),
        }
    }
}

/// Everything that can make a configuration load fail.
///
/// Loading is all-or-nothing: any of these aborts the load and no partial
/// configuration is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of the candidate files exist.
    #[error("{kind} not found. Expected one of: {}", join_paths(candidates))]
    MissingDocument {
        kind: DocumentKind,
        candidates: Vec<PathBuf>,
    },

    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is empty, or its root is not a mapping.
    #[error("Malformed document {}: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    /// The block parser rejected the document.
    #[error("Malformed block in {}: {source}", path.display())]
    MalformedBlock {
        path: PathBuf,
        source: factory_yaml::Error,
    },

    /// A `.json` document is not valid JSON.
    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Required top-level sections are absent after merging.
    #[error("Missing required config sections: {}", missing.join(", "))]
    MissingSections { missing: Vec<String> },

    /// Required top-level sections are present but not mappings.
    #[error("Config sections must be mappings: {}", sections.join(", "))]
    MalformedSections { sections: Vec<String> },

    /// A project name that cannot name a directory under the projects root.
    #[error("Invalid project name '{name}'")]
    InvalidProjectName { name: String },

    /// Strict lookup of a key that doesn't exist.
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigError {
    /// The file the error is about, when there is exactly one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::MalformedDocument { path, .. }
            | ConfigError::MalformedBlock { path, .. }
            | ConfigError::InvalidJson { path, .. } => Some(path),
            ConfigError::MissingDocument { candidates, .. } if candidates.len() == 1 => {
                candidates.first().map(PathBuf::as_path)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_message_lists_all() {
        let err = ConfigError::MissingSections {
            missing: vec!["audio".into(), "video".into()],
        };
        insta::assert_snapshot!(err.to_string(), @"Missing required config sections: audio, video");
    }

    #[test]
    fn test_missing_document_lists_candidates() {
        let err = ConfigError::MissingDocument {
            kind: DocumentKind::Project,
            candidates: vec!["p/config.yaml".into(), "p/config.json".into()],
        };
        insta::assert_snapshot!(err.to_string(), @"project config not found. Expected one of: p/config.yaml, p/config.json");
        assert!(err.path().is_none());
    }

    #[test]
    fn test_path_for_single_file_errors() {
        let err = ConfigError::MalformedDocument {
            path: "shared.yaml".into(),
            reason: "document is empty".into(),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("shared.yaml")));
    }
}

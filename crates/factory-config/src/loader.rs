//! Locating, reading and layering configuration documents on disk.

use crate::error::{ConfigError, DocumentKind, Result};
use crate::project::ProjectConfig;
use factory_yaml::{Mapping, Node, Scalar};
use std::path::{Path, PathBuf};

/// Environment variable naming the repository root.
pub const ROOT_ENV_VAR: &str = "FACTORY_ROOT";

const DEFAULT_SHARED_FILE: &str = "config/shared.yaml";
const DEFAULT_PROJECTS_DIR: &str = "projects";
const PROJECT_FILES: [&str; 3] = ["config.yaml", "config.yml", "config.json"];
const CONTENT_PLAN_FILE: &str = "content_plan.json";

/// Finds and loads project configurations under a repository root.
///
/// ```no_run
/// use factory_config::ConfigLoader;
///
/// let config = ConfigLoader::new("/srv/factory").load("leo_channel")?;
/// let voice = config.audio().at("engines").at("edge_tts").get_str("voice");
/// # Ok::<(), factory_config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    shared_file: PathBuf,
    projects_dir: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let root = std::env::var_os(ROOT_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }
}

impl ConfigLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            shared_file: PathBuf::from(DEFAULT_SHARED_FILE),
            projects_dir: PathBuf::from(DEFAULT_PROJECTS_DIR),
        }
    }

    /// Use a different shared document. Relative paths resolve against the root.
    pub fn with_shared_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.shared_file = path.into();
        self
    }

    /// Use a different projects directory. Relative paths resolve against the root.
    pub fn with_projects_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.projects_dir = path.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn shared_path(&self) -> PathBuf {
        self.root.join(&self.shared_file)
    }

    pub fn project_dir(&self, project_name: &str) -> PathBuf {
        self.root.join(&self.projects_dir).join(project_name)
    }

    /// Project documents tried in order; the first that exists wins.
    pub fn project_candidates(&self, project_name: &str) -> Vec<PathBuf> {
        let dir = self.project_dir(project_name);
        PROJECT_FILES.iter().map(|file| dir.join(file)).collect()
    }

    /// Load, merge, default and validate the configuration of one project.
    pub fn load(&self, project_name: &str) -> Result<ProjectConfig> {
        check_project_name(project_name)?;

        let shared_path = self.shared_path();
        if !shared_path.is_file() {
            return Err(ConfigError::MissingDocument {
                kind: DocumentKind::Shared,
                candidates: vec![shared_path],
            });
        }
        let shared = read_document(&shared_path)?;

        let candidates = self.project_candidates(project_name);
        let Some(project_path) = candidates.iter().find(|path| path.is_file()) else {
            return Err(ConfigError::MissingDocument {
                kind: DocumentKind::Project,
                candidates,
            });
        };
        let project = read_document(project_path)?;

        let config = ProjectConfig::build(project_name, shared, project)?;
        tracing::info!(
            project = project_name,
            shared = %shared_path.display(),
            overrides = %project_path.display(),
            "loaded project config"
        );
        Ok(config)
    }

    /// Read `projects/<name>/content_plan.json`.
    pub fn load_content_plan(
        &self,
        project_name: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        check_project_name(project_name)?;

        let path = self.project_dir(project_name).join(CONTENT_PLAN_FILE);
        if !path.is_file() {
            return Err(ConfigError::MissingDocument {
                kind: DocumentKind::ContentPlan,
                candidates: vec![path],
            });
        }
        let text = read_text(&path)?;
        match serde_json::from_str(&text) {
            Ok(serde_json::Value::Object(plan)) => Ok(plan),
            Ok(other) => Err(ConfigError::MalformedDocument {
                path,
                reason: format!("root must be an object, found {}", json_kind(&other)),
            }),
            Err(source) => Err(ConfigError::InvalidJson { path, source }),
        }
    }
}

/// Parse one configuration document into a mapping.
///
/// `.json` files go through `serde_json`; anything else through the block
/// parser. Empty documents and non-mapping roots are rejected.
pub fn read_document(path: &Path) -> Result<Mapping> {
    let text = read_text(path)?;
    let node = if is_json(path) {
        if text.trim().is_empty() {
            return Err(empty_document(path));
        }
        serde_json::from_str::<Node>(&text).map_err(|source| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        let lines = factory_yaml::preprocess(&text);
        if lines.is_empty() {
            return Err(empty_document(path));
        }
        factory_yaml::parse_lines(&lines).map_err(|source| ConfigError::MalformedBlock {
            path: path.to_path_buf(),
            source,
        })?
    };

    match node {
        Node::Mapping(map) if map.is_empty() => Err(empty_document(path)),
        Node::Mapping(map) => {
            tracing::debug!(path = %path.display(), keys = map.len(), "read config document");
            Ok(map)
        }
        Node::Scalar(Scalar::Null) => Err(empty_document(path)),
        other => Err(ConfigError::MalformedDocument {
            path: path.to_path_buf(),
            reason: format!("root must be a mapping, found {}", other.kind_name()),
        }),
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn empty_document(path: &Path) -> ConfigError {
    ConfigError::MalformedDocument {
        path: path.to_path_buf(),
        reason: "document is empty".to_string(),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn check_project_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..");
    if invalid {
        return Err(ConfigError::InvalidProjectName {
            name: name.to_string(),
        });
    }
    Ok(())
}

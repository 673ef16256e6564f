//! # factory-config
//!
//! Layered project configuration for Content Factory.
//!
//! A project's effective configuration is built from two documents under the
//! repository root:
//!
//! 1. `config/shared.yaml`, the base layer every project inherits
//! 2. `projects/<name>/config.yaml` (or `.yml` / `.json`), the project layer
//!
//! The project layer is deep-merged over the shared one (mappings merge
//! recursively, everything else is replaced), a handful of defaults are
//! filled in, and the nine required sections are checked. The result is an
//! immutable [`ProjectConfig`] read through [`ConfigNode`] views that accept
//! `edge-tts` and `edge_tts` interchangeably.
//!
//! ```no_run
//! let config = factory_config::load("leo_channel")?;
//! let fps = config.video().get_i64("fps").unwrap_or(30);
//! let models = config
//!     .generation()
//!     .get_list("fallback_models")
//!     .map(|list| list.strings())
//!     .unwrap_or_default();
//! # let _ = (fps, models);
//! # Ok::<(), factory_config::ConfigError>(())
//! ```

mod defaults;
mod error;
mod loader;
mod merge;
mod node;
mod project;
mod validate;

pub use defaults::apply_defaults;
pub use error::{ConfigError, DocumentKind, Result};
pub use loader::{ConfigLoader, ROOT_ENV_VAR, read_document};
pub use merge::deep_merge;
pub use node::{ConfigList, ConfigNode, ConfigValue};
pub use project::ProjectConfig;
pub use validate::{REQUIRED_SECTIONS, validate_sections};

pub use factory_yaml::{Mapping, Node, Scalar};

/// Load a project with the default [`ConfigLoader`] (root from `FACTORY_ROOT`,
/// else the current directory).
pub fn load(project_name: &str) -> Result<ProjectConfig> {
    ConfigLoader::default().load(project_name)
}

/// Load a project's content plan with the default [`ConfigLoader`].
pub fn load_content_plan(
    project_name: &str,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    ConfigLoader::default().load_content_plan(project_name)
}

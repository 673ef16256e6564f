//! The validated, merged configuration handed to pipeline stages.

use crate::defaults::apply_defaults;
use crate::error::Result;
use crate::merge::deep_merge;
use crate::node::ConfigNode;
use crate::validate::validate_sections;
use factory_yaml::Mapping;

/// A project's effective configuration: shared layer, project layer on top,
/// defaults filled in, every required section checked.
///
/// Immutable once built. Section accessors hand out borrowed
/// [`ConfigNode`] views, so one `ProjectConfig` can be shared by reference
/// (it is `Send + Sync`) among any number of readers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    name: String,
    root: Mapping,
}

impl ProjectConfig {
    /// Merge two layers, apply defaults and validate.
    ///
    /// Defaults are applied strictly after the merge, so they never shadow a
    /// value from either layer.
    pub fn build(name: &str, shared: Mapping, project: Mapping) -> Result<Self> {
        let mut merged = deep_merge(shared, project);
        apply_defaults(&mut merged, name);
        Self::from_mapping(name, merged)
    }

    /// Wrap an already-merged tree after validating its sections.
    pub fn from_mapping(name: &str, root: Mapping) -> Result<Self> {
        validate_sections(&root)?;
        Ok(ProjectConfig {
            name: name.to_string(),
            root,
        })
    }

    /// The project name this config was loaded for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The whole merged tree as a node.
    pub fn root(&self) -> ConfigNode<'_> {
        ConfigNode::new(&self.root)
    }

    /// The whole merged tree.
    pub fn raw(&self) -> &Mapping {
        &self.root
    }

    pub fn into_raw(self) -> Mapping {
        self.root
    }

    /// Any top-level section by name; empty if absent.
    pub fn section(&self, name: &str) -> ConfigNode<'_> {
        self.root().at(name)
    }

    pub fn project(&self) -> ConfigNode<'_> {
        self.section("project")
    }

    pub fn content_strategy(&self) -> ConfigNode<'_> {
        self.section("content_strategy")
    }

    pub fn generation(&self) -> ConfigNode<'_> {
        self.section("generation")
    }

    pub fn audio(&self) -> ConfigNode<'_> {
        self.section("audio")
    }

    pub fn video(&self) -> ConfigNode<'_> {
        self.section("video")
    }

    pub fn subtitles(&self) -> ConfigNode<'_> {
        self.section("subtitles")
    }

    pub fn upload(&self) -> ConfigNode<'_> {
        self.section("upload")
    }

    pub fn caching(&self) -> ConfigNode<'_> {
        self.section("caching")
    }

    pub fn monitoring(&self) -> ConfigNode<'_> {
        self.section("monitoring")
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.root().to_json()
    }
}

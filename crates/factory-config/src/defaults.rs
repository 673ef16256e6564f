//! Default values injected after merging.

use crate::node::ConfigNode;
use factory_yaml::{Mapping, Node};

/// Fill in defaults that neither layer set.
///
/// - `project.name`, `project.folder` and `project.id` ← the project name
/// - `generation.fallback_models` and `generation.provider_priority` ← `[]`
/// - `generation.retry_delay_sec` ← `2`
///
/// A key counts as set under any hyphen/underscore spelling. Defaults are only
/// added to sections that exist as mappings; a missing section stays missing
/// so validation reports it.
pub fn apply_defaults(config: &mut Mapping, project_name: &str) {
    if let Some(Node::Mapping(project)) = config.get_mut("project") {
        set_default(project, "project", "name", Node::from(project_name));
        set_default(project, "project", "folder", Node::from(project_name));
        set_default(project, "project", "id", Node::from(project_name));
    }
    if let Some(Node::Mapping(generation)) = config.get_mut("generation") {
        set_default(generation, "generation", "fallback_models", Node::Sequence(Vec::new()));
        set_default(generation, "generation", "provider_priority", Node::Sequence(Vec::new()));
        set_default(generation, "generation", "retry_delay_sec", Node::from(2i64));
    }
}

fn set_default(section: &mut Mapping, section_name: &str, key: &str, value: Node) {
    if ConfigNode::new(section).contains(key) {
        return;
    }
    tracing::debug!(section = section_name, key, "applying default");
    section.insert(key.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_yaml::parse;

    fn tree(text: &str) -> Mapping {
        parse(text).unwrap().into_mapping().unwrap()
    }

    #[test]
    fn test_fills_absent_keys() {
        let mut config = tree("project:\n  name: Demo\ngeneration:\n  model: m\n");
        apply_defaults(&mut config, "demo");
        assert_eq!(
            config,
            tree(
                "project:\n  name: Demo\n  folder: demo\n  id: demo\n\
                 generation:\n  model: m\n  fallback_models: []\n  provider_priority: []\n  retry_delay_sec: 2\n"
            )
        );
    }

    #[test]
    fn test_fills_project_name_when_absent() {
        let mut config = tree("project:\n  language: ru\n");
        apply_defaults(&mut config, "demo");
        assert_eq!(
            config,
            tree("project:\n  language: ru\n  name: demo\n  folder: demo\n  id: demo\n")
        );
    }

    #[test]
    fn test_never_overrides_explicit_values() {
        let mut config = tree(
            "project:\n  folder: custom\ngeneration:\n  retry_delay_sec: 10\n  fallback_models: ['a']\n",
        );
        apply_defaults(&mut config, "demo");
        assert_eq!(config.get("project").and_then(|p| p.get("folder")), Some(&Node::from("custom")));
        assert_eq!(
            config.get("generation").and_then(|g| g.get("retry_delay_sec")),
            Some(&Node::from(10i64))
        );
        assert_eq!(
            config.get("generation").and_then(|g| g.get("fallback_models")),
            Some(&Node::Sequence(vec!["a".into()]))
        );
    }

    #[test]
    fn test_hyphenated_spelling_counts_as_set() {
        let mut config = tree("generation:\n  retry-delay-sec: 7\n");
        apply_defaults(&mut config, "demo");
        let generation = config.get("generation").and_then(Node::as_mapping).unwrap();
        assert!(!generation.contains_key("retry_delay_sec"));
        assert_eq!(generation.get("retry-delay-sec"), Some(&Node::from(7i64)));
    }

    #[test]
    fn test_missing_sections_are_not_created() {
        let mut config = tree("audio:\n  voice: a\n");
        apply_defaults(&mut config, "demo");
        assert!(!config.contains_key("project"));
        assert!(!config.contains_key("generation"));
    }

    #[test]
    fn test_non_mapping_section_left_alone() {
        let mut config = tree("generation: off\n");
        apply_defaults(&mut config, "demo");
        assert_eq!(config.get("generation"), Some(&Node::from("off")));
    }
}

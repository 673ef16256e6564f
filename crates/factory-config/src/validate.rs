//! Required-section validation.

use crate::error::{ConfigError, Result};
use crate::node::{ConfigNode, ConfigValue};
use factory_yaml::Mapping;

/// Top-level sections every project configuration must define.
pub const REQUIRED_SECTIONS: [&str; 9] = [
    "project",
    "content_strategy",
    "generation",
    "audio",
    "video",
    "subtitles",
    "upload",
    "caching",
    "monitoring",
];

/// Check that every required section is present and is a mapping.
///
/// Reports all absent sections in one error rather than stopping at the first.
pub fn validate_sections(config: &Mapping) -> Result<()> {
    let root = ConfigNode::new(config);

    let missing: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|section| !root.contains(section))
        .map(|section| section.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingSections { missing });
    }

    let malformed: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|section| !matches!(root.get(section), Some(ConfigValue::Node(_))))
        .map(|section| section.to_string())
        .collect();
    if !malformed.is_empty() {
        return Err(ConfigError::MalformedSections {
            sections: malformed,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_yaml::{Node, parse};

    fn complete() -> Mapping {
        REQUIRED_SECTIONS
            .iter()
            .map(|s| (s.to_string(), Node::empty_mapping()))
            .collect()
    }

    #[test]
    fn test_complete_config_passes() {
        assert!(validate_sections(&complete()).is_ok());
    }

    #[test]
    fn test_reports_every_missing_section() {
        let config = parse("project:\ngeneration:\n").unwrap().into_mapping().unwrap();
        let err = validate_sections(&config).unwrap_err();
        match err {
            ConfigError::MissingSections { missing } => assert_eq!(
                missing,
                vec![
                    "content_strategy",
                    "audio",
                    "video",
                    "subtitles",
                    "upload",
                    "caching",
                    "monitoring",
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_hyphenated_section_name_counts() {
        let mut config = complete();
        config.shift_remove("content_strategy");
        config.insert("content-strategy".into(), Node::empty_mapping());
        assert!(validate_sections(&config).is_ok());
    }

    #[test]
    fn test_non_mapping_sections_rejected() {
        let mut config = complete();
        config.insert("audio".into(), Node::from("edge"));
        config.insert("video".into(), Node::Sequence(vec![]));
        let err = validate_sections(&config).unwrap_err();
        assert!(
            matches!(err, ConfigError::MalformedSections { ref sections } if sections == &["audio", "video"])
        );
    }
}

//! `factory check <project> [--json]`

use anyhow::Result;
use factory_config::{ConfigLoader, REQUIRED_SECTIONS};
use std::io::Write;

pub fn execute(loader: &ConfigLoader, project: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let config = loader.load(project)?;

    let extra: Vec<&str> = config
        .root()
        .keys()
        .filter(|key| {
            let key = key.replace('-', "_");
            !REQUIRED_SECTIONS.contains(&key.as_str())
        })
        .collect();

    if json {
        let summary = serde_json::json!({
            "valid": true,
            "project": config.name(),
            "shared": loader.shared_path().display().to_string(),
            "required_sections": REQUIRED_SECTIONS.len(),
            "extra_sections": extra,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    writeln!(out, "✓ Configuration valid")?;
    writeln!(out, "  Project: {}", config.name())?;
    writeln!(out, "  Shared: {}", loader.shared_path().display())?;
    writeln!(out, "  Required sections: {}", REQUIRED_SECTIONS.len())?;
    if !extra.is_empty() {
        writeln!(out, "  Extra sections: {}", extra.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output, repo};
    use factory_config::ConfigError;

    #[test]
    fn test_check_valid_project() {
        let dir = repo("project:\n  name: Leo\nanalytics:\n  enabled: no\n");
        let loader = ConfigLoader::new(dir.path());
        let mut buf = Vec::new();
        execute(&loader, "leo", false, &mut buf).unwrap();

        let text = output(buf);
        assert!(text.starts_with("✓ Configuration valid\n  Project: leo\n"), "{text}");
        assert!(text.contains("  Required sections: 9\n"));
        assert!(text.ends_with("  Extra sections: analytics\n"), "{text}");
    }

    #[test]
    fn test_check_json_summary() {
        let dir = repo("project:\n  name: Leo\nanalytics:\n  enabled: no\n");
        let loader = ConfigLoader::new(dir.path());
        let mut buf = Vec::new();
        execute(&loader, "leo", true, &mut buf).unwrap();

        let summary: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(summary["valid"], true);
        assert_eq!(summary["project"], "leo");
        assert_eq!(summary["required_sections"], 9);
        assert_eq!(summary["extra_sections"], serde_json::json!(["analytics"]));
    }

    #[test]
    fn test_check_missing_project_is_config_error() {
        let dir = repo("project:\n  name: Leo\n");
        let loader = ConfigLoader::new(dir.path());
        let err = execute(&loader, "ghost", true, &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingDocument { .. })
        ));
    }
}

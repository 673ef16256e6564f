//! `factory get <project> <dotted.path>`

use anyhow::Result;
use factory_config::{ConfigError, ConfigLoader, ConfigValue};
use std::io::Write;

pub fn execute(loader: &ConfigLoader, project: &str, path: &str, out: &mut impl Write) -> Result<()> {
    let config = loader.load(project)?;

    let keys: Vec<&str> = path.split('.').filter(|k| !k.is_empty()).collect();
    let value = config
        .root()
        .get_path(&keys)
        .ok_or_else(|| ConfigError::KeyNotFound {
            key: path.to_string(),
        })?;

    match value {
        ConfigValue::Scalar(scalar) => writeln!(out, "{scalar}")?,
        other => writeln!(out, "{}", serde_json::to_string_pretty(&other.to_json())?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output, repo};

    fn get(path: &str) -> Result<String> {
        let dir = repo("project:\n  name: Leo\n");
        let loader = ConfigLoader::new(dir.path());
        let mut buf = Vec::new();
        execute(&loader, "leo", path, &mut buf)?;
        Ok(output(buf))
    }

    #[test]
    fn test_get_scalar_with_either_spelling() {
        assert_eq!(get("audio.engines.edge_tts.voice").unwrap(), "ru-RU-SvetlanaNeural\n");
        assert_eq!(get("audio.engines.edge-tts.speed").unwrap(), "1.0\n");
        assert_eq!(get("project.folder").unwrap(), "leo\n");
    }

    #[test]
    fn test_get_container_prints_json() {
        insta::assert_snapshot!(get("video").unwrap(), @r#"
        {
          "fps": 30
        }
        "#);
    }

    #[test]
    fn test_get_missing_key() {
        let err = get("audio.engines.piper").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::KeyNotFound { key }) if key == "audio.engines.piper"
        ));
    }
}

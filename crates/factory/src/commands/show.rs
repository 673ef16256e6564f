//! `factory show <project> [--section S] [--json]`

use anyhow::{Result, bail};
use factory_config::{ConfigLoader, ConfigNode, ConfigValue};
use std::io::Write;

#[derive(Debug)]
pub struct ShowArgs {
    pub project: String,
    pub section: Option<String>,
    pub json: bool,
}

pub fn execute(loader: &ConfigLoader, args: ShowArgs, out: &mut impl Write) -> Result<()> {
    let config = loader.load(&args.project)?;

    let (node, prefix) = match &args.section {
        Some(section) => {
            let root = config.root();
            let (Some(key), Some(ConfigValue::Node(node))) = (root.resolve_key(section), root.get(section))
            else {
                bail!("Section '{}' not found in project '{}'", section, args.project);
            };
            (node, key)
        }
        None => (config.root(), ""),
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&node.to_json())?)?;
    } else {
        write_flat(node, prefix, out)?;
    }
    Ok(())
}

/// One `dotted.key = value` line per leaf. Lists print as inline JSON.
fn write_flat(node: ConfigNode<'_>, prefix: &str, out: &mut impl Write) -> Result<()> {
    for (key, value) in node.iter() {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            ConfigValue::Node(child) if !child.is_empty() => write_flat(child, &path, out)?,
            ConfigValue::Node(_) => writeln!(out, "{path} = {{}}")?,
            ConfigValue::Scalar(scalar) => writeln!(out, "{path} = {scalar}")?,
            ConfigValue::List(_) => writeln!(out, "{path} = {}", value.to_json())?,
        }
    }
    Ok(())
}

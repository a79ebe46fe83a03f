// Command file parsing

use crate::loader::config::LoaderConfig;
use crate::loader::error::{LoaderError, Result};
use crate::loader::types::CommandSet;
use serde::Deserialize;
use serde_yaml::{Deserializer, Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Read and parse one command file
pub fn read_document(path: &Path, config: &LoaderConfig) -> Result<CommandSet> {
    let content = std::fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &content, config)
}

/// Parse command file contents
///
/// Only the first YAML document is read; later ones are ignored. That
/// document is all-or-nothing: any shape error rejects the whole file.
/// `path` is only used for error reporting.
pub fn parse_document(path: &Path, content: &str, config: &LoaderConfig) -> Result<CommandSet> {
    if content.trim().is_empty() {
        debug!(path = %path.display(), "empty command file");
        return Ok(CommandSet::new());
    }

    let Some(document) = Deserializer::from_str(content).next() else {
        return Ok(CommandSet::new());
    };
    let root = Value::deserialize(document).map_err(|source| LoaderError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    let mapping = match root {
        Value::Null => return Ok(CommandSet::new()),
        Value::Mapping(mapping) => mapping,
        _ => return Err(LoaderError::NotAMapping(path.to_path_buf())),
    };

    let set = CommandSet {
        powershell: extract_commands(path, &mapping, &config.ps_key)?,
        cmd: extract_commands(path, &mapping, &config.cmd_key)?,
    };

    debug!(
        path = %path.display(),
        powershell = set.powershell.len(),
        cmd = set.cmd.len(),
        "parsed command file"
    );
    Ok(set)
}

/// Pull the string items out of the sequence under `key`
fn extract_commands(path: &Path, mapping: &Mapping, key: &str) -> Result<Vec<String>> {
    let Some(value) = mapping.get(key) else {
        return Ok(Vec::new());
    };

    let items = value
        .as_sequence()
        .ok_or_else(|| LoaderError::InvalidKeyType {
            path: path.to_path_buf(),
            key: key.to_string(),
        })?;

    Ok(items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_string))
        .collect())
}

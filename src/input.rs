use crate::error::CliError;
use condq::Entry;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

pub fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading structured filter");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            debug!("reading structured filter from stdin");
            let mut content = String::new();
            io::stdin().lock().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Parses the structured form, written either as JSON or as YAML.
pub fn parse_entries(content: &str) -> Result<Vec<Entry>, CliError> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| CliError::Parse(e.to_string()));
    }

    Ok(serde_yaml::from_str(trimmed)?)
}

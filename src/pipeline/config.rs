use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default nesting limit of a template document.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings applied when a template is mapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Default binding of the root page. A `source_key` declared in the
    /// template itself takes precedence.
    pub source_key: Option<String>,
    /// Maximum nesting depth of the template document, counted in JSON
    /// containers. Deeper templates are rejected before mapping starts.
    pub max_depth: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            source_key: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExecutionConfig {
    /// Reads a config from a JSON file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        serde_json::from_str(&source)
            .map_err(|e| PipelineError::Config(format!("Invalid config '{}': {}", path_ref.display(), e)))
    }
}

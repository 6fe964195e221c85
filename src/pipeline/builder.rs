// src/pipeline/builder.rs
use super::config::ExecutionConfig;
use super::document::Document;
use crate::error::PipelineError;
use folio_json_template::JsonParser;
use folio_template_core::CompiledTemplate;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a [`Document`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    template: Option<Value>,
    config: ExecutionConfig,
}

impl DocumentBuilder {
    /// Creates a new `DocumentBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the template from a JSON file.
    pub fn with_template_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let template_source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read template from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.with_template_source(&template_source)
    }

    /// Configures the template from JSON text.
    pub fn with_template_source(self, source: &str) -> Result<Self, PipelineError> {
        let template: Value = serde_json::from_str(source)?;
        Ok(self.with_template_value(template))
    }

    /// Configures the template from an already decoded document.
    pub fn with_template_value(mut self, template: Value) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_config(mut self, config: ExecutionConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the default binding of the root page.
    pub fn with_source_key(mut self, source_key: impl Into<String>) -> Self {
        self.config.source_key = Some(source_key.into());
        self
    }

    /// Consumes the builder, checks the template's nesting and maps it.
    pub fn build(mut self) -> Result<Document, PipelineError> {
        let template = self.template.take().ok_or_else(|| {
            PipelineError::Config(
                "No template has been configured. Use `with_template_file` or `with_template_source`."
                    .to_string(),
            )
        })?;

        let depth = nesting_depth(&template);
        if depth > self.config.max_depth {
            return Err(PipelineError::Config(format!(
                "Template nesting depth {} exceeds the configured maximum of {}",
                depth, self.config.max_depth
            )));
        }

        let source_key = self.config.source_key.as_deref().unwrap_or("");
        let compiled = JsonParser.parse_value(&template, source_key)?;

        let flags = compiled.features();
        if flags.requires_content() {
            log::info!(
                "Template binds runtime content (lists: {}, bindings: {}); {} leaf components.",
                flags.has_lists,
                flags.has_bindings,
                flags.leaf_count
            );
        } else {
            log::info!("Template is static; {} leaf components.", flags.leaf_count);
        }

        Ok(Document::new(Arc::new(compiled)))
    }
}

/// Depth of nested arrays and maps in `value`. Scalars have depth 0.
fn nesting_depth(value: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, 0usize)];
    while let Some((value, depth)) = stack.pop() {
        let children: Box<dyn Iterator<Item = &Value>> = match value {
            Value::Array(items) => Box::new(items.iter()),
            Value::Object(map) => Box::new(map.values()),
            _ => continue,
        };
        max = max.max(depth + 1);
        stack.extend(children.map(|child| (child, depth + 1)));
    }
    max
}

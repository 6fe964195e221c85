// src/pipeline/document.rs
use crate::error::PipelineError;
use folio_idf::Node;
use folio_json_template::{CompiledJsonTemplate, ComponentMapper};
use folio_template_core::{CompiledTemplate, Content, TemplateError, TemplateFlags};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// A mapped template, ready to be generated against content.
///
/// Cloning is cheap and clones share the mapped tree, so one `Document` can
/// serve any number of threads.
#[derive(Debug, Clone)]
pub struct Document {
    template: Arc<CompiledJsonTemplate>,
}

impl Document {
    pub(crate) fn new(template: Arc<CompiledJsonTemplate>) -> Self {
        Self { template }
    }

    /// The root page mapper.
    pub fn page(&self) -> &ComponentMapper {
        self.template.page()
    }

    pub fn features(&self) -> TemplateFlags {
        self.template.features()
    }

    /// Resolves every binding against `content` and expands every list.
    pub fn generate(&self, content: &Content) -> Result<Node, PipelineError> {
        self.template.execute(content).map_err(|e| match e {
            TemplateError::Execution(e) => PipelineError::Mapping(e),
            other => PipelineError::Template(other),
        })
    }

    /// Same as [`generate`](Self::generate), with the content given as JSON
    /// text. The text must hold a map.
    pub fn generate_from_str(&self, content: &str) -> Result<Node, PipelineError> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(content) => self.generate(&content),
            other => Err(PipelineError::InvalidContent(format!(
                "expected a map of content at the top level, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Generates the tree and writes it as pretty-printed JSON.
    pub fn generate_to_writer<W: Write>(&self, content: &Content, writer: W) -> Result<(), PipelineError> {
        let node = self.generate(content)?;
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer_pretty(&mut writer, &node)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, content: &Content, path: P) -> Result<(), PipelineError> {
        let file = File::create(path)?;
        self.generate_to_writer(content, file)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::builder::DocumentBuilder;
    use serde_json::json;

    fn document() -> Document {
        DocumentBuilder::new()
            .with_template_value(json!({
                "rows": [{"cols": [{"component": {"text": {"source_key": "title"}}}]}]
            }))
            .build()
            .unwrap()
    }

    #[test]
    fn test_generate_from_str() {
        let node = document().generate_from_str(r#"{"title": "Report"}"#).unwrap();
        assert_eq!(node.leaves()[0].value(), Some("Report"));
    }

    #[test]
    fn test_generation_errors_are_mapping_errors() {
        let err = document().generate(&Content::new()).unwrap_err();
        let PipelineError::Mapping(mapper_error) = &err else {
            panic!("expected a mapping error, got {:?}", err);
        };
        assert!(mapper_error.is_resolution());
        assert_eq!(mapper_error.path_string(), "rows[0].cols[0].component.text");
    }

    #[test]
    fn test_content_must_be_a_map() {
        let err = document().generate_from_str("[1, 2]").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidContent(_)));
        assert!(err.to_string().contains("got a list"));
    }

    #[test]
    fn test_generate_to_writer_emits_pretty_json() {
        let mut content = Content::new();
        content.insert("title".to_string(), json!("Report"));
        let mut out = Vec::new();
        document().generate_to_writer(&content, &mut out).unwrap();

        let written: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(written["type"], "page");
        assert_eq!(written["rows"][0]["cols"][0]["content"]["value"], "Report");
    }
}

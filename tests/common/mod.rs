#![allow(dead_code)]

pub mod fixtures;

use folio::{Content, Document, DocumentBuilder, Node, PipelineError};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Converts a `json!` map literal into runtime content.
pub fn content(value: Value) -> Content {
    match value {
        Value::Object(map) => map,
        other => panic!("content must be a map, got {}", other),
    }
}

/// Builds a document from a template value with default settings.
pub fn build(template: Value) -> Result<Document, PipelineError> {
    DocumentBuilder::new().with_template_value(template).build()
}

/// Builds and generates in one step.
pub fn generate(template: Value, data: Value) -> Result<Node, PipelineError> {
    build(template)?.generate(&content(data))
}

/// The resolved values of every leaf, in document order.
pub fn leaf_values(node: &Node) -> Vec<String> {
    node.leaves()
        .iter()
        .filter_map(|leaf| leaf.value())
        .map(str::to_string)
        .collect()
}

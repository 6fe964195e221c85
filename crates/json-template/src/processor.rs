// Processor that implements the TemplateParser trait for JSON documents
use crate::error::JsonTemplateError;
use crate::factory::{AbstractFactory, AbstractFactoryMaps};
use crate::mapper::ComponentMapper;
use folio_idf::Node;
use folio_template_core::{CompiledTemplate, Content, TemplateError, TemplateFlags, TemplateParser};
use serde_json::Value;
use std::sync::Arc;

/// JSON document parser
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

/// A mapped JSON document, ready to be generated against any number of
/// content snapshots.
#[derive(Debug, Clone)]
pub struct CompiledJsonTemplate {
    page: ComponentMapper,
    features: TemplateFlags,
}

impl CompiledJsonTemplate {
    /// The root page mapper.
    pub fn page(&self) -> &ComponentMapper {
        &self.page
    }
}

impl CompiledTemplate for CompiledJsonTemplate {
    fn execute(&self, content: &Content) -> Result<Node, TemplateError> {
        self.page.generate(content).map_err(TemplateError::Execution)
    }

    fn features(&self) -> TemplateFlags {
        self.features
    }
}

impl JsonParser {
    /// Maps an already decoded document.
    pub fn parse_value(&self, document: &Value, source_key: &str) -> Result<CompiledJsonTemplate, JsonTemplateError> {
        let page = AbstractFactoryMaps::new().new_page(document, source_key)?;
        let features = detect_features(&page);
        log::debug!(
            "Mapped document: {} leaves, lists: {}, bindings: {}",
            features.leaf_count,
            features.has_lists,
            features.has_bindings
        );
        Ok(CompiledJsonTemplate { page, features })
    }

    /// Decodes JSON text and maps it.
    pub fn parse_str(&self, template_source: &str, source_key: &str) -> Result<CompiledJsonTemplate, JsonTemplateError> {
        let document: Value = serde_json::from_str(template_source)?;
        self.parse_value(&document, source_key)
    }
}

impl TemplateParser for JsonParser {
    fn parse(&self, template_source: &str, source_key: &str) -> Result<Arc<dyn CompiledTemplate>, TemplateError> {
        Ok(Arc::new(self.parse_str(template_source, source_key)?))
    }
}

/// Detect template features by walking the mapped tree
fn detect_features(root: &ComponentMapper) -> TemplateFlags {
    let mut flags = TemplateFlags::default();
    scan_for_features(root, &mut flags);
    flags
}

fn scan_for_features(mapper: &ComponentMapper, flags: &mut TemplateFlags) {
    if mapper.source_key().is_some() {
        flags.has_bindings = true;
    }
    if let ComponentMapper::List(_) = mapper {
        flags.has_lists = true;
    }
    if mapper.is_leaf() {
        flags.leaf_count += 1;
    }
    for child in mapper.children() {
        scan_for_features(child, flags);
    }
}

use super::{parse_props, require_value};
use folio_idf::Node;
use folio_props::RectProps;
use folio_template_core::{MapperError, Scope, fields, resolve_value};
use serde_json::Value;

const COMPONENT: &str = "image";

/// An image. The value is the image source (a path or an encoded payload);
/// loading it is left to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    source_key: String,
    value: String,
    props: RectProps,
}

impl Image {
    pub fn new(document: &Value) -> Result<Self, MapperError> {
        let mut image = Image::default();
        image.add_fields(document)?;
        image.validate_fields()?;
        Ok(image)
    }

    fn add_fields(&mut self, document: &Value) -> Result<(), MapperError> {
        for (field, value) in fields::as_map(COMPONENT, document)? {
            match field.as_str() {
                "source_key" => self.source_key = fields::string(COMPONENT, field, value)?,
                "value" => self.value = fields::string(COMPONENT, field, value)?,
                "props" => self.props = parse_props(value, RectProps::from_value)?,
                _ => return Err(MapperError::unknown_field(COMPONENT, field.as_str())),
            }
        }
        Ok(())
    }

    fn validate_fields(&self) -> Result<(), MapperError> {
        require_value(COMPONENT, &self.value, &self.source_key)
    }

    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn props(&self) -> &RectProps {
        &self.props
    }

    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        Ok(Node::Image {
            source: resolve_value(COMPONENT, &self.value, &self.source_key, scope)?,
            props: self.props.clone(),
        })
    }
}

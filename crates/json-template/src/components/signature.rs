use super::{parse_props, require_value};
use folio_idf::Node;
use folio_props::SignatureProps;
use folio_template_core::{MapperError, Scope, fields, resolve_value};
use serde_json::Value;

const COMPONENT: &str = "signature";

/// A signing line with a label underneath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    source_key: String,
    value: String,
    props: SignatureProps,
}

impl Signature {
    pub fn new(document: &Value) -> Result<Self, MapperError> {
        let mut signature = Signature::default();
        signature.add_fields(document)?;
        signature.validate_fields()?;
        Ok(signature)
    }

    fn add_fields(&mut self, document: &Value) -> Result<(), MapperError> {
        for (field, value) in fields::as_map(COMPONENT, document)? {
            match field.as_str() {
                "source_key" => self.source_key = fields::string(COMPONENT, field, value)?,
                "value" => self.value = fields::string(COMPONENT, field, value)?,
                "props" => self.props = parse_props(value, SignatureProps::from_value)?,
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

    pub fn props(&self) -> &SignatureProps {
        &self.props
    }

    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        Ok(Node::Signature {
            label: resolve_value(COMPONENT, &self.value, &self.source_key, scope)?,
            props: self.props.clone(),
        })
    }
}

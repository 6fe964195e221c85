//! Barcode, matrix code and QR code leaves.
//!
//! The three share one schema (`source_key`, `value`, `props`) and differ in
//! their props: a barcode also chooses its symbology and proportion.

use super::{parse_props, require_value};
use folio_idf::Node;
use folio_props::{BarcodeProps, PropsError, RectProps};
use folio_template_core::{MapperError, Scope, fields, resolve_value};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
struct CodeFields<P> {
    source_key: String,
    value: String,
    props: P,
}

impl<P: Default> CodeFields<P> {
    fn parse(
        component: &'static str,
        document: &Value,
        props: fn(&Value) -> Result<P, PropsError>,
    ) -> Result<Self, MapperError> {
        let mut code = CodeFields::default();
        for (field, value) in fields::as_map(component, document)? {
            match field.as_str() {
                "source_key" => code.source_key = fields::string(component, field, value)?,
                "value" => code.value = fields::string(component, field, value)?,
                "props" => code.props = parse_props(value, props)?,
                _ => return Err(MapperError::unknown_field(component, field.as_str())),
            }
        }
        require_value(component, &code.value, &code.source_key)?;
        Ok(code)
    }

    fn resolve(&self, component: &'static str, scope: &Scope<'_>) -> Result<String, MapperError> {
        resolve_value(component, &self.value, &self.source_key, scope)
    }
}

/// A one-dimensional barcode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Barcode(CodeFields<BarcodeProps>);

impl Barcode {
    const COMPONENT: &'static str = "barcode";

    pub fn new(document: &Value) -> Result<Self, MapperError> {
        CodeFields::parse(Self::COMPONENT, document, BarcodeProps::from_value).map(Barcode)
    }

    pub fn source_key(&self) -> &str {
        &self.0.source_key
    }

    pub fn value(&self) -> &str {
        &self.0.value
    }

    pub fn props(&self) -> &BarcodeProps {
        &self.0.props
    }

    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        Ok(Node::Barcode {
            code: self.0.resolve(Self::COMPONENT, scope)?,
            props: self.0.props.clone(),
        })
    }
}

/// A Data Matrix code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrixcode(CodeFields<RectProps>);

impl Matrixcode {
    const COMPONENT: &'static str = "matrixcode";

    pub fn new(document: &Value) -> Result<Self, MapperError> {
        CodeFields::parse(Self::COMPONENT, document, RectProps::from_value).map(Matrixcode)
    }

    pub fn source_key(&self) -> &str {
        &self.0.source_key
    }

    pub fn value(&self) -> &str {
        &self.0.value
    }

    pub fn props(&self) -> &RectProps {
        &self.0.props
    }

    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        Ok(Node::Matrixcode {
            code: self.0.resolve(Self::COMPONENT, scope)?,
            props: self.0.props.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Qrcode(CodeFields<RectProps>);

impl Qrcode {
    const COMPONENT: &'static str = "qrcode";

    pub fn new(document: &Value) -> Result<Self, MapperError> {
        CodeFields::parse(Self::COMPONENT, document, RectProps::from_value).map(Qrcode)
    }

    pub fn source_key(&self) -> &str {
        &self.0.source_key
    }

    pub fn value(&self) -> &str {
        &self.0.value
    }

    pub fn props(&self) -> &RectProps {
        &self.0.props
    }

    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        Ok(Node::Qrcode {
            code: self.0.resolve(Self::COMPONENT, scope)?,
            props: self.0.props.clone(),
        })
    }
}

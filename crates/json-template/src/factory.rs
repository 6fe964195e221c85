//! The dispatch hub handed to structural components.

use crate::components::{
    Barcode, Col, Image, Line, List, Matrixcode, Page, Qrcode, Row, Signature, Text,
};
use crate::mapper::ComponentMapper;
use folio_template_core::{GenerateComponent, MapperError};
use serde_json::Value;

/// Builds any component kind from its document fragment.
///
/// Structural components receive the hub by reference and use it to build
/// their children, so they never name the leaf types directly.
pub trait AbstractFactory: Send + Sync {
    fn new_page(&self, document: &Value, source_key: &str) -> Result<ComponentMapper, MapperError>;
    fn new_row(&self, document: &Value, source_key: &str) -> Result<ComponentMapper, MapperError>;
    fn new_col(&self, document: &Value) -> Result<ComponentMapper, MapperError>;
    fn new_list(
        &self,
        document: &Value,
        source_key: &str,
        generate: GenerateComponent,
    ) -> Result<ComponentMapper, MapperError>;
    fn new_barcode(&self, document: &Value) -> Result<ComponentMapper, MapperError>;
    fn new_matrixcode(&self, document: &Value) -> Result<ComponentMapper, MapperError>;
    fn new_qrcode(&self, document: &Value) -> Result<ComponentMapper, MapperError>;
    fn new_image(&self, document: &Value) -> Result<ComponentMapper, MapperError>;
    fn new_line(&self, document: &Value) -> Result<ComponentMapper, MapperError>;
    fn new_signature(&self, document: &Value) -> Result<ComponentMapper, MapperError>;
    fn new_text(&self, document: &Value) -> Result<ComponentMapper, MapperError>;
}

/// The stateless hub used in production. It only wraps the per-type
/// constructors and passes their errors through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbstractFactoryMaps;

impl AbstractFactoryMaps {
    pub fn new() -> Self {
        Self
    }
}

impl AbstractFactory for AbstractFactoryMaps {
    fn new_page(&self, document: &Value, source_key: &str) -> Result<ComponentMapper, MapperError> {
        Page::new(document, source_key, self).map(ComponentMapper::Page)
    }

    fn new_row(&self, document: &Value, source_key: &str) -> Result<ComponentMapper, MapperError> {
        Row::new(document, source_key, self).map(ComponentMapper::Row)
    }

    fn new_col(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        Col::new(document, self).map(ComponentMapper::Col)
    }

    fn new_list(
        &self,
        document: &Value,
        source_key: &str,
        generate: GenerateComponent,
    ) -> Result<ComponentMapper, MapperError> {
        List::new(document, source_key, generate).map(ComponentMapper::List)
    }

    fn new_barcode(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        Barcode::new(document).map(ComponentMapper::Barcode)
    }

    fn new_matrixcode(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        Matrixcode::new(document).map(ComponentMapper::Matrixcode)
    }

    fn new_qrcode(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        Qrcode::new(document).map(ComponentMapper::Qrcode)
    }

    fn new_image(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        Image::new(document).map(ComponentMapper::Image)
    }

    fn new_line(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        Line::new(document).map(ComponentMapper::Line)
    }

    fn new_signature(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        Signature::new(document).map(ComponentMapper::Signature)
    }

    fn new_text(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        Text::new(document).map(ComponentMapper::Text)
    }
}

//! Helpers shared by the unit tests of this crate.

use crate::components::{
    Barcode, Col, Image, Line, List, Matrixcode, Page, Qrcode, Row, Signature, Text,
};
use crate::factory::AbstractFactory;
use crate::mapper::ComponentMapper;
use folio_template_core::{Content, GenerateComponent, MapperError};
use serde_json::Value;
use std::sync::Mutex;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn content(value: Value) -> Content {
    match value {
        Value::Object(map) => map,
        other => panic!("test content must be a map, got {}", other),
    }
}

/// A hub that records every operation it is asked for, in call order, and can
/// be told to fail one component kind. Structural children recurse through it.
pub(crate) struct RecordingFactory {
    calls: Mutex<Vec<&'static str>>,
    fail_on: Option<&'static str>,
}

impl RecordingFactory {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    pub(crate) fn failing_on(kind: &'static str) -> Self {
        Self {
            fail_on: Some(kind),
            ..Self::new()
        }
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, kind: &'static str) -> Result<(), MapperError> {
        self.calls.lock().unwrap().push(kind);
        match self.fail_on {
            Some(failing) if failing == kind => Err(MapperError::validation(kind, "injected failure")),
            _ => Ok(()),
        }
    }
}

impl AbstractFactory for RecordingFactory {
    fn new_page(&self, document: &Value, source_key: &str) -> Result<ComponentMapper, MapperError> {
        self.record("page")?;
        Page::new(document, source_key, self).map(ComponentMapper::Page)
    }

    fn new_row(&self, document: &Value, source_key: &str) -> Result<ComponentMapper, MapperError> {
        self.record("row")?;
        Row::new(document, source_key, self).map(ComponentMapper::Row)
    }

    fn new_col(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        self.record("col")?;
        Col::new(document, self).map(ComponentMapper::Col)
    }

    fn new_list(
        &self,
        document: &Value,
        source_key: &str,
        generate: GenerateComponent,
    ) -> Result<ComponentMapper, MapperError> {
        self.record("list")?;
        List::new(document, source_key, generate).map(ComponentMapper::List)
    }

    fn new_barcode(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        self.record("barcode")?;
        Barcode::new(document).map(ComponentMapper::Barcode)
    }

    fn new_matrixcode(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        self.record("matrixcode")?;
        Matrixcode::new(document).map(ComponentMapper::Matrixcode)
    }

    fn new_qrcode(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        self.record("qrcode")?;
        Qrcode::new(document).map(ComponentMapper::Qrcode)
    }

    fn new_image(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        self.record("image")?;
        Image::new(document).map(ComponentMapper::Image)
    }

    fn new_line(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        self.record("line")?;
        Line::new(document).map(ComponentMapper::Line)
    }

    fn new_signature(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        self.record("signature")?;
        Signature::new(document).map(ComponentMapper::Signature)
    }

    fn new_text(&self, document: &Value) -> Result<ComponentMapper, MapperError> {
        self.record("text")?;
        Text::new(document).map(ComponentMapper::Text)
    }
}

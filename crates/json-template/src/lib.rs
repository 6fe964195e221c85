//! JSON document mapping for folio.
//!
//! This crate turns an untyped document description (a `serde_json::Value`)
//! into a validated tree of [`ComponentMapper`]s. Construction goes through the
//! [`AbstractFactory`] hub: structural components (page, row, col, list) call
//! back into the hub to build their children, leaf components check their
//! fields against a closed schema. The resulting tree is immutable and is
//! turned into a renderable [`folio_idf::Node`] tree by `generate` once runtime
//! content is known.

pub mod components;
pub mod error;
pub mod factory;
pub mod mapper;
pub mod processor;

#[cfg(test)]
pub(crate) mod test_support;

pub use components::{
    Barcode, Col, Image, Line, List, Matrixcode, Page, Qrcode, Row, Signature, Text,
};
pub use error::JsonTemplateError;
pub use factory::{AbstractFactory, AbstractFactoryMaps};
pub use mapper::ComponentMapper;
pub use processor::{CompiledJsonTemplate, JsonParser};

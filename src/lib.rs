//! Data-first document templates.
//!
//! A template is a JSON description of a page: rows of columns, each column
//! holding one component (text, image, line, signature, barcode, matrix code,
//! QR code, a nested row, or a list repeated per content item). Building a
//! [`Document`] maps and validates the template once; [`Document::generate`]
//! then resolves it against runtime content into a renderable
//! [`Node`](folio_idf::Node) tree.
//!
//! ```no_run
//! use folio::DocumentBuilder;
//!
//! let document = DocumentBuilder::new()
//!     .with_template_source(r#"{"rows": [{"cols": [{"component": {"text": {"source_key": "title"}}}]}]}"#)?
//!     .build()?;
//! let tree = document.generate_from_str(r#"{"title": "Invoice"}"#)?;
//! # Ok::<(), folio::PipelineError>(())
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DEFAULT_MAX_DEPTH, Document, DocumentBuilder, ExecutionConfig};

pub use folio_idf::Node;
pub use folio_json_template::{AbstractFactory, AbstractFactoryMaps, ComponentMapper, JsonParser};
pub use folio_template_core::{
    Content, GenerateComponent, MapperError, MapperErrorKind, PathSegment, Scope, TemplateFlags, generator,
};

//! Core abstractions for folio document templates
//!
//! This crate provides the foundational types shared by the component mappers
//! and the integration layer. It defines the contract between a template
//! parser (which turns an untyped document description into a validated
//! component tree) and the generation step that resolves runtime content.
//!
//! ## Key Abstractions
//!
//! - **`MapperError`**: the error taxonomy, with the path to the failing field
//! - **`Scope`** / **`Content`**: runtime content and how it is looked up
//! - **`GenerateComponent`**: a stored, re-entrant per-item generator
//! - **`CompiledTemplate`** / **`TemplateParser`**: the parse/execute seam
//! - **`TemplateFlags`**: features detected while mapping

pub mod content;
pub mod error;
pub mod fields;

pub use content::{Content, Scope, resolve_value};
pub use error::{MapperError, MapperErrorKind, PathSegment};

use folio_idf::Node;
use std::sync::Arc;
use thiserror::Error;

/// Produces one subtree for one content item. Held by lists and invoked only
/// at generate time, once per item; must not depend on anything but its input.
pub type GenerateComponent = Arc<dyn Fn(&Scope<'_>) -> Result<Node, MapperError> + Send + Sync>;

/// Wraps a closure as a [`GenerateComponent`].
pub fn generator<F>(f: F) -> GenerateComponent
where
    F: Fn(&Scope<'_>) -> Result<Node, MapperError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Errors that can occur during template processing
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template parsing failed: {0}")]
    ParseError(String),

    #[error("Template mapping failed: {0}")]
    Mapping(#[from] MapperError),

    #[error("Template execution failed: {0}")]
    Execution(MapperError),
}

impl TemplateError {
    /// The underlying mapper error, if any.
    pub fn mapper_error(&self) -> Option<&MapperError> {
        match self {
            TemplateError::Mapping(e) | TemplateError::Execution(e) => Some(e),
            TemplateError::ParseError(_) => None,
        }
    }
}

/// A struct to report features found while mapping a template.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFlags {
    /// True if the template contains at least one list.
    pub has_lists: bool,
    /// True if any component reads its value from runtime content.
    pub has_bindings: bool,
    /// Number of leaf components declared in the template (list templates count once).
    pub leaf_count: usize,
}

impl TemplateFlags {
    /// True if the template cannot be generated without runtime content.
    pub fn requires_content(&self) -> bool {
        self.has_lists || self.has_bindings
    }
}

/// A reusable, content-agnostic, mapped template.
pub trait CompiledTemplate: Send + Sync {
    /// Generates the renderable tree for one content snapshot.
    fn execute(&self, content: &Content) -> Result<Node, TemplateError>;

    /// Returns a summary of features detected in this template.
    fn features(&self) -> TemplateFlags;
}

/// A parser responsible for mapping a template source into a `CompiledTemplate`.
pub trait TemplateParser {
    /// Parses a template source string. `source_key` is the default binding of the root page.
    fn parse(&self, template_source: &str, source_key: &str) -> Result<Arc<dyn CompiledTemplate>, TemplateError>;
}

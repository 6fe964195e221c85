use crate::components::{
    Barcode, Col, Image, Line, List, Matrixcode, Page, Qrcode, Row, Signature, Text,
};
use folio_idf::Node;
use folio_template_core::{Content, MapperError, Scope};

/// A validated, immutable component produced by the [`AbstractFactory`](crate::AbstractFactory).
#[derive(Debug, Clone)]
pub enum ComponentMapper {
    Page(Page),
    Row(Row),
    Col(Col),
    List(List),
    Text(Text),
    Image(Image),
    Line(Line),
    Signature(Signature),
    Barcode(Barcode),
    Matrixcode(Matrixcode),
    Qrcode(Qrcode),
}

impl ComponentMapper {
    /// Returns a string identifier for the component type.
    pub fn kind(&self) -> &'static str {
        match self {
            ComponentMapper::Page(_) => "page",
            ComponentMapper::Row(_) => "row",
            ComponentMapper::Col(_) => "col",
            ComponentMapper::List(_) => "list",
            ComponentMapper::Text(_) => "text",
            ComponentMapper::Image(_) => "image",
            ComponentMapper::Line(_) => "line",
            ComponentMapper::Signature(_) => "signature",
            ComponentMapper::Barcode(_) => "barcode",
            ComponentMapper::Matrixcode(_) => "matrixcode",
            ComponentMapper::Qrcode(_) => "qrcode",
        }
    }

    /// The key this component binds to, if one was declared.
    pub fn source_key(&self) -> Option<&str> {
        let key = match self {
            ComponentMapper::Page(c) => c.source_key(),
            ComponentMapper::Row(c) => c.source_key(),
            ComponentMapper::List(c) => c.source_key(),
            ComponentMapper::Text(c) => c.source_key(),
            ComponentMapper::Image(c) => c.source_key(),
            ComponentMapper::Signature(c) => c.source_key(),
            ComponentMapper::Barcode(c) => c.source_key(),
            ComponentMapper::Matrixcode(c) => c.source_key(),
            ComponentMapper::Qrcode(c) => c.source_key(),
            ComponentMapper::Line(c) => c.source_key(),
            ComponentMapper::Col(_) => "",
        };
        (!key.is_empty()).then_some(key)
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(
            self,
            ComponentMapper::Page(_)
                | ComponentMapper::Row(_)
                | ComponentMapper::Col(_)
                | ComponentMapper::List(_)
        )
    }

    /// The mapped children of a structural component. For a list this is its
    /// item template, when it was built from one.
    pub fn children(&self) -> Vec<&ComponentMapper> {
        match self {
            ComponentMapper::Page(page) => page.rows().iter().collect(),
            ComponentMapper::Row(row) => row.cols().iter().collect(),
            ComponentMapper::Col(col) => col.component().into_iter().collect(),
            ComponentMapper::List(list) => list.template().into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Resolves every source key against `content` and expands every list.
    pub fn generate(&self, content: &Content) -> Result<Node, MapperError> {
        self.generate_in(&Scope::root(content))
    }

    /// Same as [`generate`](Self::generate), against an existing scope.
    pub fn generate_in(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        match self {
            ComponentMapper::Page(c) => c.generate(scope),
            ComponentMapper::Row(c) => c.generate(scope),
            ComponentMapper::Col(c) => c.generate(scope),
            ComponentMapper::List(c) => c.generate(scope),
            ComponentMapper::Text(c) => c.generate(scope),
            ComponentMapper::Image(c) => c.generate(scope),
            ComponentMapper::Line(c) => c.generate(scope),
            ComponentMapper::Signature(c) => c.generate(scope),
            ComponentMapper::Barcode(c) => c.generate(scope),
            ComponentMapper::Matrixcode(c) => c.generate(scope),
            ComponentMapper::Qrcode(c) => c.generate(scope),
        }
    }
}

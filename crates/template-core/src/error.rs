use folio_props::PropsError;
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// One step of the path from the document root to a failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// What went wrong, independent of where.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapperErrorKind {
    /// The fragment is not the expected container type.
    #[error("ensure {component} can be converted to {expected}")]
    Shape {
        component: &'static str,
        expected: &'static str,
    },

    /// A field name outside the component's closed schema.
    #[error("the field {field} present in the {component} cannot be mapped to any valid field")]
    UnknownField { component: &'static str, field: String },

    /// A known field holding a value of the wrong shape.
    #[error("{field} cannot be converted to {expected}")]
    FieldType {
        component: &'static str,
        field: String,
        expected: &'static str,
    },

    /// A well-typed but semantically incomplete component.
    #[error("{message}")]
    Validation { component: &'static str, message: String },

    /// A source key that could not be resolved against the runtime content.
    #[error("source key '{key}' of the {component} could not be resolved: {reason}")]
    Resolution {
        component: &'static str,
        key: String,
        reason: String,
    },
}

impl MapperErrorKind {
    /// The component type that raised the error.
    pub fn component(&self) -> &'static str {
        match self {
            MapperErrorKind::Shape { component, .. }
            | MapperErrorKind::UnknownField { component, .. }
            | MapperErrorKind::FieldType { component, .. }
            | MapperErrorKind::Validation { component, .. }
            | MapperErrorKind::Resolution { component, .. } => component,
        }
    }
}

/// An error raised while mapping or generating a component, carrying the
/// path from the root of the call to the offending field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{prefix}{kind}", prefix = path_prefix(.path))]
pub struct MapperError {
    path: Vec<PathSegment>,
    kind: MapperErrorKind,
}

fn path_prefix(path: &[PathSegment]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{}: ", render_path(path))
    }
}

fn render_path(path: &[PathSegment]) -> String {
    path.iter()
        .enumerate()
        .map(|(i, segment)| match segment {
            PathSegment::Field(_) if i > 0 => format!(".{}", segment),
            _ => segment.to_string(),
        })
        .join("")
}

impl MapperError {
    pub fn shape(component: &'static str, expected: &'static str) -> Self {
        MapperErrorKind::Shape { component, expected }.into()
    }

    pub fn unknown_field(component: &'static str, field: impl Into<String>) -> Self {
        MapperErrorKind::UnknownField {
            component,
            field: field.into(),
        }
        .into()
    }

    pub fn field_type(component: &'static str, field: impl Into<String>, expected: &'static str) -> Self {
        MapperErrorKind::FieldType {
            component,
            field: field.into(),
            expected,
        }
        .into()
    }

    pub fn validation(component: &'static str, message: impl Into<String>) -> Self {
        MapperErrorKind::Validation {
            component,
            message: message.into(),
        }
        .into()
    }

    pub fn resolution(component: &'static str, key: impl Into<String>, reason: impl Into<String>) -> Self {
        MapperErrorKind::Resolution {
            component,
            key: key.into(),
            reason: reason.into(),
        }
        .into()
    }

    /// Prefixes the path with a named field.
    pub fn at_field(mut self, name: impl Into<String>) -> Self {
        self.path.insert(0, PathSegment::Field(name.into()));
        self
    }

    /// Prefixes the path with a sequence position.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.insert(0, PathSegment::Index(index));
        self
    }

    /// Prefixes the path with `field[index]`.
    pub fn at(self, field: impl Into<String>, index: usize) -> Self {
        self.at_index(index).at_field(field)
    }

    pub fn kind(&self) -> &MapperErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// The path rendered as `rows[0].cols[1].component.text`.
    pub fn path_string(&self) -> String {
        render_path(&self.path)
    }

    pub fn is_shape(&self) -> bool {
        matches!(self.kind, MapperErrorKind::Shape { .. })
    }

    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind, MapperErrorKind::UnknownField { .. })
    }

    pub fn is_field_type(&self) -> bool {
        matches!(self.kind, MapperErrorKind::FieldType { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.kind, MapperErrorKind::Validation { .. })
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self.kind, MapperErrorKind::Resolution { .. })
    }
}

impl From<MapperErrorKind> for MapperError {
    fn from(kind: MapperErrorKind) -> Self {
        Self { path: Vec::new(), kind }
    }
}

/// Props errors keep their taxonomy; the caller adds the `props` path segment.
impl From<PropsError> for MapperError {
    fn from(err: PropsError) -> Self {
        match err {
            PropsError::NotAMap(props) => MapperError::shape(props, "a map"),
            PropsError::UnknownField { props, field } => MapperError::unknown_field(props, field),
            PropsError::FieldType { props, field, expected } => {
                MapperError::field_type(props, field, expected)
            }
            PropsError::InvalidValue { props, field, message } => {
                MapperError::validation(props, format!("invalid {}: {}", field, message))
            }
        }
    }
}

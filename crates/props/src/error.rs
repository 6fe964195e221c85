use thiserror::Error;

/// Errors raised while reading a `props` map.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    #[error("ensure {0} can be converted to a map")]
    NotAMap(&'static str),

    #[error("the field {field} present in the {props} cannot be mapped to any valid field")]
    UnknownField { props: &'static str, field: String },

    #[error("{field} in the {props} cannot be converted to {expected}")]
    FieldType {
        props: &'static str,
        field: String,
        expected: &'static str,
    },

    #[error("invalid {field} in the {props}: {message}")]
    InvalidValue {
        props: &'static str,
        field: String,
        message: String,
    },
}

impl PropsError {
    /// The offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            PropsError::NotAMap(_) => None,
            PropsError::UnknownField { field, .. }
            | PropsError::FieldType { field, .. }
            | PropsError::InvalidValue { field, .. } => Some(field),
        }
    }
}

//! Typed readers shared by the props parsers.

use crate::error::PropsError;
use folio_types::Color;
use serde_json::{Map, Value};

/// Reads the fields of one props map, tagging every error with the props name.
pub(crate) struct Reader {
    props: &'static str,
}

impl Reader {
    pub(crate) fn new(props: &'static str) -> Self {
        Self { props }
    }

    pub(crate) fn object<'v>(&self, value: &'v Value) -> Result<&'v Map<String, Value>, PropsError> {
        value.as_object().ok_or(PropsError::NotAMap(self.props))
    }

    pub(crate) fn unknown(&self, field: &str) -> PropsError {
        PropsError::UnknownField {
            props: self.props,
            field: field.to_string(),
        }
    }

    fn field_type(&self, field: &str, expected: &'static str) -> PropsError {
        PropsError::FieldType {
            props: self.props,
            field: field.to_string(),
            expected,
        }
    }

    fn invalid(&self, field: &str, message: impl Into<String>) -> PropsError {
        PropsError::InvalidValue {
            props: self.props,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn string(&self, field: &str, value: &Value) -> Result<String, PropsError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.field_type(field, "a string"))
    }

    pub(crate) fn boolean(&self, field: &str, value: &Value) -> Result<bool, PropsError> {
        value.as_bool().ok_or_else(|| self.field_type(field, "a boolean"))
    }

    pub(crate) fn number(&self, field: &str, value: &Value) -> Result<f64, PropsError> {
        value.as_f64().ok_or_else(|| self.field_type(field, "a number"))
    }

    pub(crate) fn non_negative(&self, field: &str, value: &Value) -> Result<f64, PropsError> {
        let n = self.number(field, value)?;
        if n < 0.0 {
            return Err(self.invalid(field, format!("expected a value >= 0, got {}", n)));
        }
        Ok(n)
    }

    pub(crate) fn positive(&self, field: &str, value: &Value) -> Result<f64, PropsError> {
        let n = self.number(field, value)?;
        if n <= 0.0 {
            return Err(self.invalid(field, format!("expected a value > 0, got {}", n)));
        }
        Ok(n)
    }

    /// A percentage in `(0, 100]`.
    pub(crate) fn percent(&self, field: &str, value: &Value) -> Result<f64, PropsError> {
        let n = self.number(field, value)?;
        if n <= 0.0 || n > 100.0 {
            return Err(self.invalid(field, format!("expected a percentage in (0, 100], got {}", n)));
        }
        Ok(n)
    }

    pub(crate) fn color(&self, field: &str, value: &Value) -> Result<Color, PropsError> {
        Color::from_value(value).map_err(|e| self.invalid(field, e.to_string()))
    }

    /// Reads a string keyword and converts it with `parse`.
    pub(crate) fn keyword<T>(
        &self,
        field: &str,
        value: &Value,
        parse: fn(&str) -> Option<T>,
        expected: &'static str,
    ) -> Result<T, PropsError> {
        let raw = value.as_str().ok_or_else(|| self.field_type(field, "a string"))?;
        parse(raw).ok_or_else(|| self.invalid(field, format!("expected {}, got \"{}\"", expected, raw)))
    }
}

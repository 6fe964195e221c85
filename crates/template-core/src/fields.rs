//! Typed readers used by the per-component field setters.
//!
//! Each reader checks the underlying shape of one field value and reports a
//! `FieldType` error naming the field and the expected shape otherwise.

use crate::error::MapperError;
use serde_json::{Map, Value};

/// Requires the fragment of `component` to be a map.
pub fn as_map<'v>(component: &'static str, document: &'v Value) -> Result<&'v Map<String, Value>, MapperError> {
    document
        .as_object()
        .ok_or_else(|| MapperError::shape(component, "a map"))
}

pub fn string(component: &'static str, field: &str, value: &Value) -> Result<String, MapperError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| MapperError::field_type(component, field, "a string"))
}

pub fn array<'v>(component: &'static str, field: &str, value: &'v Value) -> Result<&'v [Value], MapperError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| MapperError::field_type(component, field, "a list"))
}

pub fn map<'v>(
    component: &'static str,
    field: &str,
    value: &'v Value,
) -> Result<&'v Map<String, Value>, MapperError> {
    value
        .as_object()
        .ok_or_else(|| MapperError::field_type(component, field, "a map"))
}

/// A number strictly greater than zero.
pub fn positive(component: &'static str, field: &str, value: &Value) -> Result<f64, MapperError> {
    let n = value
        .as_f64()
        .ok_or_else(|| MapperError::field_type(component, field, "a number"))?;
    if n <= 0.0 {
        return Err(MapperError::validation(
            component,
            format!("{} must be greater than zero, got {}", field, n),
        ));
    }
    Ok(n)
}

/// An integer within `min..=max`.
pub fn integer_in(
    component: &'static str,
    field: &str,
    value: &Value,
    min: u64,
    max: u64,
) -> Result<u64, MapperError> {
    let n = value
        .as_u64()
        .ok_or_else(|| MapperError::field_type(component, field, "an integer"))?;
    if !(min..=max).contains(&n) {
        return Err(MapperError::validation(
            component,
            format!("{} must be between {} and {}, got {}", field, min, max, n),
        ));
    }
    Ok(n)
}

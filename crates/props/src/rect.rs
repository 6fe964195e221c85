use crate::error::PropsError;
use crate::parse::Reader;
use serde::Serialize;
use serde_json::Value;

/// Placement props shared by images and 2D codes.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct RectProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// Share of the enclosing column the component may occupy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub center: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub just_reference_width: bool,
}

impl RectProps {
    pub fn from_value(value: &Value) -> Result<Self, PropsError> {
        let reader = Reader::new("rect props");
        let mut props = RectProps::default();
        for (key, val) in reader.object(value)? {
            if !props.read_field(&reader, key, val)? {
                return Err(reader.unknown(key));
            }
        }
        Ok(props)
    }

    /// Applies one field, returning `false` when `key` is not a rect field.
    pub(crate) fn read_field(&mut self, reader: &Reader, key: &str, val: &Value) -> Result<bool, PropsError> {
        match key {
            "left" => self.left = Some(reader.non_negative(key, val)?),
            "top" => self.top = Some(reader.non_negative(key, val)?),
            "percent" => self.percent = Some(reader.percent(key, val)?),
            "center" => self.center = reader.boolean(key, val)?,
            "just_reference_width" => self.just_reference_width = reader.boolean(key, val)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

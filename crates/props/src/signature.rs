use crate::error::PropsError;
use crate::line::LineStyle;
use crate::parse::Reader;
use crate::text::FontStyle;
use folio_types::Color;
use serde::Serialize;
use serde_json::Value;

/// Props of a signature: a label under a signing line.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SignatureProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_padding: Option<f64>,
}

impl SignatureProps {
    pub fn from_value(value: &Value) -> Result<Self, PropsError> {
        let reader = Reader::new("signature props");
        let mut props = SignatureProps::default();

        for (key, val) in reader.object(value)? {
            match key.as_str() {
                "font_family" => props.font_family = Some(reader.string(key, val)?),
                "font_style" => {
                    props.font_style = Some(reader.keyword(key, val, FontStyle::parse, FontStyle::EXPECTED)?)
                }
                "font_size" => props.font_size = Some(reader.positive(key, val)?),
                "font_color" => props.font_color = Some(reader.color(key, val)?),
                "line_color" => props.line_color = Some(reader.color(key, val)?),
                "line_style" => {
                    props.line_style = Some(reader.keyword(key, val, LineStyle::parse, LineStyle::EXPECTED)?)
                }
                "line_thickness" => props.line_thickness = Some(reader.positive(key, val)?),
                "safe_padding" => props.safe_padding = Some(reader.non_negative(key, val)?),
                _ => return Err(reader.unknown(key)),
            }
        }

        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_signature_props() {
        let props = SignatureProps::from_value(&json!({
            "font_family": "courier",
            "font_style": "italic",
            "font_size": 8,
            "line_style": "dotted",
            "line_thickness": 0.2,
            "safe_padding": 1.5
        }))
        .unwrap();
        assert_eq!(props.font_style, Some(FontStyle::Italic));
        assert_eq!(props.line_style, Some(LineStyle::Dotted));
        assert_eq!(props.safe_padding, Some(1.5));
    }

    #[test]
    fn test_signature_props_are_closed() {
        let err = SignatureProps::from_value(&json!({"value": "x"})).unwrap_err();
        assert_eq!(
            err,
            PropsError::UnknownField { props: "signature props", field: "value".to_string() }
        );
    }
}

use crate::error::PropsError;
use crate::parse::Reader;
use crate::rect::RectProps;
use serde::Serialize;
use serde_json::Value;

/// Barcode symbology.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeType {
    #[default]
    Code128,
    Ean,
}

impl BarcodeType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "code128" => Some(BarcodeType::Code128),
            "ean" => Some(BarcodeType::Ean),
            _ => None,
        }
    }
}

/// Width/height ratio of a rendered barcode.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Proportion {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct BarcodeProps {
    #[serde(flatten)]
    pub rect: RectProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proportion: Option<Proportion>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub symbology: Option<BarcodeType>,
}

impl BarcodeProps {
    pub fn from_value(value: &Value) -> Result<Self, PropsError> {
        let reader = Reader::new("barcode props");
        let mut props = BarcodeProps::default();

        for (key, val) in reader.object(value)? {
            if props.rect.read_field(&reader, key, val)? {
                continue;
            }
            match key.as_str() {
                "proportion" => props.proportion = Some(read_proportion(val)?),
                "type" => {
                    props.symbology =
                        Some(reader.keyword(key, val, BarcodeType::parse, "\"code128\" or \"ean\"")?)
                }
                _ => return Err(reader.unknown(key)),
            }
        }

        Ok(props)
    }
}

fn read_proportion(value: &Value) -> Result<Proportion, PropsError> {
    let reader = Reader::new("proportion");
    let mut proportion = Proportion { width: 1.0, height: 0.2 };
    for (key, val) in reader.object(value)? {
        match key.as_str() {
            "width" => proportion.width = reader.positive(key, val)?,
            "height" => proportion.height = reader.positive(key, val)?,
            _ => return Err(reader.unknown(key)),
        }
    }
    Ok(proportion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_barcode_props_accept_rect_fields() {
        let props = BarcodeProps::from_value(&json!({
            "top": 1,
            "center": true,
            "type": "ean",
            "proportion": {"width": 16, "height": 2}
        }))
        .unwrap();
        assert_eq!(props.rect.top, Some(1.0));
        assert!(props.rect.center);
        assert_eq!(props.symbology, Some(BarcodeType::Ean));
        assert_eq!(props.proportion, Some(Proportion { width: 16.0, height: 2.0 }));
    }

    #[test]
    fn test_unknown_symbology() {
        let err = BarcodeProps::from_value(&json!({"type": "qr"})).unwrap_err();
        assert_eq!(err.field(), Some("type"));
    }

    #[test]
    fn test_proportion_is_closed() {
        let err = BarcodeProps::from_value(&json!({"proportion": {"depth": 1}})).unwrap_err();
        assert_eq!(
            err,
            PropsError::UnknownField { props: "proportion", field: "depth".to_string() }
        );
    }
}

use crate::error::PropsError;
use crate::parse::Reader;
use folio_types::Color;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    pub(crate) const EXPECTED: &'static str = "\"solid\", \"dashed\" or \"dotted\"";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "solid" => Some(LineStyle::Solid),
            "dashed" => Some(LineStyle::Dashed),
            "dotted" => Some(LineStyle::Dotted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct LineProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_percent: Option<f64>,
}

impl LineProps {
    pub fn from_value(value: &Value) -> Result<Self, PropsError> {
        let reader = Reader::new("line props");
        let mut props = LineProps::default();

        for (key, val) in reader.object(value)? {
            match key.as_str() {
                "color" => props.color = Some(reader.color(key, val)?),
                "style" => {
                    props.style = Some(reader.keyword(key, val, LineStyle::parse, LineStyle::EXPECTED)?)
                }
                "thickness" => props.thickness = Some(reader.positive(key, val)?),
                "orientation" => {
                    props.orientation = Some(reader.keyword(
                        key,
                        val,
                        Orientation::parse,
                        "\"horizontal\" or \"vertical\"",
                    )?)
                }
                "offset_percent" => props.offset_percent = Some(reader.percent(key, val)?),
                "size_percent" => props.size_percent = Some(reader.percent(key, val)?),
                _ => return Err(reader.unknown(key)),
            }
        }

        Ok(props)
    }
}

use crate::error::PropsError;
use crate::parse::Reader;
use folio_types::Color;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub(crate) const EXPECTED: &'static str = "\"normal\", \"bold\", \"italic\" or \"bold_italic\"";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(FontStyle::Normal),
            "bold" => Some(FontStyle::Bold),
            "italic" => Some(FontStyle::Italic),
            "bold_italic" | "bolditalic" => Some(FontStyle::BoldItalic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            "justify" => Some(Align::Justify),
            _ => None,
        }
    }
}

/// How long text is split across lines.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BreakLineStrategy {
    #[default]
    EmptySpaceStrategy,
    DashStrategy,
}

impl BreakLineStrategy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "empty_space_strategy" => Some(BreakLineStrategy::EmptySpaceStrategy),
            "dash_strategy" => Some(BreakLineStrategy::DashStrategy),
            _ => None,
        }
    }
}

/// Props of a text component. Unset fields are left to the renderer's defaults.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TextProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakline_strategy: Option<BreakLineStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

impl TextProps {
    pub fn from_value(value: &Value) -> Result<Self, PropsError> {
        let reader = Reader::new("text props");
        let mut props = TextProps::default();

        for (key, val) in reader.object(value)? {
            match key.as_str() {
                "top" => props.top = Some(reader.non_negative(key, val)?),
                "left" => props.left = Some(reader.non_negative(key, val)?),
                "right" => props.right = Some(reader.non_negative(key, val)?),
                "family" => props.family = Some(reader.string(key, val)?),
                "style" => {
                    props.style = Some(reader.keyword(key, val, FontStyle::parse, FontStyle::EXPECTED)?)
                }
                "size" => props.size = Some(reader.positive(key, val)?),
                "align" => {
                    props.align = Some(reader.keyword(
                        key,
                        val,
                        Align::parse,
                        "\"left\", \"center\", \"right\" or \"justify\"",
                    )?)
                }
                "breakline_strategy" => {
                    props.breakline_strategy = Some(reader.keyword(
                        key,
                        val,
                        BreakLineStrategy::parse,
                        "\"empty_space_strategy\" or \"dash_strategy\"",
                    )?)
                }
                "vertical_padding" => props.vertical_padding = Some(reader.non_negative(key, val)?),
                "color" => props.color = Some(reader.color(key, val)?),
                "hyperlink" => props.hyperlink = Some(reader.string(key, val)?),
                _ => return Err(reader.unknown(key)),
            }
        }

        Ok(props)
    }
}

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// An opaque RGB color as declared in a document description.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color { red: 0, green: 0, blue: 0 };

    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn gray(value: u8) -> Self {
        Self { red: value, green: value, blue: value }
    }

    /// Reads a color from either a `{"red", "green", "blue"}` map or a
    /// `#RGB` / `#RRGGBB` hex string.
    pub fn from_value(value: &Value) -> Result<Color, ColorError> {
        match value {
            Value::String(s) => Self::parse_hex(s),
            Value::Object(map) => {
                let mut color = Color::BLACK;
                for (name, channel) in map {
                    let slot = match name.as_str() {
                        "red" => &mut color.red,
                        "green" => &mut color.green,
                        "blue" => &mut color.blue,
                        other => return Err(ColorError::UnknownChannel(other.to_string())),
                    };
                    *slot = channel
                        .as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(|| ColorError::ChannelRange(name.clone()))?;
                }
                Ok(color)
            }
            _ => Err(ColorError::NotAColor),
        }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    fn parse_hex(s: &str) -> Result<Color, ColorError> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !hex.is_ascii() {
            return Err(ColorError::InvalidHexDigit(hex.to_string()));
        }

        let digits: String = match hex.len() {
            // #RGB: each digit is doubled
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            n => return Err(ColorError::InvalidHexLength(n)),
        };
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHexDigit(hex.to_string()))
        };
        Ok(Color {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }
}

/// Why a color declaration could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must be a hex string or a map of red, green and blue")]
    NotAColor,

    #[error("unknown color channel '{0}'")]
    UnknownChannel(String),

    #[error("color channel '{0}' must be an integer between 0 and 255")]
    ChannelRange(String),

    #[error("color must start with #, got: {0}")]
    MissingHash(String),

    #[error("invalid hex color length: expected 3 or 6, got {0}")]
    InvalidHexLength(usize),

    #[error("invalid hex digits in color '#{0}'")]
    InvalidHexDigit(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_color_from_channel_map() {
        let color = Color::from_value(&json!({"red": 255, "green": 10})).unwrap();
        assert_eq!(color, Color::new(255, 10, 0));
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_value(&json!("#fff")).unwrap(), Color::gray(255));
        assert_eq!(Color::from_value(&json!("#102030")).unwrap(), Color::new(16, 32, 48));
    }

    #[test]
    fn test_color_rejects_out_of_range_channel() {
        let err = Color::from_value(&json!({"red": 300})).unwrap_err();
        assert_eq!(err, ColorError::ChannelRange("red".to_string()));
        assert!(err.to_string().contains("between 0 and 255"));
    }

    #[test]
    fn test_color_rejects_unknown_channel() {
        let err = Color::from_value(&json!({"alpha": 1})).unwrap_err();
        assert_eq!(err, ColorError::UnknownChannel("alpha".to_string()));
    }

    #[test]
    fn test_color_rejects_malformed_hex() {
        assert_eq!(Color::from_value(&json!("fff")).unwrap_err(), ColorError::MissingHash("fff".to_string()));
        assert_eq!(Color::from_value(&json!("#ffff")).unwrap_err(), ColorError::InvalidHexLength(4));
        assert!(matches!(Color::from_value(&json!("#ggg")), Err(ColorError::InvalidHexDigit(_))));
        assert!(matches!(Color::from_value(&json!("#aé")), Err(ColorError::InvalidHexDigit(_))));
        assert_eq!(Color::from_value(&json!(12)).unwrap_err(), ColorError::NotAColor);
    }
}

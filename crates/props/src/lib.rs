//! Formatting props attached to folio leaf components.
//!
//! Each leaf type declares its own closed set of props. Props are parsed from
//! the untyped `serde_json::Value` found under a component's `props` field and
//! are otherwise opaque to the mapping layer; resolving defaults, fonts and
//! geometry belongs to the renderer.

pub mod barcode;
pub mod error;
pub mod line;
mod parse;
pub mod rect;
pub mod signature;
pub mod text;

pub use barcode::{BarcodeProps, BarcodeType, Proportion};
pub use error::PropsError;
pub use line::{LineProps, LineStyle, Orientation};
pub use rect::RectProps;
pub use signature::SignatureProps;
pub use text::{Align, BreakLineStrategy, FontStyle, TextProps};

pub use folio_types::Color;

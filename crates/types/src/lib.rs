pub mod color;

pub use color::{Color, ColorError};

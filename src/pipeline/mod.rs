pub mod builder;
pub mod config;
pub mod document;

pub use builder::DocumentBuilder;
pub use config::{DEFAULT_MAX_DEPTH, ExecutionConfig};
pub use document::Document;

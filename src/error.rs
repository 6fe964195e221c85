// src/error.rs
use folio_json_template::JsonTemplateError;
use folio_template_core::{MapperError, TemplateError};
use thiserror::Error;

/// A comprehensive error type for mapping and generating documents.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Template failed: {0}")]
    Template(#[from] TemplateError),

    #[error("Template mapping failed: {0}")]
    JsonTemplate(#[from] JsonTemplateError),

    #[error("Generation failed: {0}")]
    Mapping(#[from] MapperError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Content is invalid: {0}")]
    InvalidContent(String),
}

impl PipelineError {
    /// The mapping or generation error underneath, if that is what failed.
    pub fn mapper_error(&self) -> Option<&MapperError> {
        match self {
            PipelineError::Template(e) => e.mapper_error(),
            PipelineError::JsonTemplate(JsonTemplateError::Mapping(e)) | PipelineError::Mapping(e) => Some(e),
            _ => None,
        }
    }
}

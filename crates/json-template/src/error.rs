use folio_template_core::{MapperError, TemplateError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonTemplateError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MapperError),
}

impl From<JsonTemplateError> for TemplateError {
    fn from(err: JsonTemplateError) -> Self {
        match err {
            JsonTemplateError::JsonParse(e) => TemplateError::ParseError(e.to_string()),
            JsonTemplateError::Mapping(e) => TemplateError::Mapping(e),
        }
    }
}

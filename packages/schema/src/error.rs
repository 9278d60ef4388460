use thiserror::Error;

pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while reading persisted page data
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid config for section {id} ({section_type}): {message}")]
    InvalidConfig {
        id: String,
        section_type: String,
        message: String,
    },

    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Unknown variant section type: {0}")]
    UnknownVariantSectionType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    pub fn invalid_config(
        id: impl Into<String>,
        section_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            id: id.into(),
            section_type: section_type.into(),
            message: message.into(),
        }
    }
}

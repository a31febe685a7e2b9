use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Image encoding failed: {message}")]
    EncodingError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Extraction response is not well-formed JSON: {message}")]
    ParseError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Extraction gave no usable response after {attempts} attempts")]
    ExtractionTimeout { attempts: u32 },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MenuError>;

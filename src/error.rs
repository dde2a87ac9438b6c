use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid record date '{value}': {details}")]
    InvalidDate { value: String, details: String },

    #[error("Invalid month window {0}: must be 1, 3, 6 or 12")]
    InvalidWindow(u32),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

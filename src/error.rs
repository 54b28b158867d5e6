//! Error handling for the ATS analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown job role: {0}")]
    UnknownRole(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Input too large: {size} bytes (limit {limit} bytes)")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsError {
    fn from(err: anyhow::Error) -> Self {
        AtsError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_message() {
        let err = AtsError::UnknownRole("quantum-engineer".to_string());
        assert_eq!(err.to_string(), "Unknown job role: quantum-engineer");
    }

    #[test]
    fn test_input_too_large_message() {
        let err = AtsError::InputTooLarge { size: 20, limit: 10 };
        assert_eq!(err.to_string(), "Input too large: 20 bytes (limit 10 bytes)");
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: AtsError = anyhow::anyhow!("bad upload").into();
        assert!(matches!(err, AtsError::InvalidInput(ref m) if m == "bad upload"));
    }
}

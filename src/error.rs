//! Error handling for the application
//!
//! Quote calculation itself never fails; these errors come from the shell
//! around it (rate card loading and output).

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid rate for {key}: {value:?}")]
    InvalidRate { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rate_display() {
        let err = AppError::InvalidRate {
            key: "QUOTE_SETUP_FEE".to_string(),
            value: "thirty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("QUOTE_SETUP_FEE"));
        assert!(msg.contains("thirty"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}

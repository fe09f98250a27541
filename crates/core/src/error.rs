// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// True for failures worth retrying later (network, 5xx)
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Transport(_) => true,
            AppError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: reqwest::Error conversion is handled in infra-http crate
// by mapping to AppError::Transport / AppError::Decode

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(AppError::Transport("reset".into()).is_transient());
        assert!(AppError::Http {
            status: 503,
            url: "x".into()
        }
        .is_transient());
        assert!(!AppError::Http {
            status: 404,
            url: "x".into()
        }
        .is_transient());
        assert!(!AppError::NotFound("contest 1800".into()).is_transient());
    }
}

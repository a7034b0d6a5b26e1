use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Generic IO error: {0}")]
    IoGeneric(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_thread_safe<T: std::error::Error + Send + Sync + 'static>() {}

    #[test]
    fn test_error_is_thread_safe() {
        // clap value parsers and anyhow::Error both need these bounds.
        assert_thread_safe::<AppError>();
    }

    #[test]
    fn test_io_errors_convert() {
        fn open_missing() -> AppResult<()> {
            std::fs::read("/nonexistent/envelope/config.toml")?;
            Ok(())
        }
        assert!(matches!(open_missing(), Err(AppError::IoGeneric(_))));
    }

    #[test]
    fn test_invalid_parameter_names_field() {
        let err = AppError::InvalidParameter {
            field: "peak_multiplier",
            reason: "must be >= 1, got 0.5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter `peak_multiplier`: must be >= 1, got 0.5"
        );
    }
}

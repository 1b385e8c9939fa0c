//! Error types for the pull engine and its front ends.

/// Errors surfaced by the estimator, the config loader and the CLI.
///
/// Sampling itself never fails; only caller input and configuration can.
#[derive(Debug, thiserror::Error)]
pub enum GachaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid pity config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GachaError {
    /// True for errors caused by the caller's request rather than the environment.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GachaError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, GachaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = GachaError::InvalidArgument("planned pulls must be positive, got 0".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: planned pulls must be positive, got 0"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{nope");
        let err: GachaError = parse.unwrap_err().into();
        assert!(matches!(err, GachaError::Json(_)));
        assert!(!err.is_invalid_argument());
    }
}

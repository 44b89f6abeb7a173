//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
///
/// Form validation failures are not errors; they are reported as
/// [`crate::FormErrors`] and shown next to the offending field.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Site configuration could not be used
    #[error("Config error: {0}")]
    Config(String),

    /// Site configuration parsed but holds values the site cannot render
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Submission sink refused a validated form
    #[error("Submission error: {0}")]
    Submission(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidConfig("typing interval is zero".to_string());
        assert_eq!(format!("{}", err), "Invalid config: typing interval is zero");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Json(_)));
    }
}

//! Error types for the view controller
//!
//! None of these are fatal. URL-state errors are recovered locally by the
//! controller and reported for logging; the remaining variants come from
//! configuration parsing and the browser shell.

/// Errors that can occur while driving the portfolio views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A URL parameter carried an unrecognized or stale value
    InvalidUrlState {
        /// Name of the query parameter
        param: String,
        /// The value that was rejected
        value: String,
    },

    /// A deep-linked project id matched no project card
    MissingTarget(String),

    /// Configuration could not be parsed
    Config(String),

    /// A browser API call failed
    Dom(String),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrlState { param, value } => {
                write!(f, "invalid url state: {:?}={:?}", param, value)
            }
            Self::MissingTarget(id) => write!(f, "no project card with id {:?}", id),
            Self::Config(msg) => write!(f, "config error: {}", msg),
            Self::Dom(msg) => write!(f, "dom error: {}", msg),
        }
    }
}

impl std::error::Error for ViewError {}

/// Result type alias for view operations
pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ViewError::InvalidUrlState {
            param: String::new(),
            value: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "invalid url state: \"\"=\"bogus\"");

        let err = ViewError::MissingTarget("card-7".to_string());
        assert_eq!(err.to_string(), "no project card with id \"card-7\"");

        let err = ViewError::Config("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "config error: expected value at line 1");
    }

    #[test]
    fn test_error_equality() {
        let err1 = ViewError::MissingTarget("a".to_string());
        let err2 = ViewError::MissingTarget("a".to_string());
        let err3 = ViewError::MissingTarget("b".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}

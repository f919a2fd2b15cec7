use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    #[error("No filter matches token '{token}'")]
    NoFilterMatch { token: String },

    #[error("Index {index} out of range (length: {len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Key '{key}' not found")]
    KeyNotFound { key: String },

    #[error("Unsupported expression '{expression}': {message}")]
    UnsupportedExpression { expression: String, message: String },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Path delimiter must not be empty")]
    InvalidDelimiter,

    #[error("Filter '{filter}' error: {message}")]
    Filter { filter: String, message: String },
}

impl WalkError {
    pub fn no_match(token: impl Into<String>) -> Self {
        Self::NoFilterMatch {
            token: token.into(),
        }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub fn unsupported(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedExpression {
            expression: expression.into(),
            message: message.into(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    pub fn filter(filter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Filter {
            filter: filter.into(),
            message: message.into(),
        }
    }
}

//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror. The
//! user-facing variants mirror the categories the UI is allowed to show;
//! `Http` and `Upstream` are raw transport failures that only exist until
//! the normalizer has classified them.

use thiserror::Error;

/// The closed set of user-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidCredential,
    InvalidImage,
    ParseFailure,
    QuotaExceeded,
    RateLimited,
    ServiceUnavailable,
    Unknown,
}

impl ErrorCategory {
    /// Wrap a user-displayable message in this category's error variant.
    pub fn into_error(self, message: impl Into<String>) -> Error {
        let message = message.into();
        match self {
            ErrorCategory::InvalidCredential => Error::InvalidCredential(message),
            ErrorCategory::InvalidImage => Error::InvalidImage(message),
            ErrorCategory::ParseFailure => Error::ParseFailure(message),
            ErrorCategory::QuotaExceeded => Error::QuotaExceeded(message),
            ErrorCategory::RateLimited => Error::RateLimited(message),
            ErrorCategory::ServiceUnavailable => Error::ServiceUnavailable(message),
            ErrorCategory::Unknown => Error::Unknown(message),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidCredential(String),

    #[error("{0}")]
    InvalidImage(String),

    #[error("{0}")]
    ParseFailure(String),

    #[error("{0}")]
    QuotaExceeded(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Unknown(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Upstream(String),
}

impl Error {
    /// The user-facing category, or `None` for raw transport errors that
    /// have not been through the normalizer yet.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::InvalidCredential(_) => Some(ErrorCategory::InvalidCredential),
            Error::InvalidImage(_) => Some(ErrorCategory::InvalidImage),
            Error::ParseFailure(_) => Some(ErrorCategory::ParseFailure),
            Error::QuotaExceeded(_) => Some(ErrorCategory::QuotaExceeded),
            Error::RateLimited(_) => Some(ErrorCategory::RateLimited),
            Error::ServiceUnavailable(_) => Some(ErrorCategory::ServiceUnavailable),
            Error::Unknown(_) => Some(ErrorCategory::Unknown),
            Error::Http(_) | Error::Upstream(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_error_round_trips_category() {
        let categories = [
            ErrorCategory::InvalidCredential,
            ErrorCategory::InvalidImage,
            ErrorCategory::ParseFailure,
            ErrorCategory::QuotaExceeded,
            ErrorCategory::RateLimited,
            ErrorCategory::ServiceUnavailable,
            ErrorCategory::Unknown,
        ];

        for category in categories {
            let err = category.into_error("message");
            assert_eq!(err.category(), Some(category));
            assert_eq!(err.to_string(), "message");
        }
    }

    #[test]
    fn test_upstream_has_no_category() {
        assert_eq!(Error::Upstream("raw".to_string()).category(), None);
    }
}

use std::{
    fmt::Display,
    num::{ParseFloatError, ParseIntError, TryFromIntError},
    str::ParseBoolError,
};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::translator::translate;

/// An error unwound from request handling, classified before translation.
///
/// The message is for diagnostics only and is never rendered to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller supplied malformed input.
    InvalidArgument(String),
    /// Any other unanticipated failure.
    GenericFailure(String),
    /// A platform-layer failure outside both classifications; left to axum's default.
    Unclassified(String),
}

impl ApiError {
    pub fn invalid_argument(reason: impl Display) -> ApiError {
        ApiError::InvalidArgument(reason.to_string())
    }

    pub fn generic_failure(reason: impl Display) -> ApiError {
        ApiError::GenericFailure(reason.to_string())
    }

    pub fn unclassified(reason: impl Display) -> ApiError {
        ApiError::Unclassified(reason.to_string())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Every classified error is a generic failure, invalid arguments included.
    pub fn is_generic_failure(&self) -> bool {
        match self {
            Self::InvalidArgument(_) | Self::GenericFailure(_) => true,
            Self::Unclassified(_) => false,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument(reason)
            | Self::GenericFailure(reason)
            | Self::Unclassified(reason) => reason,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Self::GenericFailure(reason) => write!(f, "generic failure: {}", reason),
            Self::Unclassified(reason) => write!(f, "unclassified failure: {}", reason),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ParseIntError> for ApiError {
    fn from(value: ParseIntError) -> ApiError {
        ApiError::invalid_argument(value)
    }
}

impl From<ParseFloatError> for ApiError {
    fn from(value: ParseFloatError) -> ApiError {
        ApiError::invalid_argument(value)
    }
}

impl From<ParseBoolError> for ApiError {
    fn from(value: ParseBoolError) -> ApiError {
        ApiError::invalid_argument(value)
    }
}

impl From<TryFromIntError> for ApiError {
    fn from(value: TryFromIntError) -> ApiError {
        ApiError::invalid_argument(value)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(value: std::io::Error) -> ApiError {
        ApiError::unclassified(value)
    }
}

impl From<std::fmt::Error> for ApiError {
    fn from(value: std::fmt::Error) -> ApiError {
        ApiError::unclassified(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match translate(&self) {
            Some(translated) => translated.into_response(),
            // unclassified errors get axum's own answer for an unhandled failure
            None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::model::error::ApiError;

/// The status and plain-text body sent back for a translated error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatedResponse {
    pub status_code: StatusCode,
    pub body: &'static str,
}

impl IntoResponse for TranslatedResponse {
    fn into_response(self) -> Response {
        (self.status_code, self.body).into_response()
    }
}

struct ErrorHandler {
    matches: fn(&ApiError) -> bool,
    response: TranslatedResponse,
}

// First match wins. Invalid arguments are also generic failures, so they must come first.
static ERROR_HANDLERS: [ErrorHandler; 2] = [
    ErrorHandler {
        matches: ApiError::is_invalid_argument,
        response: TranslatedResponse {
            status_code: StatusCode::BAD_REQUEST,
            body: "BAD REQUEST",
        },
    },
    ErrorHandler {
        matches: ApiError::is_generic_failure,
        response: TranslatedResponse {
            status_code: StatusCode::BAD_GATEWAY,
            body: "RUNTIME EXCEPTION",
        },
    },
];

/// Maps a caught error to its response.
///
/// Returns `None` when no handler claims the error; the caller should then leave
/// the failure to axum's default handling.
pub fn translate(error: &ApiError) -> Option<TranslatedResponse> {
    translate_with(&ERROR_HANDLERS, error)
}

fn translate_with(handlers: &[ErrorHandler], error: &ApiError) -> Option<TranslatedResponse> {
    handlers
        .iter()
        .find(|handler| (handler.matches)(error))
        .map(|handler| handler.response)
}

use std::{any::Any, panic::AssertUnwindSafe};

use axum::{http::Request, middleware::Next, response::IntoResponse, response::Response};
use futures::FutureExt;

use crate::model::error::ApiError;

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(reason) = payload.downcast_ref::<&str>() {
        reason.to_string()
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason.clone()
    } else {
        String::from("handler panicked")
    }
}

/// Error sink for failures that unwind out of request handling.
///
/// A panicking handler is classified as a generic failure and translated like
/// any returned `ApiError`. Every other response passes through untouched.
pub async fn translate_errors<T>(req: Request<T>, next: Next<T>) -> Response {
    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => ApiError::GenericFailure(panic_reason(payload.as_ref())).into_response(),
    }
}

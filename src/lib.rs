use axum::Router;

use tower::ServiceBuilder;

pub mod middleware;
pub mod model;
pub mod translator;

/// Registers request tracing and error translation around the application's routes.
///
/// Call once while building the app; handlers returning `Err(ApiError)` and
/// handlers that panic are answered by the translator, everything else keeps
/// axum's default behaviour.
pub fn router(routes: Router) -> Router {
    routes.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(
                crate::middleware::request_tracing::request_tracing,
            ))
            .layer(axum::middleware::from_fn(
                crate::middleware::error_translation::translate_errors,
            )),
    )
}

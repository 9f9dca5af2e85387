pub mod error_translation;
pub mod request_tracing;

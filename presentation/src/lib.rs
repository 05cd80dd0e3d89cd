//! Presentation layer for pollbooth
//!
//! This crate contains the HTTP surface: the router, the four request
//! handlers, and the error-to-response mapping.

pub mod http;

// Re-export commonly used types
pub use http::error::AppError;
pub use http::router::router;
pub use http::state::AppState;

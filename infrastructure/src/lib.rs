//! Infrastructure layer for pollbooth
//!
//! This crate contains adapters for the contracts defined by the domain and
//! application layers: the SQLite repository, the tera page renderer, and
//! the configuration file loader.

pub mod config;
pub mod db;
pub mod render;

// Re-export commonly used types
pub use config::{ConfigLoader, ServerConfig};
pub use db::{DbError, SqlitePollRepository};
pub use render::TeraRenderer;

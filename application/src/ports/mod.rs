//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod renderer;

pub use renderer::{PageRenderer, RenderError, Template};

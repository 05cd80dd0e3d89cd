//! Configuration loading for pollbooth
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `POLLBOOTH_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./pollbooth.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::ServerConfig;
pub use loader::ConfigLoader;

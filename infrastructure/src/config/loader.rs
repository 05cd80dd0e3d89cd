//! Configuration file loader with multi-source merging

use super::file_config::ServerConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `POLLBOOTH_*` environment variables (e.g. `POLLBOOTH_PORT`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./pollbooth.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<ServerConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(ServerConfig::default()));

        let project_path = Path::new("pollbooth.toml");
        if project_path.exists() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("POLLBOOTH_"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration
    pub fn load_defaults() -> ServerConfig {
        ServerConfig::default()
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! are deserialized directly.

use serde::{Deserialize, Serialize};

/// Complete server configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    pub bind: String,
    /// Port to listen on
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// Seed a few demo questions when the database is empty
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8000,
            database_url: "sqlite://pollbooth.db".to_string(),
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// The socket address string the listener binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:8000");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: ServerConfig = toml_from_str("port = 9100\n");
        assert_eq!(config.port, 9100);
        assert_eq!(config.bind, "127.0.0.1");
    }

    fn toml_from_str(raw: &str) -> ServerConfig {
        use figment::providers::{Format, Toml};
        figment::Figment::new()
            .merge(figment::providers::Serialized::defaults(
                ServerConfig::default(),
            ))
            .merge(Toml::string(raw))
            .extract()
            .unwrap()
    }
}

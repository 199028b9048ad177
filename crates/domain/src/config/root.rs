use super::{ConfigError, LoggingConfig, ResolverConfig, ServerConfig};
use crate::domain_name::normalize_fqdn;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub log_level: Option<String>,
    pub root_server_address: Option<String>,
}

impl Config {
    /// Load from `path` (defaults when `None`), then apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                Self::from_toml(&raw)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(addr) = overrides.root_server_address {
            self.resolver.root_server_address = Some(addr);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("server.web_port cannot be 0".into()));
        }
        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "server.bind_address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        let resolver = &self.resolver;
        if resolver.port == 0 {
            return Err(ConfigError::Validation("resolver.port cannot be 0".into()));
        }
        if resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.query_timeout_ms must be positive".into(),
            ));
        }
        if resolver.max_referrals == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_referrals must be positive".into(),
            ));
        }
        normalize_fqdn(&resolver.root_server)
            .map_err(|e| ConfigError::Validation(format!("resolver.root_server: {}", e)))?;
        if let Some(addr) = &resolver.root_server_address {
            if addr.parse::<Ipv4Addr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "resolver.root_server_address '{}' is not an IPv4 address",
                    addr
                )));
            }
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level, LEVELS
            )));
        }

        Ok(())
    }

    /// Root server address from the config, when one is pinned.
    pub fn root_server_address(&self) -> Option<Ipv4Addr> {
        self.resolver
            .root_server_address
            .as_deref()
            .and_then(|addr| addr.parse().ok())
    }
}

//! Server configuration loaded from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 5002;

/// Runtime settings for the posts server
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Interface to bind (`POSTS_API_HOST`, default all interfaces)
    pub host: IpAddr,

    /// TCP port (`POSTS_API_PORT`, default 5002)
    pub port: u16,

    /// Start with the two sample posts (`POSTS_API_SEED`, default true)
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset variables
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("POSTS_API_HOST") {
            config.host = value
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value, source })?;
        }

        if let Some(value) = lookup("POSTS_API_PORT") {
            config.port = value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }

        if let Some(value) = lookup("POSTS_API_SEED") {
            config.seed = !matches!(value.to_lowercase().as_str(), "false" | "0" | "no");
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

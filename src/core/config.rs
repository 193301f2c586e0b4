//! Preview server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::net::SocketAddr;

/// Default listen address
pub const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3000";

/// Default directory holding the static landing page
pub const DEFAULT_SITE_ROOT: &str = "public";

/// Preview server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to listen on
    /// Example: 0.0.0.0:8080
    pub site_addr: Option<String>,

    /// Directory with index.html, styles and images
    pub site_root: Option<String>,

    /// Directory with the compiled wasm bundle, served under /pkg
    /// Defaults to `<site_root>/pkg`
    pub pkg_dir: Option<String>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SITE_ADDR `{value}`: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_addr: std::env::var("SITE_ADDR").ok(),
            site_root: std::env::var("SITE_ROOT").ok(),
            pkg_dir: std::env::var("PKG_DIR").ok(),
        }
    }

    /// Parsed listen address
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = self.site_addr.as_deref().unwrap_or(DEFAULT_SITE_ADDR);
        value.parse().map_err(|source| ConfigError::InvalidAddr {
            value: value.to_string(),
            source,
        })
    }

    pub fn site_root(&self) -> &str {
        self.site_root.as_deref().unwrap_or(DEFAULT_SITE_ROOT)
    }

    pub fn pkg_dir(&self) -> String {
        match &self.pkg_dir {
            Some(dir) => dir.clone(),
            None => format!("{}/pkg", self.site_root()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

//! Server configuration from command-line flags and environment.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors from validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid log level {directive:?}: {reason}")]
    InvalidLogLevel { directive: String, reason: String },

    #[error("invalid listen address {host}:{port} (host must be an IP address)")]
    InvalidAddress { host: String, port: u16 },
}

/// my-awesome-demo server
#[derive(Parser, Debug, Clone)]
#[command(name = "my-awesome-demo-server")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// IP address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5173)]
    pub port: u16,

    /// Log filter directive (e.g. "info" or "server=debug,tower_http=info")
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Directory holding the built frontend (Trunk dist output)
    #[arg(long, env = "STATIC_DIR", default_value = "crates/frontend/dist")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidAddress {
            host: self.host.clone(),
            port: self.port,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Tracing filter built from `log_level`.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_level).map_err(|e| ConfigError::InvalidLogLevel {
            directive: self.log_level.clone(),
            reason: e.to_string(),
        })
    }
}

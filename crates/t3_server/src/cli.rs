//! Command-line interface for t3_server.

use clap::Parser;
use std::path::PathBuf;
use t3_server::{ConfigError, ServerConfig};
use tracing::{info, instrument};

/// Tic-tac-toe game server with a REST API
#[derive(Parser, Debug)]
#[command(name = "t3_server")]
#[command(about = "In-memory tic-tac-toe game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Browser origin allowed by CORS; repeat for several (replaces config file list)
    #[arg(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,
}

impl Cli {
    /// Resolves defaults, then the config file, then flags.
    #[instrument(skip(self))]
    pub fn server_config(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => {
                info!("No config file given, using defaults");
                ServerConfig::default()
            }
        };

        if let Some(host) = &self.host {
            config = config.with_host(host.clone());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if !self.allowed_origins.is_empty() {
            config = config.with_allowed_origins(self.allowed_origins.clone());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = Cli::try_parse_from(["t3_server"]).unwrap();
        assert_eq!(cli.server_config().unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::try_parse_from([
            "t3_server",
            "--port",
            "9000",
            "--host",
            "0.0.0.0",
            "--allowed-origin",
            "http://a.test",
            "--allowed-origin",
            "http://b.test",
        ])
        .unwrap();
        let config = cli.server_config().unwrap();
        assert_eq!(*config.port(), 9000);
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.allowed_origins().len(), 2);
    }
}

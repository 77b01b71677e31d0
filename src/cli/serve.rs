//! Serve command: runs the web host for the portfolio page.

use std::net::SocketAddr;

use clap::Args;
use tracing::info;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::web;

/// Serve the portfolio page over HTTP
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Host to bind to (defaults to web.host from the config)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (defaults to web.port from the config)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Address to listen on, flags over config.
    fn address(&self, host: &str, port: u16) -> CliResult<SocketAddr> {
        let host = self.host.as_deref().unwrap_or(host);
        let port = self.port.unwrap_or(port);
        format!("{host}:{port}")
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid listen address {host}:{port}: {e}")))
    }

    /// Execute the serve command. Blocks until the server stops.
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let addr = self.address(&config.web.host, config.web.port)?;

        match &config.paths.catalog {
            Some(path) => info!("Catalog: {}", path.display()),
            None => info!("Catalog: built-in"),
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

        runtime
            .block_on(web::run_server(config, addr))
            .map_err(|e| CliError::io(format!("Web server failed: {e:#}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = ServeArgs {
            host: Some("0.0.0.0".to_string()),
            port: None,
        };
        let addr = args.address("127.0.0.1", 3001).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3001");
    }

    #[test]
    fn test_bad_host_is_rejected() {
        let args = ServeArgs {
            host: Some("not a host".to_string()),
            port: Some(80),
        };
        let err = args.address("127.0.0.1", 3001).unwrap_err();
        assert!(err.message.contains("Invalid listen address"));
    }
}

//! Command-line and environment configuration for the server binary.

use clap::Parser;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ROUTE_PREFIX: &str = "api";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration. Every flag can also be set from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "greeter-server")]
#[command(version)]
#[command(about = "HTTP greeting endpoints", long_about = None)]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(short = 'H', long, env = "GREETER_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path segment mounted in front of every endpoint; empty for none
    #[arg(long, env = "GREETER_ROUTE_PREFIX", default_value = DEFAULT_ROUTE_PREFIX)]
    pub route_prefix: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, env = "GREETER_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "GREETER_JSON_LOGS")]
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Absolute route for a function, e.g. `/api/httpget`.
    pub fn route(&self, function: &str) -> String {
        let prefix = self.route_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("/{function}")
        } else {
            format!("/{prefix}/{function}")
        }
    }
}

//! Command-line and environment configuration.

use std::fmt;
use std::time::Duration;

use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// todo-server - in-memory task list HTTP service
#[derive(Parser, Clone, Debug)]
#[command(name = "todo-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Deployment environment; picks the default log level and format
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// Log filter (trace, debug, info, warn, error, or an EnvFilter directive)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Seconds to wait for in-flight requests after a shutdown signal
    #[arg(long, env = "SHUTDOWN_GRACE_SECS", default_value_t = 10)]
    pub shutdown_grace_secs: u64,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Explicit `log_level` wins; otherwise `info` in production and `debug`
    /// elsewhere.
    pub fn log_filter(&self) -> String {
        match &self.log_level {
            Some(level) => level.clone(),
            None if self.is_production() => "info".to_string(),
            None => "debug".to_string(),
        }
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["todo-server"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    /// Built directly so `LOG_LEVEL` and friends in the test environment
    /// cannot leak in.
    fn config(environment: Environment, log_level: Option<&str>) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment,
            log_level: log_level.map(str::to_owned),
            shutdown_grace_secs: 10,
        }
    }

    #[test]
    fn addr_joins_host_and_port() {
        let config = parse(&["--host", "0.0.0.0", "--port", "9000"]);
        assert_eq!(config.addr(), "0.0.0.0:9000");
    }

    #[test]
    fn production_defaults_to_info() {
        let config = config(Environment::Production, None);
        assert!(config.is_production());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn development_defaults_to_debug() {
        let config = config(Environment::Development, None);
        assert!(!config.is_production());
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn explicit_log_level_wins() {
        assert_eq!(config(Environment::Production, Some("warn")).log_filter(), "warn");
    }

    #[test]
    fn flags_are_parsed() {
        let config = parse(&["--environment", "production", "--log-level", "warn"]);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn grace_period_is_configurable() {
        let config = parse(&["--shutdown-grace-secs", "3"]);
        assert_eq!(config.shutdown_grace(), Duration::from_secs(3));
    }

    #[test]
    fn rejects_unknown_environment() {
        assert!(Config::try_parse_from(["todo-server", "--environment", "staging"]).is_err());
    }

    #[test]
    fn environment_displays_lowercase() {
        assert_eq!(Environment::Production.to_string(), "production");
    }
}

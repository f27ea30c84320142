//! Process configuration from CLI flags and environment variables.

use std::net::Ipv6Addr;

use clap::{Parser, ValueEnum};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bind host must not be empty")]
    EmptyHost,

    #[error("base path {0:?} must be a literal path without `*`, `:`, `{{`, `}}` or empty segments")]
    InvalidBasePath(String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "tones-backend")]
#[command(about = "Health service for the tones app")]
pub struct AppConfig {
    /// Host or IP address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind (0 picks a free port)
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Extra path prefix to also mount the routes under, e.g. `/api`
    #[arg(long, env = "BASE_PATH")]
    pub base_path: Option<String>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl AppConfig {
    /// `host:port` in a form `TcpListener::bind` accepts. IPv6 literals get brackets.
    pub fn bind_addr(&self) -> Result<String, ConfigError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if host.parse::<Ipv6Addr>().is_ok() {
            Ok(format!("[{}]:{}", host, self.port))
        } else {
            Ok(format!("{}:{}", host, self.port))
        }
    }

    /// Normalized mount prefix, or `None` when routes live only at the root.
    ///
    /// Only literal segments are accepted; captures and wildcards would make the router panic.
    pub fn mount_prefix(&self) -> Result<Option<String>, ConfigError> {
        let Some(base_path) = self.base_path.as_deref() else {
            return Ok(None);
        };
        let raw = base_path.trim().trim_end_matches('/');
        if raw.is_empty() {
            return Ok(None);
        }
        if raw.contains(['*', ':', '{', '}']) || raw.contains("//") {
            return Err(ConfigError::InvalidBasePath(base_path.to_string()));
        }
        if raw.starts_with('/') {
            Ok(Some(raw.to_string()))
        } else {
            Ok(Some(format!("/{}", raw)))
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            base_path: None,
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_base_path(base_path: &str) -> AppConfig {
        AppConfig {
            base_path: Some(base_path.to_string()),
            ..AppConfig::default()
        }
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:8000");
        assert_eq!(config.mount_prefix(), Ok(None));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn parse_flags() {
        let config = AppConfig::try_parse_from([
            "tones-backend",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--base-path",
            "/api",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.bind_addr().unwrap(), "0.0.0.0:9000");
        assert_eq!(config.mount_prefix(), Ok(Some("/api".to_string())));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(AppConfig::try_parse_from(["tones-backend", "--port", "70000"]).is_err());
    }

    #[test]
    fn ipv6_host_is_bracketed() {
        let config = AppConfig {
            host: "::1".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr().unwrap(), "[::1]:8000");
    }

    #[test]
    fn empty_host_is_an_error() {
        let config = AppConfig {
            host: "  ".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr(), Err(ConfigError::EmptyHost));
    }

    #[test]
    fn mount_prefix_is_normalized() {
        let prefix = |raw: &str| with_base_path(raw).mount_prefix().unwrap();
        assert_eq!(prefix("api").as_deref(), Some("/api"));
        assert_eq!(prefix("/api/").as_deref(), Some("/api"));
        assert_eq!(prefix(" /tones/api ").as_deref(), Some("/tones/api"));
        assert!(prefix("/").is_none());
        assert!(prefix("").is_none());
    }

    #[test]
    fn mount_prefix_rejects_patterns() {
        for raw in ["/*rest", "/api/:version", "/{id}", "/api//v1"] {
            assert_eq!(
                with_base_path(raw).mount_prefix(),
                Err(ConfigError::InvalidBasePath(raw.to_string())),
                "{raw}"
            );
        }
    }
}

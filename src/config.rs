use crate::telemetry::LogLevel;
use thiserror::Error;
use url::Url;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/portfolio";
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("contact endpoint `{value}` is not a valid URL: {reason}")]
    MalformedEndpoint { value: String, reason: String },
    #[error("contact endpoint `{value}` must use http or https")]
    UnsupportedScheme { value: String },
}

pub fn parse_contact_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let value = raw.trim();
    let parsed = Url::parse(value).map_err(|err| ConfigError::MalformedEndpoint {
        value: value.to_string(),
        reason: err.to_string(),
    })?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Ok(parsed)
    } else {
        Err(ConfigError::UnsupportedScheme {
            value: value.to_string(),
        })
    }
}

/// Browser-side settings, fixed when the wasm bundle is built.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub contact_endpoint: Result<Url, ConfigError>,
    pub log_level: LogLevel,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CONTACT_ENDPOINT"), option_env!("PORTFOLIO_LOG_LEVEL"))
    }

    fn from_values(endpoint: Option<&str>, log_level: Option<&str>) -> Self {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_CONTACT_ENDPOINT);

        Self {
            contact_endpoint: parse_contact_endpoint(endpoint),
            log_level: log_level.and_then(LogLevel::parse).unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use host::ServerConfig;

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use super::DEFAULT_LOG_LEVEL;
    use crate::telemetry::LogLevel;
    use std::path::PathBuf;

    const DEFAULT_PORT: u16 = 8080;
    const DEFAULT_DIST_DIR: &str = "dist";
    const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ServerConfig {
        pub port: u16,
        pub dist_dir: PathBuf,
        pub log_level: LogLevel,
    }

    impl ServerConfig {
        pub fn from_env() -> Self {
            Self::from_lookup(|name| std::env::var(name).ok())
        }

        pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let port = parse_u16_with_bounds(lookup("PORT").as_deref(), DEFAULT_PORT, PORT_BOUNDS);
            let dist_dir = non_empty(lookup("SITE_DIST_DIR"))
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
            let log_level = non_empty(lookup("LOG_LEVEL"))
                .and_then(|value| LogLevel::parse(&value))
                .unwrap_or(DEFAULT_LOG_LEVEL);

            Self {
                port,
                dist_dir,
                log_level,
            }
        }
    }

    fn parse_u16_with_bounds(raw: Option<&str>, default: u16, bounds: (u16, u16)) -> u16 {
        raw.and_then(|value| value.trim().parse::<u16>().ok())
            .filter(|value| (bounds.0..=bounds.1).contains(value))
            .unwrap_or(default)
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_valid() {
        let config = SiteConfig::from_values(None, None);
        let endpoint = config.contact_endpoint.expect("default endpoint parses");
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn blank_endpoint_falls_back_to_default() {
        let config = SiteConfig::from_values(Some("   "), Some("debug"));
        assert_eq!(
            config.contact_endpoint.map(|url| url.to_string()),
            Ok(DEFAULT_CONTACT_ENDPOINT.to_string())
        );
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let result = parse_contact_endpoint("mailto:me@example.com");
        assert!(matches!(result, Err(ConfigError::UnsupportedScheme { .. })));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let result = parse_contact_endpoint("not a url");
        assert!(matches!(result, Err(ConfigError::MalformedEndpoint { .. })));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn server_config_uses_defaults_for_invalid_values() {
        let config = ServerConfig::from_lookup(|name| match name {
            "PORT" => Some("0".to_string()),
            "LOG_LEVEL" => Some("loud".to_string()),
            _ => None,
        });

        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, std::path::PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn server_config_reads_overrides() {
        let config = ServerConfig::from_lookup(|name| match name {
            "PORT" => Some(" 3000 ".to_string()),
            "SITE_DIST_DIR" => Some("public".to_string()),
            "LOG_LEVEL" => Some("warn".to_string()),
            _ => None,
        });

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, std::path::PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }
}

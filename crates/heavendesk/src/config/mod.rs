use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::assessment::{DeliverySettings, ScoringConfig};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub notifications: NotificationConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");

        let notifications = NotificationConfig {
            base_url: var_or("APP_BASE_URL", "https://heavendeskai.com")
                .trim_end_matches('/')
                .to_string(),
            resend_api_key: non_empty_var("RESEND_API_KEY"),
            from: var_or("NOTIFY_FROM", "HeavenDesk.ai <hello@heavendeskai.com>"),
            operator_email: match env::var("NOTIFY_OPERATOR_EMAIL") {
                Ok(value) => Some(value.trim().to_string()).filter(|value| !value.is_empty()),
                Err(_) => Some("ja@heavendeskai.com".to_string()),
            },
            booking_url: var_or("CALENDLY_URL", "https://calendly.com/hello-heavendeskai"),
        };

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            weakest_count: count_var("SCORING_WEAKEST_COUNT", defaults.weakest_count)?,
            recommendation_cap: count_var(
                "SCORING_RECOMMENDATION_CAP",
                defaults.recommendation_cap,
            )?,
            ..defaults
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            notifications,
            scoring,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn count_var(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match non_empty_var(name) {
        Some(value) => value
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidCount { name }),
        None => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Result links and e-mail delivery.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub base_url: String,
    /// E-mail is only sent through Resend when a key is present.
    pub resend_api_key: Option<String>,
    pub from: String,
    pub operator_email: Option<String>,
    pub booking_url: String,
}

impl NotificationConfig {
    pub fn delivery_settings(&self) -> DeliverySettings {
        DeliverySettings {
            base_url: self.base_url.clone(),
            operator_email: self.operator_email.clone(),
            booking_url: self.booking_url.clone(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidCount { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidCount { name } => {
                write!(f, "{name} must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidCount { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_BASE_URL",
            "RESEND_API_KEY",
            "NOTIFY_FROM",
            "NOTIFY_OPERATOR_EMAIL",
            "CALENDLY_URL",
            "SCORING_WEAKEST_COUNT",
            "SCORING_RECOMMENDATION_CAP",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.notifications.base_url, "https://heavendeskai.com");
        assert!(config.notifications.resend_api_key.is_none());
        assert_eq!(
            config.notifications.operator_email.as_deref(),
            Some("ja@heavendeskai.com")
        );
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed_and_operator_can_be_disabled() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_BASE_URL", "https://staging.example.com/");
        env::set_var("NOTIFY_OPERATOR_EMAIL", " ");
        let config = AppConfig::load().expect("config loads");
        let delivery = config.notifications.delivery_settings();
        assert_eq!(delivery.base_url, "https://staging.example.com");
        assert!(delivery.operator_email.is_none());
    }

    #[test]
    fn scoring_overrides_are_validated() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SCORING_WEAKEST_COUNT", "2");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.weakest_count, 2);
        assert_eq!(config.scoring.recommendation_cap, 5);

        env::set_var("SCORING_RECOMMENDATION_CAP", "many");
        let err = AppConfig::load().expect_err("cap must be numeric");
        assert!(matches!(
            err,
            ConfigError::InvalidCount {
                name: "SCORING_RECOMMENDATION_CAP"
            }
        ));
        reset_env();
    }
}

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::workflows::eligibility::identity::IdentityConfig;
use crate::workflows::eligibility::EligibilityConfig;

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
    pub eligibility: EligibilityConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = IdentityConfig::default();
        let pivot_year = match env::var("PESI_ID_PIVOT_YEAR") {
            Ok(raw) => raw
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|year| *year <= 99)
                .ok_or(ConfigError::InvalidPivotYear)?,
            Err(_) => defaults.pivot_year,
        };
        let enforce_citizenship_digit = flag(
            "PESI_ENFORCE_CITIZENSHIP_DIGIT",
            defaults.enforce_citizenship_digit,
        )?;
        let enforce_checksum = flag("PESI_ENFORCE_ID_CHECKSUM", defaults.enforce_checksum)?;

        let eligibility = EligibilityConfig {
            identity: IdentityConfig {
                pivot_year,
                enforce_citizenship_digit,
                enforce_checksum,
            },
            ..EligibilityConfig::default()
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            eligibility,
        })
    }
}

fn flag(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name }),
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

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPivotYear,
    InvalidFlag { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPivotYear => {
                write!(f, "PESI_ID_PIVOT_YEAR must be a two digit year (0-99)")
            }
            ConfigError::InvalidFlag { name } => {
                write!(f, "{name} must be one of true/false/yes/no/on/off/1/0")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidPivotYear
            | ConfigError::InvalidFlag { .. } => None,
        }
    }
}

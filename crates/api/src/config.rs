//! Application configuration loaded from environment variables.

use domain::NotificationSettings;
use mailer::ResendProvider;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `RESEND_API_KEY` — provider API key (no default)
/// - `RESEND_API_URL` — provider base URL (default: `"https://api.resend.com"`)
/// - `ORDER_EMAIL_FROM` — notification sender
/// - `ORDER_EMAIL_TO` — comma-separated notification recipients
/// - `ORDER_BRAND_NAME` — name shown in the notification
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub notification: NotificationSettings,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or empty values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let to = get("ORDER_EMAIL_TO")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|addr| !addr.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.notification.to);

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: get("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or_default(),
            resend_api_key: get("RESEND_API_KEY"),
            resend_api_url: get("RESEND_API_URL").unwrap_or(defaults.resend_api_url),
            notification: NotificationSettings {
                from: get("ORDER_EMAIL_FROM").unwrap_or(defaults.notification.from),
                to,
                brand: get("ORDER_BRAND_NAME").unwrap_or(defaults.notification.brand),
            },
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            resend_api_key: None,
            resend_api_url: ResendProvider::DEFAULT_BASE_URL.to_string(),
            notification: NotificationSettings::default(),
        }
    }
}

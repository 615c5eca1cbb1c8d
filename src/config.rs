use anyhow::{Context, Result};

pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone)]
pub struct Config {
    // Deployment
    pub environment: String,

    // Server
    pub bind_address: String,
    pub port: u16,

    // Translation provider
    pub translate_api_url: String,
    /// `None` leaves outbound calls without a timeout
    pub translate_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            translate_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),

            // Server
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("Invalid PORT: {}", v))?,
                Err(_) => defaults.port,
            },

            // Translation provider
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or(defaults.translate_api_url),
            translate_timeout_secs: match std::env::var("TRANSLATE_TIMEOUT_SECS") {
                Ok(v) => Some(
                    v.parse()
                        .with_context(|| format!("Invalid TRANSLATE_TIMEOUT_SECS: {}", v))?,
                ),
                Err(_) => None,
            },
        })
    }

    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub share_token_secret: String,
    pub share_token_ttl_minutes: i64,
    pub ayushman_verify_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            port: parse_var("PORT", 3000),
            share_token_secret: env::var("SHARE_TOKEN_SECRET")
                .unwrap_or_else(|_| {
                    warn!("SHARE_TOKEN_SECRET not set, using empty value");
                    String::new()
                }),
            share_token_ttl_minutes: parse_var("SHARE_TOKEN_TTL_MINUTES", 60),
            ayushman_verify_delay_ms: parse_var("AYUSHMAN_VERIFY_DELAY_MS", 400),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    /// Share codes cannot be issued without a signing secret.
    pub fn is_configured(&self) -> bool {
        !self.share_token_secret.is_empty()
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

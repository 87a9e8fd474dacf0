use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_FROM_EMAIL: &str = "contact@anipotts.com";
pub const DEFAULT_SITE_URL: &str = "https://anipotts.com";
pub const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 10;

/// Address shown to visitors when the contact form cannot be delivered.
pub const FALLBACK_CONTACT_EMAIL: &str = "ani@anipotts.com";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidDuration { key: &'static str, value: String },
}

/// Credentials for the transactional email provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
    pub timeout: Duration,
}

/// Site configuration read from the environment.
///
/// | Env Var                      | Default                  |
/// |------------------------------|--------------------------|
/// | `RESEND_API_KEY`             | unset (relay disabled)   |
/// | `RESEND_TO_EMAIL`            | unset (relay disabled)   |
/// | `RESEND_FROM_EMAIL`          | `contact@anipotts.com`   |
/// | `SITE_URL`                   | `https://anipotts.com`   |
/// | `CONTACT_RELAY_TIMEOUT_SECS` | `10`                     |
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_url: String,
    /// `None` turns the contact endpoint into a no-op success.
    pub relay: Option<RelayConfig>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let site_url = get("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout = match get("CONTACT_RELAY_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDuration {
                    key: "CONTACT_RELAY_TIMEOUT_SECS",
                    value: raw.clone(),
                })?,
            None => DEFAULT_RELAY_TIMEOUT_SECS,
        };

        let relay = match (get("RESEND_API_KEY"), get("RESEND_TO_EMAIL")) {
            (Some(api_key), Some(to)) => Some(RelayConfig {
                api_key,
                to,
                from: get("RESEND_FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
                timeout: Duration::from_secs(timeout),
            }),
            _ => None,
        };

        Ok(Self { site_url, relay })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            relay: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let env = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        SiteConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_disable_relay() {
        let config = config_from(&[]).expect("defaults are valid");
        assert_eq!(config, SiteConfig::default());
        assert!(config.relay.is_none());
    }

    #[test]
    fn test_relay_needs_key_and_recipient() {
        let key_only = config_from(&[("RESEND_API_KEY", "re_123")]).expect("valid");
        assert!(key_only.relay.is_none());

        let blank_to = config_from(&[("RESEND_API_KEY", "re_123"), ("RESEND_TO_EMAIL", "  ")])
            .expect("valid");
        assert!(blank_to.relay.is_none());

        let full = config_from(&[
            ("RESEND_API_KEY", "re_123"),
            ("RESEND_TO_EMAIL", "me@example.com"),
            ("CONTACT_RELAY_TIMEOUT_SECS", "3"),
        ])
        .expect("valid");
        let relay = full.relay.expect("relay configured");
        assert_eq!(relay.from, DEFAULT_FROM_EMAIL);
        assert_eq!(relay.to, "me@example.com");
        assert_eq!(relay.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_site_url_trailing_slash_trimmed() {
        let config = config_from(&[("SITE_URL", "https://example.com/")]).expect("valid");
        assert_eq!(config.site_url, "https://example.com");
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        let err = config_from(&[("CONTACT_RELAY_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                key: "CONTACT_RELAY_TIMEOUT_SECS",
                value: "soon".to_string()
            }
        );
    }
}

pub mod cli;
pub mod env;

pub use env::{EnvField, EnvValues, FromEnv};

use std::fmt;

/// Settings resolved from the environment once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_key: String,
    api_secret: String,
}

impl AppConfig {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl FromEnv for AppConfig {
    const FIELDS: &'static [EnvField] = &[
        EnvField::required("API_KEY"),
        EnvField::required("API_SECRET"),
    ];

    fn from_values(mut values: EnvValues) -> Self {
        Self {
            api_key: values.take("API_KEY"),
            api_secret: values.take("API_SECRET"),
        }
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_secret", &redact(&self.api_secret))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AppConfig::from_lookup(|name| match name {
            "API_KEY" => Some("abc123".to_string()),
            _ => None,
        });

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("abc123"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("<unset>"));
    }
}

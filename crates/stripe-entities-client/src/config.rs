//! Gateway credentials configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::StripeError;
use crate::gateway::StripeGateway;

/// Candidate locations for the secrets file, relative to the working
/// directory the host process runs in.
const SECRET_PATHS: [&str; 3] = [
    ".secrets/stripe.json",
    "../.secrets/stripe.json",
    "../../.secrets/stripe.json",
];

/// Credentials and endpoint configuration for the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeConfig {
    /// Secret API key (`sk_test_...` or `sk_live_...`).
    pub api_key: String,

    /// Base URL override, for mock servers and test proxies.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Secrets file structure.
#[derive(Debug, Deserialize)]
struct StripeSecrets {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    api_key_test: Option<String>,
}

impl StripeConfig {
    /// Load configuration from the environment.
    ///
    /// Checks the `STRIPE_API_KEY_TEST` and `STRIPE_API_KEY` environment
    /// variables first, then falls back to a `.secrets/stripe.json` file
    /// (preferring its `api_key_test` entry). Returns `None` when no
    /// credentials are found anywhere.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        if let Ok(api_key) =
            std::env::var("STRIPE_API_KEY_TEST").or_else(|_| std::env::var("STRIPE_API_KEY"))
        {
            return Some(Self {
                api_key,
                base_url: std::env::var("STRIPE_BASE_URL").ok(),
            });
        }

        for path in &SECRET_PATHS {
            if let Ok(secrets) = load_secrets_file(path) {
                if let Some(api_key) = secrets.api_key_test.or(secrets.api_key) {
                    tracing::info!(path = %path, "loaded stripe secrets from file");
                    return Some(Self {
                        api_key,
                        base_url: None,
                    });
                }
            }
        }

        tracing::debug!("no stripe credentials in environment or secrets files");
        None
    }

    /// Build a gateway from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn gateway(&self) -> Result<StripeGateway, StripeError> {
        match &self.base_url {
            Some(base_url) => StripeGateway::with_base_url(&self.api_key, base_url),
            None => StripeGateway::new(&self.api_key),
        }
    }
}

/// Load secrets from a JSON file.
fn load_secrets_file(path: &str) -> Result<StripeSecrets, std::io::Error> {
    let path = Path::new(path);
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_file_prefers_test_key() {
        let secrets: StripeSecrets = serde_json::from_str(
            r#"{"api_key": "sk_live_xxx", "api_key_test": "sk_test_xxx"}"#,
        )
        .unwrap();
        let api_key = secrets.api_key_test.or(secrets.api_key).unwrap();
        assert_eq!(api_key, "sk_test_xxx");
    }

    #[test]
    fn config_builds_gateway_with_override() {
        let config = StripeConfig {
            api_key: "sk_test_xxx".into(),
            base_url: Some("http://localhost:12111".into()),
        };
        assert!(config.gateway().is_ok());
    }
}

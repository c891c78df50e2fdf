/*
[INPUT]:  Environment variables or YAML configuration file
[OUTPUT]: Parsed API credentials and a ready-to-use client
[POS]:    Configuration layer - credential loading
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};

use crate::http::{BittrexClient, BittrexError, ClientConfig, Credentials, Result};

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "BITTREX_API_KEY";
/// Environment variable holding the API secret
pub const ENV_API_SECRET: &str = "BITTREX_API_SECRET";

/// API credential configuration.
///
/// The host application supplies `key` and `secret` either through the
/// environment or a YAML file copied from `config/bittrex.example.yaml`.
#[derive(Clone, Deserialize, Serialize)]
pub struct BittrexConfig {
    pub key: String,
    pub secret: String,
}

// Credentials must never leak through logs
impl std::fmt::Debug for BittrexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexConfig")
            .field("key", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl BittrexConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BittrexError::Config(format!("failed to read {path}: {e}")))?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| BittrexError::Config(format!("invalid configuration: {e}")))
    }

    /// Load configuration from `BITTREX_API_KEY` / `BITTREX_API_SECRET`
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(ENV_API_KEY)
            .map_err(|_| BittrexError::Config(format!("{ENV_API_KEY} is not set")))?;
        let secret = std::env::var(ENV_API_SECRET)
            .map_err(|_| BittrexError::Config(format!("{ENV_API_SECRET} is not set")))?;
        Ok(Self { key, secret })
    }

    /// Construct a client carrying these credentials
    pub fn into_client(self) -> Result<BittrexClient> {
        self.into_client_with_config(ClientConfig::default())
    }

    /// Construct a client with custom HTTP configuration
    pub fn into_client_with_config(self, config: ClientConfig) -> Result<BittrexClient> {
        let mut client = BittrexClient::with_config(config)?;
        client.set_credentials(Credentials::new(self.key, self.secret));
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_str() {
        let config = BittrexConfig::from_yaml_str("key: my-key\nsecret: my-secret\n")
            .expect("parse config");
        assert_eq!(config.key, "my-key");
        assert_eq!(config.secret, "my-secret");
    }

    #[test]
    fn test_from_yaml_str_rejects_missing_fields() {
        let err = BittrexConfig::from_yaml_str("key: only-a-key\n").expect_err("should fail");
        assert!(matches!(err, BittrexError::Config(_)));
    }

    #[test]
    fn test_example_config_template_parses() {
        let template = include_str!("../../../config/bittrex.example.yaml");
        let config = BittrexConfig::from_yaml_str(template).expect("template parses");
        assert!(!config.key.is_empty());
        assert!(!config.secret.is_empty());
    }

    #[test]
    fn test_debug_is_redacted() {
        let config = BittrexConfig {
            key: "visible-key".to_string(),
            secret: "visible-secret".to_string(),
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("visible-key"));
        assert!(!rendered.contains("visible-secret"));
    }

    #[test]
    fn test_into_client_sets_credentials() {
        let config = BittrexConfig {
            key: "my-key".to_string(),
            secret: "my-secret".to_string(),
        };
        let client = config.into_client().expect("client init");
        let credentials = client.credentials().expect("credentials set");
        assert_eq!(credentials.key, "my-key");
        assert_eq!(credentials.secret, "my-secret");
    }
}

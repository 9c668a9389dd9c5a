//! Configuration management for the Swydo client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Swydo client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Swydo API key
  pub api_key: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the Swydo API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key =
      env::var("SWYDO_API_KEY").map_err(|_| Error::ApiKey("SWYDO_API_KEY not set".to_string()))?;

    let timeout_secs = env::var("SWYDO_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SWYDO_TIMEOUT_SECS".to_string()))?;

    let base_url = env::var("SWYDO_BASE_URL").unwrap_or_else(|_| crate::SWYDO_BASE_URL.to_string());

    Ok(Config { api_key, timeout_secs, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::SWYDO_BASE_URL.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_default_with_key() {
    let config = Config::default_with_key("test_key".to_string());
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.base_url, "https://api.swydo.com/v1");
  }

  #[test]
  fn test_config_from_env() {
    env::remove_var("SWYDO_API_KEY");
    env::remove_var("SWYDO_TIMEOUT_SECS");
    env::remove_var("SWYDO_BASE_URL");

    // a missing key is an ApiKey error, not a panic or env passthrough
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, crate::Error::ApiKey(_)));

    env::set_var("SWYDO_API_KEY", "test_key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.timeout_secs, 30);
  }
}

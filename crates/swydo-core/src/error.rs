use thiserror::Error;

/// The main error type for swydo-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Invalid argument supplied by the caller
  #[error("Validation error: {0}")]
  Validation(String),

  /// HTTP transport error (connection, timeout, malformed URL)
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-2xx response from the Swydo API
  ///
  /// Carries the HTTP status and, when the response body is a Swydo
  /// error document, the machine-readable error code (e.g.
  /// `DATASOURCE_NOT_FOUND`).
  #[error("API error ({status}): {message}")]
  Api {
    /// HTTP status code of the response
    status: u16,
    /// Swydo error code from the response body, when present
    code: Option<String>,
    /// Human-readable message, or the raw body when not JSON
    message: String,
  },
}

impl Error {
  /// HTTP status code, for `Api` errors.
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Api { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Swydo error code from the response body, for `Api` errors.
  pub fn api_code(&self) -> Option<&str> {
    match self {
      Error::Api { code, .. } => code.as_deref(),
      _ => None,
    }
  }

  /// True when the remote service answered 404. Lets callers treat
  /// absence as a normal outcome instead of a failure.
  pub fn is_not_found(&self) -> bool {
    self.status() == Some(404)
  }
}

/// Result type alias for swydo-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_accessors() {
    let err = Error::Api {
      status: 404,
      code: Some("DATASOURCE_NOT_FOUND".to_string()),
      message: "No data source configured".to_string(),
    };

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.api_code(), Some("DATASOURCE_NOT_FOUND"));
    assert!(err.is_not_found());
  }

  #[test]
  fn test_non_api_error_has_no_status() {
    let err = Error::Validation("teamId must be a non-empty string".to_string());
    assert_eq!(err.status(), None);
    assert!(!err.is_not_found());
  }

  #[test]
  fn test_api_error_display() {
    let err = Error::Api { status: 401, code: None, message: "Unauthorized".to_string() };
    assert_eq!(err.to_string(), "API error (401): Unauthorized");
  }
}

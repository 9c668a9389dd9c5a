pub mod config;
pub mod enums;
pub mod error;

pub use config::Config;
pub use enums::{ComparePeriod, Provider, UserState};
pub use error::{Error, Result};

/// Base URL for the Swydo API
pub const SWYDO_BASE_URL: &str = "https://api.swydo.com/v1";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Username sent alongside the API key in HTTP Basic auth
pub const BASIC_AUTH_USER: &str = "API";

/// Validate that an identifier argument is a non-empty string.
///
/// The Swydo API addresses every resource by server-assigned string ids;
/// an empty id would produce a malformed path, so it is rejected locally
/// before any request is issued.
pub fn require_id(name: &str, value: &str) -> Result<()> {
  if value.is_empty() {
    return Err(Error::Validation(format!("{name} must be a non-empty string")));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_require_id_rejects_empty() {
    let err = require_id("teamId", "").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("teamId"));
  }

  #[test]
  fn test_require_id_accepts_non_empty() {
    assert!(require_id("teamId", "5ba32a8b0e8fe03bbf413f0b").is_ok());
  }
}

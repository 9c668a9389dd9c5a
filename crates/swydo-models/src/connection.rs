//! Connection resource
//!
//! A connection is an authorized link between a team member and an
//! external provider account (Facebook, Google, ...). Data sources
//! reference a connection to know which credentials to pull with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An authorized provider connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
  /// Server-assigned connection identifier
  pub id: String,

  /// Provider this connection authorizes against
  #[serde(skip_serializing_if = "Option::is_none")]
  pub provider_id: Option<String>,

  /// Team member that owns the connection
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_id: Option<String>,

  /// Display name (usually the external account name)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Undocumented fields, preserved as-is
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_connection_camel_case_fields() {
    let json = r#"{"id": "c1", "providerId": "googleAnalytics", "userId": "u1"}"#;
    let conn: Connection = serde_json::from_str(json).unwrap();
    assert_eq!(conn.provider_id.as_deref(), Some("googleAnalytics"));
    assert_eq!(conn.user_id.as_deref(), Some("u1"));
    assert!(conn.extra.is_empty());
  }
}

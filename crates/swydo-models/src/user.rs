//! User resource

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use swydo_core::UserState;

/// A user belonging to a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  /// Server-assigned user identifier
  pub id: String,

  /// Email address
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  /// Display name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Membership state (revoked, pending, or active)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<UserState>,

  /// Undocumented fields, preserved as-is
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_user_state_parses_from_wire_form() {
    let json = r#"{"id": "u1", "email": "pat@example.com", "state": "active"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.state, Some(UserState::Active));
    assert!(user.name.is_none());
  }
}

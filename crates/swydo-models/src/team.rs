//! Team resource

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Swydo team (the account-level container for all other resources)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
  /// Server-assigned team identifier
  pub id: String,

  /// Display name
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
  fn test_team_preserves_unknown_fields() {
    let json = r#"{"id": "t1", "name": "Acme", "paymentPlan": "pro", "cancelled": false}"#;
    let team: Team = serde_json::from_str(json).unwrap();

    assert_eq!(team.id, "t1");
    assert_eq!(team.name.as_deref(), Some("Acme"));
    assert_eq!(team.extra["paymentPlan"], "pro");

    // id round-trips unchanged, extras included
    let back: Value = serde_json::to_value(&team).unwrap();
    assert_eq!(back, serde_json::from_str::<Value>(json).unwrap());
  }
}

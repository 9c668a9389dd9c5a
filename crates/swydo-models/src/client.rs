//! Client resource (the end-customer reports are produced for)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A client of the team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
  /// Server-assigned client identifier
  pub id: String,

  /// Display name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// Free-form description
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  /// Contact email
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  /// Archived clients cannot be used until unarchived
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archived: Option<bool>,

  /// Undocumented fields, preserved as-is
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Body for creating a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCreate {
  /// Display name (required)
  pub name: String,

  /// Free-form description
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  /// Contact email
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
}

impl ClientCreate {
  /// Create a body with only the required name set
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), description: None, email: None }
  }

  /// Set the description
  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  /// Set the contact email
  pub fn email(mut self, email: impl Into<String>) -> Self {
    self.email = Some(email.into());
    self
  }
}

/// Body for updating a client; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
  /// New display name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// New description
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  /// New contact email
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
}

impl ClientUpdate {
  /// Create an empty update
  pub fn new() -> Self {
    Self::default()
  }

  /// Set a new display name
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Set a new description
  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  /// Set a new contact email
  pub fn email(mut self, email: impl Into<String>) -> Self {
    self.email = Some(email.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_create_omits_unset_fields() {
    let body = ClientCreate::new("Acme");
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"name": "Acme"}));
  }

  #[test]
  fn test_client_create_builder() {
    let body = ClientCreate::new("Acme").description("Retail").email("ops@acme.test");
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
      json,
      serde_json::json!({"name": "Acme", "description": "Retail", "email": "ops@acme.test"})
    );
  }

  #[test]
  fn test_client_update_empty_serializes_to_empty_object() {
    let json = serde_json::to_value(ClientUpdate::new()).unwrap();
    assert_eq!(json, serde_json::json!({}));
  }

  #[test]
  fn test_client_archived_flag() {
    let client: Client =
      serde_json::from_str(r#"{"id": "c1", "name": "Acme", "archived": true}"#).unwrap();
    assert_eq!(client.archived, Some(true));
  }
}

//! Data-source resources
//!
//! A data source ties a client to one external account (an Ads account,
//! an Analytics profile, ...) through a connection. Each provider has
//! its own scope shape; responses keep the scope opaque.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A client's configured data sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDataSources {
  /// Client identifier these data sources belong to
  pub id: String,

  /// Configured data sources, one per provider at most
  #[serde(default = "Vec::new")]
  pub data_sources: Vec<DataSource>,

  /// Undocumented fields, preserved as-is
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// A single configured data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
  /// Provider this data source pulls from
  #[serde(skip_serializing_if = "Option::is_none")]
  pub provider_id: Option<String>,

  /// Connection whose credentials are used
  #[serde(skip_serializing_if = "Option::is_none")]
  pub connection_id: Option<String>,

  /// Provider-specific account selection, kept opaque
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scope: Option<Map<String, Value>>,

  /// Undocumented fields, preserved as-is
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Body for setting a client data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceCreate<S> {
  /// Connection whose credentials are used
  pub connection_id: String,

  /// Provider-specific account selection
  pub scope: S,
}

impl<S> DataSourceCreate<S> {
  /// Build a set-data-source body
  pub fn new(connection_id: impl Into<String>, scope: S) -> Self {
    Self { connection_id: connection_id.into(), scope }
  }
}

/// Scope for a Facebook Ads data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookAdsScope {
  /// Ad account id
  pub id: String,

  /// Ad account name
  pub name: String,

  /// Reporting currency override
  #[serde(skip_serializing_if = "Option::is_none")]
  pub currency_code: Option<String>,
}

impl FacebookAdsScope {
  /// Scope for the given ad account
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self { id: id.into(), name: name.into(), currency_code: None }
  }

  /// Set the reporting currency
  pub fn currency_code(mut self, code: impl Into<String>) -> Self {
    self.currency_code = Some(code.into());
    self
  }
}

/// Scope for a Facebook Graph (page) data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookGraphScope {
  /// Graph object id
  pub id: String,

  /// Display name
  pub name: String,

  /// Facebook page id
  pub page_id: String,
}

impl FacebookGraphScope {
  /// Scope for the given page
  pub fn new(id: impl Into<String>, name: impl Into<String>, page_id: impl Into<String>) -> Self {
    Self { id: id.into(), name: name.into(), page_id: page_id.into() }
  }
}

/// Scope for a Google AdWords data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAdWordsScope {
  /// AdWords client customer id
  pub client_id: String,

  /// Account name
  pub name: String,

  /// Reporting currency override
  #[serde(skip_serializing_if = "Option::is_none")]
  pub currency_code: Option<String>,
}

impl GoogleAdWordsScope {
  /// Scope for the given customer account
  pub fn new(client_id: impl Into<String>, name: impl Into<String>) -> Self {
    Self { client_id: client_id.into(), name: name.into(), currency_code: None }
  }

  /// Set the reporting currency
  pub fn currency_code(mut self, code: impl Into<String>) -> Self {
    self.currency_code = Some(code.into());
    self
  }
}

/// Scope for a Google Analytics data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAnalyticsScope {
  /// Profile (view) display name
  pub name: String,

  /// Analytics account id
  pub account_id: String,

  /// Analytics account name
  pub account_name: String,

  /// Web property id
  pub web_property_id: String,

  /// Profile (view) id
  pub profile_id: String,

  /// Reporting currency override
  #[serde(skip_serializing_if = "Option::is_none")]
  pub currency_code: Option<String>,
}

impl GoogleAnalyticsScope {
  /// Scope for the given profile
  pub fn new(
    name: impl Into<String>,
    account_id: impl Into<String>,
    account_name: impl Into<String>,
    web_property_id: impl Into<String>,
    profile_id: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      account_id: account_id.into(),
      account_name: account_name.into(),
      web_property_id: web_property_id.into(),
      profile_id: profile_id.into(),
      currency_code: None,
    }
  }

  /// Set the reporting currency
  pub fn currency_code(mut self, code: impl Into<String>) -> Self {
    self.currency_code = Some(code.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_data_source_create_wire_shape() {
    let body = DataSourceCreate::new("conn1", FacebookAdsScope::new("act_1", "Acme Ads"));
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "connectionId": "conn1",
        "scope": {"id": "act_1", "name": "Acme Ads"}
      })
    );
  }

  #[test]
  fn test_analytics_scope_camel_case() {
    let scope = GoogleAnalyticsScope::new("All traffic", "a1", "Acme", "UA-1", "p1")
      .currency_code("EUR");
    let json = serde_json::to_value(&scope).unwrap();
    assert_eq!(json["accountId"], "a1");
    assert_eq!(json["webPropertyId"], "UA-1");
    assert_eq!(json["profileId"], "p1");
    assert_eq!(json["currencyCode"], "EUR");
  }

  #[test]
  fn test_client_data_sources_defaults_empty() {
    let ds: ClientDataSources = serde_json::from_str(r#"{"id": "c1"}"#).unwrap();
    assert!(ds.data_sources.is_empty());
  }

  #[test]
  fn test_data_source_scope_stays_opaque() {
    let json = r#"{
      "providerId": "googleAnalytics",
      "connectionId": "conn1",
      "scope": {"profileId": "p1", "custom": 42}
    }"#;
    let ds: DataSource = serde_json::from_str(json).unwrap();
    let scope = ds.scope.unwrap();
    assert_eq!(scope["custom"], 42);
  }
}

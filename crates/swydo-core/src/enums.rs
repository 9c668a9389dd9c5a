//! Closed sets of valid string values used as Swydo request parameters
//!
//! The remote API only accepts these exact literals; using enums keeps
//! invalid values from ever reaching the wire.

use serde::{Deserialize, Serialize};

/// Period a Report or ReportTemplate compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparePeriod {
  /// Compare to the previous period
  #[serde(rename = "previous")]
  Previous,

  /// Compare to the same period last year
  #[serde(rename = "lastYear")]
  LastYear,

  /// Compare to the previous month
  #[serde(rename = "previousMonth")]
  PreviousMonth,
}

impl std::fmt::Display for ComparePeriod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ComparePeriod::Previous => write!(f, "previous"),
      ComparePeriod::LastYear => write!(f, "lastYear"),
      ComparePeriod::PreviousMonth => write!(f, "previousMonth"),
    }
  }
}

/// State of a User within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserState {
  /// Access has been revoked
  Revoked,
  /// Invitation sent, not yet accepted
  Pending,
  /// Active member
  Active,
}

impl std::fmt::Display for UserState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UserState::Revoked => write!(f, "revoked"),
      UserState::Pending => write!(f, "pending"),
      UserState::Active => write!(f, "active"),
    }
  }
}

/// Data-source providers supported by the Swydo API
///
/// `Display` yields the path segment under
/// `/teams/{teamId}/clients/{clientId}/dataSources/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
  /// Facebook Ads accounts
  FacebookAds,
  /// Facebook pages (Graph API)
  FacebookGraph,
  /// Google AdWords accounts
  GoogleAdWords,
  /// Google Analytics profiles
  GoogleAnalytics,
}

impl Provider {
  /// Path segment for this provider
  pub const fn as_str(self) -> &'static str {
    match self {
      Provider::FacebookAds => "facebookAds",
      Provider::FacebookGraph => "facebookGraph",
      Provider::GoogleAdWords => "googleAdWords",
      Provider::GoogleAnalytics => "googleAnalytics",
    }
  }
}

impl std::fmt::Display for Provider {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_compare_period_wire_form() {
    assert_eq!(ComparePeriod::Previous.to_string(), "previous");
    assert_eq!(ComparePeriod::LastYear.to_string(), "lastYear");
    assert_eq!(ComparePeriod::PreviousMonth.to_string(), "previousMonth");
  }

  #[test]
  fn test_compare_period_serde_matches_display() {
    for period in
      [ComparePeriod::Previous, ComparePeriod::LastYear, ComparePeriod::PreviousMonth]
    {
      let json = serde_json::to_string(&period).unwrap();
      assert_eq!(json, format!("\"{period}\""));
    }
  }

  #[test]
  fn test_user_state_round_trip() {
    let state: UserState = serde_json::from_str("\"pending\"").unwrap();
    assert_eq!(state, UserState::Pending);
    assert_eq!(serde_json::to_string(&state).unwrap(), "\"pending\"");
  }

  #[test]
  fn test_provider_path_segment() {
    assert_eq!(Provider::GoogleAnalytics.to_string(), "googleAnalytics");
    assert_eq!(Provider::FacebookAds.to_string(), "facebookAds");
  }
}

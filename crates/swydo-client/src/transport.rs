//! HTTP transport layer for Swydo API requests

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use swydo_core::{Config, Error, Result, BASIC_AUTH_USER};
use swydo_models::Page;
use tracing::{debug, error, instrument};
use url::Url;

/// Error document returned by the Swydo API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
  error: Option<String>,
  message: Option<String>,
}

/// HTTP transport layer for making requests to the Swydo API
///
/// Injects HTTP Basic authentication (username `API`, the API key as
/// password) on every request. Each call is a single request/response
/// round trip; there are no retries.
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("swydo-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
      timeout: Duration::from_secs(config.timeout_secs),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.swydo.test/v1".to_string(),
      api_key: "test_key".to_string(),
      timeout: Duration::from_secs(30),
    }
  }

  /// Make a GET request and decode the JSON response
  #[instrument(skip(self))]
  pub async fn get<T>(&self, segments: &[&str], query: &[(&str, String)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(segments, query)?;
    debug!("GET {}", url);

    let response = self.execute(self.client.get(url)).await?;
    Self::parse_json(response).await
  }

  /// Fetch every page of a list endpoint and collect the items
  ///
  /// Follows the Swydo `skip`/`total` paging protocol: each page is
  /// requested with `skip` set to the number of items already seen,
  /// until that number reaches the reported total. An empty page ends
  /// the loop regardless of what `total` claims.
  #[instrument(skip(self))]
  pub async fn get_all<T>(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Vec<T>>
  where
    T: DeserializeOwned,
  {
    let mut items: Vec<T> = Vec::new();

    loop {
      let mut page_query: Vec<(&str, String)> = query.to_vec();
      page_query.push(("skip", items.len().to_string()));

      let page: Page<T> = self.get(segments, &page_query).await?;
      if page.items.is_empty() {
        break;
      }

      items.extend(page.items);
      if items.len() as u64 >= page.total {
        break;
      }
    }

    Ok(items)
  }

  /// Make a POST request with a JSON body and decode the response
  #[instrument(skip(self, body))]
  pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let url = self.build_url(segments, &[])?;
    debug!("POST {}", url);

    let response = self.execute(self.client.post(url).json(body)).await?;
    Self::parse_json(response).await
  }

  /// Make a bodyless POST request, discarding the response body
  ///
  /// Used for action endpoints (archive, share, ...) that return no
  /// useful document.
  #[instrument(skip(self))]
  pub async fn post_action(&self, segments: &[&str]) -> Result<()> {
    let url = self.build_url(segments, &[])?;
    debug!("POST {}", url);

    self.execute(self.client.post(url)).await?;
    Ok(())
  }

  /// Make a PATCH request with a JSON body and decode the response
  #[instrument(skip(self, body))]
  pub async fn patch<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let url = self.build_url(segments, &[])?;
    debug!("PATCH {}", url);

    let response = self.execute(self.client.patch(url).json(body)).await?;
    Self::parse_json(response).await
  }

  /// Make a DELETE request, discarding the response body
  #[instrument(skip(self))]
  pub async fn delete(&self, segments: &[&str]) -> Result<()> {
    let url = self.build_url(segments, &[])?;
    debug!("DELETE {}", url);

    self.execute(self.client.delete(url)).await?;
    Ok(())
  }

  /// Build the full URL for an API request
  ///
  /// Each path segment is percent-encoded, so an identifier containing
  /// `/`, `?`, or whitespace cannot rewrite the request path.
  fn build_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
    let mut url =
      Url::parse(&self.base_url).map_err(|e| Error::Http(format!("Invalid base URL: {e}")))?;

    url
      .path_segments_mut()
      .map_err(|_| Error::Http(format!("Base URL cannot hold a path: {}", self.base_url)))?
      .extend(segments);

    if !query.is_empty() {
      let mut pairs = url.query_pairs_mut();
      for (key, value) in query {
        pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// Send the request with auth attached and check the response status
  async fn execute(&self, request: RequestBuilder) -> Result<Response> {
    let response = request
      .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {e}")))?;

    let status = response.status();
    if status.is_success() {
      debug!("Request successful with status: {}", status);
      return Ok(response);
    }

    error!("Request failed with status: {}", status);
    let body = response.text().await.unwrap_or_default();
    Err(Self::api_error(status.as_u16(), &body))
  }

  /// Map a non-2xx response to a typed error carrying the status code
  ///
  /// Swydo error documents look like `{"error": CODE, "message": ...}`;
  /// anything else keeps the raw body as the message.
  fn api_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ApiErrorBody>(body) {
      Ok(parsed) => Error::Api {
        status,
        code: parsed.error,
        message: parsed.message.unwrap_or_else(|| body.to_string()),
      },
      Err(_) => Error::Api { status, code: None, message: body.to_string() },
    }
  }

  /// Decode a JSON response body
  async fn parse_json<T>(response: Response) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

    debug!("Response body length: {} bytes", text.len());

    match serde_json::from_str::<T>(&text) {
      Ok(data) => Ok(data),
      Err(e) => {
        error!(
          "Failed to parse JSON response: {}. Response text (first 200 chars): {}",
          e,
          Self::truncate_chars(&text, 200)
        );
        Err(Error::Serde(e))
      }
    }
  }

  /// Truncate to at most `limit` characters, always on a char boundary
  fn truncate_chars(text: &str, limit: usize) -> &str {
    text.char_indices().nth(limit).map_or(text, |(i, _)| &text[..i])
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .finish()
  }
}

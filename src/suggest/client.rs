//! HTTP suggestion client

use std::time::Duration;

use crate::error::{Result, RosterError};

/// Maximum response-body characters carried into error messages
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// A source of name suggestions for a query.
///
/// The GUI talks to this trait so tests can substitute a scripted source
/// for the real HTTP client.
pub trait SuggestSource: Send + Sync {
    /// Return candidate names for the given query, in server order.
    fn suggest(&self, query: &str) -> Result<Vec<String>>;
}

/// HTTP client for a single suggestion endpoint
pub struct SuggestClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl SuggestClient {
    /// Create a client for the given endpoint with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RosterError::Transport(endpoint.clone(), e))?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint this client queries
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn truncate(text: &str, max_chars: usize) -> String {
        text.chars().take(max_chars).collect()
    }

    /// Decode a response body as a JSON array of plain name strings
    fn decode_names(endpoint: &str, body: &str) -> Result<Vec<String>> {
        serde_json::from_str(body).map_err(|e| RosterError::Decode {
            endpoint: endpoint.to_string(),
            reason: e,
            body: Self::truncate(body, ERROR_BODY_PREVIEW_CHARS),
        })
    }
}

impl SuggestSource for SuggestClient {
    /// Issue `GET <endpoint>?query=<text>` and decode the JSON name array.
    ///
    /// The raw input value is passed as the `query` parameter; only the
    /// transport's default percent-encoding is applied.
    fn suggest(&self, query: &str) -> Result<Vec<String>> {
        let http_response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query)])
            .send()
            .map_err(|e| RosterError::Transport(self.endpoint.clone(), e))?;

        let status = http_response.status();
        let body = http_response
            .text()
            .map_err(|e| RosterError::Transport(self.endpoint.clone(), e))?;

        if !status.is_success() {
            return Err(RosterError::EndpointStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                body: Self::truncate(&body, ERROR_BODY_PREVIEW_CHARS),
            });
        }

        Self::decode_names(&self.endpoint, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_name_array_in_order() {
        let names = SuggestClient::decode_names("/search", r#"["Alice", "Bob"]"#).unwrap();
        assert_eq!(names, vec!["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn empty_array_is_valid() {
        let names = SuggestClient::decode_names("/search", "[]").unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn malformed_body_surfaces_typed_error() {
        let err = SuggestClient::decode_names("/search", "<html>oops</html>").unwrap_err();
        match err {
            RosterError::Decode { endpoint, body, .. } => {
                assert_eq!(endpoint, "/search");
                assert_eq!(body, "<html>oops</html>");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(SuggestClient::decode_names("/search", "<html>oops</html>")
            .unwrap_err()
            .is_recoverable());
    }

    #[test]
    fn error_body_preview_is_truncated() {
        let long_body = "x".repeat(1000);
        let err = SuggestClient::decode_names("/search", &long_body).unwrap_err();
        match err {
            RosterError::Decode { body, .. } => {
                assert_eq!(body.chars().count(), ERROR_BODY_PREVIEW_CHARS);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

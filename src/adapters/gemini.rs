//! Generative-language REST adapter.
//!
//! Implements [`ModelService`] on top of any [`HttpClient`] by calling
//! `POST {base_url}/v1beta/models/{model}:generateContent` with the prompt as
//! a single text part, and joining the text parts of the first candidate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::ServiceError;
use crate::traits::{Headers, HttpClient, ModelService};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Joined text of the first candidate, or `None` if there is none.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Model service backed by the generative-language REST API.
#[derive(Clone)]
pub struct GeminiModelService {
    http: Arc<dyn HttpClient>,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiModelService {
    pub fn new(
        http: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full endpoint URL for `generateContent`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl std::fmt::Debug for GeminiModelService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiModelService")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ModelService for GeminiModelService {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ServiceError> {
        if self.api_key.trim().is_empty() {
            return Err(ServiceError::MissingApiKey);
        }

        let request = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        let mut headers = Headers::new();
        headers.insert(API_KEY_HEADER.to_string(), self.api_key.clone());

        let response = self.http.post_json(&self.endpoint(), &body, &headers).await?;

        if !response.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| response.text_lossy());
            return Err(ServiceError::Http {
                status: response.status,
                message,
            });
        }

        let decoded: GenerateContentResponse = response
            .json()
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        let text = decoded.into_text();
        debug!(
            model = %self.model,
            chars = text.as_ref().map_or(0, String::len),
            "Model call completed"
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};

    const ENDPOINT: &str =
        "https://generativelanguage.test/v1beta/models/gemini-1.5-flash:generateContent";

    fn service(http: &MockHttpClient, api_key: &str) -> GeminiModelService {
        GeminiModelService::new(
            Arc::new(http.clone()),
            "https://generativelanguage.test/",
            "gemini-1.5-flash",
            api_key,
        )
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let http = MockHttpClient::new();
        assert_eq!(service(&http, "k").endpoint(), ENDPOINT);
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_joins_parts() {
        let http = MockHttpClient::new();
        http.route(
            ENDPOINT,
            MockResponse::Reply(Response::new(
                200,
                r#"{"candidates":[{"content":{"parts":[{"text":"Tides are "},{"text":"caused by the moon."}],"role":"model"},"finishReason":"STOP"}]}"#,
            )),
        );

        let text = service(&http, "secret").generate("Explain tides").await.unwrap();
        assert_eq!(text.as_deref(), Some("Tides are caused by the moon."));

        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, ENDPOINT);
        assert_eq!(
            requests[0].headers.get(API_KEY_HEADER),
            Some(&"secret".to_string())
        );
        assert_eq!(
            requests[0].body,
            serde_json::json!({"contents": [{"parts": [{"text": "Explain tides"}]}]})
        );
    }

    #[tokio::test]
    async fn test_no_candidates_is_none() {
        let http = MockHttpClient::new();
        http.fallback(MockResponse::Reply(Response::new(
            200,
            r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#,
        )));

        let text = service(&http, "k").generate("anything").await.unwrap();
        assert!(text.is_none());
    }

    #[tokio::test]
    async fn test_blank_text_is_none() {
        let http = MockHttpClient::new();
        http.fallback(MockResponse::Reply(Response::new(
            200,
            r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#,
        )));

        assert!(service(&http, "k").generate("x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_error_status_uses_error_message() {
        let http = MockHttpClient::new();
        http.fallback(MockResponse::Reply(Response::new(
            400,
            r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#,
        )));

        let err = service(&http, "bad").generate("x").await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Http {
                status: 400,
                message: "API key not valid.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_with_plain_body() {
        let http = MockHttpClient::new();
        http.fallback(MockResponse::Reply(Response::new(503, "unavailable")));

        let err = service(&http, "k").generate("x").await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Http {
                status: 503,
                message: "unavailable".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let http = MockHttpClient::new();
        http.fallback(MockResponse::Reply(Response::new(200, "<html>")));

        let err = service(&http, "k").generate("x").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let http = MockHttpClient::new();
        http.fallback(MockResponse::Fail(HttpError::Connect(
            "refused".to_string(),
        )));

        let err = service(&http, "k").generate("x").await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Transport(HttpError::Connect("refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_makes_no_request() {
        let http = MockHttpClient::new();

        let err = service(&http, "").generate("x").await.unwrap_err();
        assert_eq!(err, ServiceError::MissingApiKey);
        assert!(http.requests().is_empty());
    }
}

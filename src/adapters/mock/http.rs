//! Recording HTTP client with routed canned responses.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One request seen by [`MockHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: serde_json::Value,
}

/// What a route answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A completed exchange, whatever its status
    Reply(Response),
    /// A transport failure
    Fail(HttpError),
}

impl MockResponse {
    /// Reply with `status` and a text body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Reply(Response::new(status, body.to_string()))
    }

    /// Reply with `status` and a JSON body.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockResponse::Reply(
            Response::new(status, body.to_string())
                .with_header("content-type", "application/json"),
        )
    }
}

#[derive(Debug, Default)]
struct MockState {
    /// (URL fragment, response); first match wins
    routes: Vec<(String, MockResponse)>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

/// [`HttpClient`] that answers from routes and records every request.
///
/// Clones share routes and the request log.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.route(":generateContent", MockResponse::json(200, json!({"candidates": []})));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose URL contains `url_fragment`.
    pub fn route(&self, url_fragment: &str, response: MockResponse) -> &Self {
        self.state
            .lock()
            .unwrap()
            .routes
            .push((url_fragment.to_string(), response));
        self
    }

    /// Answer requests that match no route.
    pub fn fallback(&self, response: MockResponse) -> &Self {
        self.state.lock().unwrap().fallback = Some(response);
        self
    }

    /// Every request so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.clone(),
        });

        let answer = state
            .routes
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| state.fallback.clone());

        match answer {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Fail(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock route for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_routes_and_records() {
        let http = MockHttpClient::new();
        http.route(":generateContent", MockResponse::json(200, json!({"ok": true})));

        let body = json!({"contents": []});
        let mut headers = Headers::new();
        headers.insert("x-goog-api-key".to_string(), "k".to_string());
        let response = http
            .post_json("https://host/v1beta/models/m:generateContent", &body, &headers)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        let request = http.last_request().unwrap();
        assert_eq!(request.body, body);
        assert_eq!(request.headers.get("x-goog-api-key").map(String::as_str), Some("k"));
    }

    #[tokio::test]
    async fn test_first_matching_route_wins() {
        let http = MockHttpClient::new();
        http.route("flash", MockResponse::status(201, "flash"))
            .route("models", MockResponse::status(202, "models"));

        let response = http
            .post_json("https://host/models/flash", &json!({}), &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_fallback_and_unrouted() {
        let http = MockHttpClient::new();
        let err = http
            .post_json("https://host/a", &json!({}), &Headers::new())
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::Other(_)));

        http.fallback(MockResponse::Fail(HttpError::Timeout("slow".to_string())));
        let err = http
            .post_json("https://host/b", &json!({}), &Headers::new())
            .await
            .unwrap_err();
        assert_eq!(err, HttpError::Timeout("slow".to_string()));
        assert_eq!(http.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_log() {
        let http = MockHttpClient::new();
        http.fallback(MockResponse::status(200, ""));

        http.clone()
            .post_json("https://host", &json!({}), &Headers::new())
            .await
            .unwrap();

        assert_eq!(http.requests().len(), 1);
    }
}

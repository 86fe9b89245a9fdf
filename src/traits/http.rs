//! Minimal HTTP seam for the model service adapter.
//!
//! The adapter only ever POSTs a JSON document and reads back status and
//! body, so that is all [`HttpClient`] offers. Tests swap in
//! `adapters::mock::MockHttpClient`.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// Header name to value. Names are stored as given; use
/// [`Response::header`] for case-insensitive lookup.
pub type Headers = HashMap<String, String>;

/// Status, headers and raw body of a completed exchange.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: body.into(),
        }
    }

    /// Add one header, builder style.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Value of the first header matching `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text; invalid UTF-8 becomes U+FFFD.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure. A non-2xx status is not an `HttpError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The host could not be reached
    Connect(String),
    /// No complete response within the client's timeout
    Timeout(String),
    /// The request could not be built (bad URL, bad header value)
    Request(String),
    /// The response body could not be read
    Body(String),
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::Connect(msg) => write!(f, "could not connect: {}", msg),
            HttpError::Timeout(msg) => write!(f, "timed out: {}", msg),
            HttpError::Request(msg) => write!(f, "invalid request: {}", msg),
            HttpError::Body(msg) => write!(f, "could not read response body: {}", msg),
            HttpError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// POST-a-JSON-document client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send `body` as `application/json` to `url` with extra `headers`.
    ///
    /// Any status code comes back as `Ok(Response)`; only transport failures
    /// produce `HttpError`.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, HttpError>;
}

//! Production [`HttpClient`] on top of `reqwest`.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// `reqwest`-backed client. Cheap to clone; clones share the connection pool.
///
/// ```ignore
/// use snapshot::adapters::ReqwestHttpClient;
/// use snapshot::traits::{Headers, HttpClient};
///
/// let http = ReqwestHttpClient::with_timeout(Duration::from_secs(30))?;
/// let response = http.post_json(url, &serde_json::json!({}), &Headers::new()).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client without a request timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose requests fail with [`HttpError::Timeout`] after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(Self::from_client)
            .map_err(transport_error)
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::Connect(message)
    } else if err.is_builder() {
        HttpError::Request(message)
    } else if err.is_body() || err.is_decode() {
        HttpError::Body(message)
    } else {
        HttpError::Other(message)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let mut request = self.client.post(url).json(body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let response_headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response.bytes().await.map_err(transport_error)?;

        Ok(Response {
            status,
            headers: response_headers,
            body,
        })
    }
}

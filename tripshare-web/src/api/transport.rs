use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::FetchError;

/// A fully prepared call, kept around so it can be replayed on refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// JSON request without credentials, used by the login exchange.
    pub fn json<B: Serialize>(
        method: Method,
        url: impl Into<String>,
        body: &B,
    ) -> Result<Self, FetchError> {
        let mut request = Self::new(method, url);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        request.body = Some(serde_json::to_string(body)?);
        Ok(request)
    }
}

/// Status and raw body of a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes a successful body; an empty one yields `None`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, FetchError> {
        if !self.is_success() {
            return Err(FetchError::http(self.status, &self.body));
        }
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&self.body)?))
    }
}

/// Single-attempt HTTP primitive. No retries, no timeout, no cancellation.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError>;
}

/// Transport over `reqwest`, which uses the browser's `fetch` on wasm.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

//! Token-aware entry point for every backend call made on behalf of the user.
//!
//! The gateway resolves the bearer token, decorates the caller's request with
//! it and hands the call to the transport. When no token can be found it
//! sends the visitor to the login route and returns a result with the same
//! shape as a real call, so callers never branch on which path was taken.

use std::rc::Rc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, HttpTransport};
use crate::auth::TokenResolver;
use crate::errors::FetchError;
use crate::navigation::Redirector;

/// Caller-side knobs for a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// How a [`FetchResult`] can be re-run.
#[derive(Debug, Clone, PartialEq)]
pub enum Refresh {
    /// Nothing to replay; the call never left the client.
    Noop,
    /// Re-send the same authorized request.
    Replay(ApiRequest),
}

/// Outcome of a gateway call. Identical in shape whether or not the request
/// was actually sent.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult<T> {
    pub data: Option<T>,
    pub pending: bool,
    pub error: Option<FetchError>,
    pub refresh: Refresh,
}

impl<T> FetchResult<T> {
    fn failed(error: FetchError) -> Self {
        Self {
            data: None,
            pending: false,
            error: Some(error),
            refresh: Refresh::Noop,
        }
    }

    /// Collapses the result into the `data`/`error` pair stores care about.
    pub fn into_result(self) -> Result<Option<T>, FetchError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

/// Authenticated fetch gateway.
pub struct AuthenticatedFetch {
    base_url: String,
    login_route: String,
    transport: Rc<dyn HttpTransport>,
    resolver: Rc<dyn TokenResolver>,
    redirector: Rc<dyn Redirector>,
}

impl AuthenticatedFetch {
    pub fn new(
        base_url: impl Into<String>,
        login_route: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        resolver: Rc<dyn TokenResolver>,
        redirector: Rc<dyn Redirector>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            login_route: login_route.into(),
            transport,
            resolver,
            redirector,
        }
    }

    pub fn transport(&self) -> Rc<dyn HttpTransport> {
        Rc::clone(&self.transport)
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }

    /// `GET` with default options.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        self.fetch(path, RequestOptions::default()).await
    }

    /// Sends `path` with the current bearer token attached.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> FetchResult<T> {
        let Some(token) = self.resolver.resolve() else {
            log::error!("{}: {path}", FetchError::MissingToken);
            self.redirector.redirect(&self.login_route);
            return FetchResult::failed(FetchError::MissingToken);
        };

        match self.authorize(path, options, &token) {
            Ok(request) => self.execute(request).await,
            Err(error) => FetchResult::failed(error),
        }
    }

    /// Re-sends the request behind `result`, replacing its content.
    pub async fn refresh<T: DeserializeOwned>(&self, result: &mut FetchResult<T>) {
        let Refresh::Replay(request) = &result.refresh else {
            return;
        };
        let request = request.clone();
        *result = self.execute(request).await;
    }

    fn authorize(
        &self,
        path: &str,
        options: RequestOptions,
        token: &str,
    ) -> Result<ApiRequest, FetchError> {
        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| FetchError::InvalidHeader(err.to_string()))?;

        let mut headers = options.headers;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(ApiRequest {
            method: options.method,
            url: self.url(path),
            headers,
            body: options.body,
        })
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> FetchResult<T> {
        let outcome = self
            .transport
            .send(request.clone())
            .await
            .and_then(|response| response.decode::<T>());

        let (data, error) = match outcome {
            Ok(data) => (data, None),
            Err(error) => (None, Some(error)),
        };
        FetchResult {
            data,
            pending: false,
            error,
            refresh: Refresh::Replay(request),
        }
    }
}

/// Joins a base URL and a path with exactly one slash between them.
pub(crate) fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

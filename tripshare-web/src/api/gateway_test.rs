//! Tests for the authenticated fetch gateway
//!
//! Covers the missing-token short circuit, header decoration, error capture
//! and refresh behaviour against a fake transport.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use mockall::predicate::eq;
    use reqwest::Method;
    use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
    use shared::models::Currency;

    use crate::api::gateway::{AuthenticatedFetch, FetchResult, Refresh, RequestOptions, build_url};
    use crate::auth::MockTokenResolver;
    use crate::errors::FetchError;
    use crate::navigation::MockRedirector;
    use crate::test_support::{FakeTransport, Harness};

    const CURRENCIES: &str = r#"[{"id":1,"code":"EUR"},{"id":2,"code":"CHF"}]"#;

    /// Tests that a missing token redirects exactly once and returns an empty result
    #[test]
    fn test_missing_token_redirects_once() {
        let transport = Rc::new(FakeTransport::ok(CURRENCIES));
        let mut resolver = MockTokenResolver::new();
        resolver.expect_resolve().return_const(None::<String>);
        let mut redirector = MockRedirector::new();
        redirector
            .expect_redirect()
            .with(eq("/login"))
            .times(1)
            .return_const(());

        let gateway = AuthenticatedFetch::new(
            "http://api.test",
            "/login",
            transport.clone(),
            Rc::new(resolver),
            Rc::new(redirector),
        );

        let result: FetchResult<Vec<Currency>> = block_on(gateway.get("/currency/all"));

        assert_eq!(result.data, None);
        assert!(!result.pending);
        assert_eq!(result.error, Some(FetchError::MissingToken));
        assert_eq!(result.refresh, Refresh::Noop);
        assert_eq!(transport.calls(), 0);
    }

    /// Tests that the bearer and content type headers are attached
    #[test]
    fn test_token_headers_attached() {
        let harness = Harness::signed_in(FakeTransport::ok(CURRENCIES));

        let result: FetchResult<Vec<Currency>> = block_on(harness.gateway.get("/currency/all"));

        assert_eq!(result.error, None);
        assert_eq!(result.data.map(|currencies| currencies.len()), Some(2));
        let requests = harness.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/currency/all");
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].headers[AUTHORIZATION], "Bearer abc");
        assert_eq!(requests[0].headers[CONTENT_TYPE], "application/json");
        assert_eq!(harness.redirector.count(), 0);
    }

    /// Tests that caller headers survive while auth headers win
    #[test]
    fn test_caller_headers_merged() {
        let harness = Harness::signed_in(FakeTransport::ok(CURRENCIES));
        let options = RequestOptions::default()
            .header(ACCEPT_LANGUAGE, HeaderValue::from_static("fr-FR"))
            .header(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="))
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let _: FetchResult<Vec<Currency>> =
            block_on(harness.gateway.fetch("/currency/all", options));

        let request = &harness.transport.requests()[0];
        assert_eq!(request.headers[ACCEPT_LANGUAGE], "fr-FR");
        assert_eq!(request.headers[AUTHORIZATION], "Bearer abc");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers.get_all(AUTHORIZATION).iter().count(), 1);
    }

    /// Tests that method and body pass through untouched
    #[test]
    fn test_method_and_body_forwarded() {
        let harness = Harness::signed_in(FakeTransport::status(204, ""));
        let options = RequestOptions::default()
            .method(Method::POST)
            .body(r#"{"name":"Porto"}"#);

        let result: FetchResult<serde_json::Value> =
            block_on(harness.gateway.fetch("/trip", options));

        assert_eq!(result.error, None);
        assert_eq!(result.data, None);
        let request = &harness.transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"Porto"}"#));
    }

    /// Tests that backend failures land in the error field
    #[test]
    fn test_http_error_captured() {
        let harness = Harness::signed_in(FakeTransport::status(500, "boom"));

        let result: FetchResult<Vec<Currency>> = block_on(harness.gateway.get("/currency/all"));

        assert_eq!(result.data, None);
        assert_eq!(
            result.error,
            Some(FetchError::Http {
                status: 500,
                message: "boom".into()
            })
        );
        assert!(matches!(result.refresh, Refresh::Replay(_)));
        assert_eq!(harness.redirector.count(), 0);
    }

    /// Tests that transport failures land in the error field
    #[test]
    fn test_network_error_captured() {
        let harness = Harness::signed_in(FakeTransport::failing(FetchError::Network(
            "offline".into(),
        )));

        let result: FetchResult<Vec<Currency>> = block_on(harness.gateway.get("/currency/all"));

        assert_eq!(result.error, Some(FetchError::Network("offline".into())));
    }

    /// Tests that a token unfit for a header is reported, not sent
    #[test]
    fn test_invalid_token_not_sent() {
        let transport = Rc::new(FakeTransport::ok(CURRENCIES));
        let mut resolver = MockTokenResolver::new();
        resolver
            .expect_resolve()
            .return_const(Some("bad\ntoken".to_string()));
        let mut redirector = MockRedirector::new();
        redirector.expect_redirect().never();

        let gateway = AuthenticatedFetch::new(
            "http://api.test",
            "/login",
            transport.clone(),
            Rc::new(resolver),
            Rc::new(redirector),
        );

        let result: FetchResult<Vec<Currency>> = block_on(gateway.get("/currency/all"));

        assert!(matches!(result.error, Some(FetchError::InvalidHeader(_))));
        assert_eq!(transport.calls(), 0);
    }

    /// Tests that refresh replays the same request
    #[test]
    fn test_refresh_replays_request() {
        let harness = Harness::signed_in(FakeTransport::ok(r#"[{"id":1,"code":"EUR"}]"#));
        let mut result: FetchResult<Vec<Currency>> =
            block_on(harness.gateway.get("/currency/all"));
        assert_eq!(result.data.as_ref().map(Vec::len), Some(1));

        harness.transport.respond_with(CURRENCIES);
        block_on(harness.gateway.refresh(&mut result));

        assert_eq!(result.data.as_ref().map(Vec::len), Some(2));
        let requests = harness.transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    /// Tests that refresh on a short-circuited result does nothing
    #[test]
    fn test_refresh_noop_without_token() {
        let harness = Harness::new(FakeTransport::ok(CURRENCIES));
        let mut result: FetchResult<Vec<Currency>> =
            block_on(harness.gateway.get("/currency/all"));

        block_on(harness.gateway.refresh(&mut result));

        assert_eq!(result.error, Some(FetchError::MissingToken));
        assert_eq!(harness.transport.calls(), 0);
        assert_eq!(harness.redirector.paths(), vec!["/login"]);
    }

    /// Tests URL joining
    #[test]
    fn test_build_url() {
        assert_eq!(build_url("http://api.test/", "/trip/5"), "http://api.test/trip/5");
        assert_eq!(build_url("http://api.test", "trip/5"), "http://api.test/trip/5");
        assert_eq!(build_url("", "/trip/5"), "/trip/5");
    }
}

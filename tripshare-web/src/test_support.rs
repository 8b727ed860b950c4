//! Fakes shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::transport::ApiResponse;
use crate::api::{ApiRequest, AuthenticatedFetch, HttpTransport};
use crate::auth::token::CookieStoreResolver;
use crate::cookies::{CookieJar, MemoryCookies, TokenCookie};
use crate::errors::FetchError;
use crate::navigation::Redirector;

/// Transport answering every call with the same canned response.
pub struct FakeTransport {
    response: RefCell<Result<ApiResponse, FetchError>>,
    requests: RefCell<Vec<ApiRequest>>,
    yield_once: bool,
}

impl FakeTransport {
    pub fn ok(body: &str) -> Self {
        Self::with(Ok(ApiResponse {
            status: 200,
            body: body.to_string(),
        }))
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::with(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }))
    }

    pub fn failing(error: FetchError) -> Self {
        Self::with(Err(error))
    }

    fn with(response: Result<ApiResponse, FetchError>) -> Self {
        Self {
            response: RefCell::new(response),
            requests: RefCell::new(Vec::new()),
            yield_once: false,
        }
    }

    /// Makes every call suspend once before answering, so concurrent
    /// callers overlap.
    pub fn slow(mut self) -> Self {
        self.yield_once = true;
        self
    }

    pub fn respond_with(&self, body: &str) {
        *self.response.borrow_mut() = Ok(ApiResponse {
            status: 200,
            body: body.to_string(),
        });
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        self.requests.borrow_mut().push(request);
        if self.yield_once {
            YieldNow::default().await;
        }
        self.response.borrow().clone()
    }
}

/// Transport holding every request until the test releases it, so answers
/// can arrive in any order.
#[derive(Default)]
pub struct GatedTransport {
    gates: RefCell<HashMap<String, oneshot::Sender<ApiResponse>>>,
}

impl GatedTransport {
    pub fn waiting(&self) -> usize {
        self.gates.borrow().len()
    }

    /// Answers the pending request for `url` with a 200 and `body`.
    pub fn release(&self, url: &str, body: &str) {
        let gate = self.gates.borrow_mut().remove(url);
        if let Some(gate) = gate {
            let _ = gate.send(ApiResponse {
                status: 200,
                body: body.to_string(),
            });
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for GatedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        let (gate, answer) = oneshot::channel();
        self.gates.borrow_mut().insert(request.url, gate);
        answer
            .await
            .map_err(|_| FetchError::Network("request dropped".into()))
    }
}

/// Suspends the current task once.
pub async fn yield_now() {
    YieldNow::default().await;
}

#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Redirector remembering where it was asked to go.
#[derive(Default)]
pub struct RecordingRedirector {
    paths: RefCell<Vec<String>>,
}

impl RecordingRedirector {
    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.paths.borrow().len()
    }
}

impl Redirector for RecordingRedirector {
    fn redirect(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

/// Wiring of a gateway over fakes.
pub struct Harness {
    pub jar: Rc<MemoryCookies>,
    pub transport: Rc<FakeTransport>,
    pub redirector: Rc<RecordingRedirector>,
    pub gateway: Rc<AuthenticatedFetch>,
}

impl Harness {
    pub fn new(transport: FakeTransport) -> Self {
        let jar = Rc::new(MemoryCookies::new());
        let transport = Rc::new(transport);
        let redirector = Rc::new(RecordingRedirector::default());
        let gateway = gateway(transport.clone(), jar.clone(), redirector.clone());
        Self {
            jar,
            transport,
            redirector,
            gateway,
        }
    }

    /// Same wiring with a token already in the jar.
    pub fn signed_in(transport: FakeTransport) -> Self {
        let harness = Self::new(transport);
        harness.jar.set(&TokenCookie::new(None).build("abc"));
        harness
    }
}

/// Gateway against `http://api.test` reading its token from `jar`.
pub fn gateway(
    transport: Rc<dyn HttpTransport>,
    jar: Rc<MemoryCookies>,
    redirector: Rc<RecordingRedirector>,
) -> Rc<AuthenticatedFetch> {
    Rc::new(AuthenticatedFetch::new(
        "http://api.test",
        "/login",
        transport,
        Rc::new(CookieStoreResolver::new(jar)),
        redirector,
    ))
}

/// Signed-in gateway over a [`GatedTransport`].
pub fn gated_gateway() -> (Rc<GatedTransport>, Rc<AuthenticatedFetch>) {
    let transport = Rc::new(GatedTransport::default());
    let jar = Rc::new(MemoryCookies::new());
    jar.set(&TokenCookie::new(None).build("abc"));
    let gateway = gateway(
        transport.clone(),
        jar,
        Rc::new(RecordingRedirector::default()),
    );
    (transport, gateway)
}

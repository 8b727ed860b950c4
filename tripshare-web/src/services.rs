//! Per-application wiring of the session, gateway and stores.
//!
//! One [`ClientServices`] is built per `yewdux::Context` and handed to
//! components through a Yew context provider, so nothing here is a
//! process-wide singleton.

use std::rc::Rc;

use shared::models::LoginRequest;
use yewdux::Context;

use crate::api::{AuthenticatedFetch, HttpTransport, ReqwestTransport};
use crate::auth::{ExecutionContext, GuardDecision, RouteGuard, SessionStore};
use crate::config::FrontendConfig;
use crate::cookies::{CookieJar, DocumentCookies, TokenCookie};
use crate::errors::FetchError;
use crate::navigation::{HistoryRedirector, Redirector};
use crate::stores::{CurrenciesStore, ExpenseCategoriesStore, TripStore};

#[derive(Clone)]
pub struct ClientServices {
    pub config: Rc<FrontendConfig>,
    pub session: SessionStore,
    pub gateway: Rc<AuthenticatedFetch>,
    pub guard: Rc<RouteGuard>,
    pub trip: TripStore,
    pub currencies: CurrenciesStore,
    pub categories: ExpenseCategoriesStore,
}

impl PartialEq for ClientServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gateway, &other.gateway)
    }
}

impl ClientServices {
    /// Services for a regular in-browser session.
    pub fn browser(cx: &Context) -> Self {
        let jar: Rc<dyn CookieJar> = Rc::new(DocumentCookies);
        Self::for_context(
            cx,
            FrontendConfig::load(),
            ExecutionContext::Browser(jar),
            Rc::new(ReqwestTransport::new()),
            Rc::new(HistoryRedirector),
        )
    }

    /// Wires everything for the given execution context. The session and the
    /// gateway share one jar, so a token written by either side is the one
    /// the next call sends.
    pub fn for_context(
        cx: &Context,
        config: FrontendConfig,
        execution: ExecutionContext,
        transport: Rc<dyn HttpTransport>,
        redirector: Rc<dyn Redirector>,
    ) -> Self {
        let jar = execution.into_jar();
        let resolver = ExecutionContext::resolver(&jar);

        let gateway = Rc::new(AuthenticatedFetch::new(
            config.api_base_url(),
            config.login_route.clone(),
            transport,
            resolver,
            Rc::clone(&redirector),
        ));
        let session = SessionStore::new(
            cx,
            jar,
            TokenCookie::new(config.token_max_age),
            config.login_route.clone(),
            redirector,
        );

        Self {
            guard: Rc::new(RouteGuard::from_config(&config)),
            trip: TripStore::new(cx, Rc::clone(&gateway)),
            currencies: CurrenciesStore::new(cx, Rc::clone(&gateway)),
            categories: ExpenseCategoriesStore::new(cx, Rc::clone(&gateway)),
            config: Rc::new(config),
            session,
            gateway,
        }
    }

    /// Guard verdict for `path` given the current session.
    pub fn check_route(&self, path: &str) -> GuardDecision {
        self.guard.check(self.session.authenticated(), path)
    }

    /// Signs in, then loads the profile of the new session.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), FetchError> {
        let url = self.gateway.url(&self.config.login_endpoint);
        self.session
            .login(self.gateway.transport().as_ref(), &url, credentials)
            .await?;
        self.session.load_profile(&self.gateway).await;
        Ok(())
    }

    /// Ends the session and drops every cached resource.
    pub fn logout(&self) {
        self.trip.reset();
        self.currencies.reset();
        self.categories.reset();
        self.session.logout();
    }
}

//! Session token store. Owns the token, mirrors it into the `token` cookie and
//! caches the signed-in user's profile.

use std::rc::Rc;

use reqwest::Method;
use shared::models::{LoginRequest, LoginResponse, UserProfile};
use yewdux::{Context, Dispatch, Store};

use crate::api::{ApiRequest, AuthenticatedFetch, HttpTransport};
use crate::cookies::{CookieJar, TOKEN_COOKIE_NAME, TokenCookie};
use crate::errors::FetchError;
use crate::navigation::Redirector;

const PROFILE_PATH: &str = "/user/profile";

#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl SessionState {
    pub fn authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

#[derive(Clone)]
pub struct SessionStore {
    dispatch: Dispatch<SessionState>,
    jar: Rc<dyn CookieJar>,
    cookie: TokenCookie,
    login_route: String,
    redirector: Rc<dyn Redirector>,
}

impl SessionStore {
    /// Binds the store to `cx` and hydrates the token from the cookie jar.
    pub fn new(
        cx: &Context,
        jar: Rc<dyn CookieJar>,
        cookie: TokenCookie,
        login_route: impl Into<String>,
        redirector: Rc<dyn Redirector>,
    ) -> Self {
        let dispatch = Dispatch::<SessionState>::new(cx);
        let persisted = jar.get(TOKEN_COOKIE_NAME);
        dispatch.reduce_mut(|state| state.token = persisted);

        Self {
            dispatch,
            jar,
            cookie,
            login_route: login_route.into(),
            redirector,
        }
    }

    pub fn authenticated(&self) -> bool {
        self.dispatch.get().authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.dispatch.get().token.clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.dispatch.get().user.clone()
    }

    /// Holds `token` in memory and persists it; later calls use it at once.
    pub fn set_token(&self, token: &str) {
        let token = token.to_string();
        self.jar.set(&self.cookie.build(&token));
        self.dispatch.reduce_mut(|state| state.token = Some(token));
    }

    /// Forgets the session and sends the visitor to the login route.
    /// Calls already in flight keep the token they were sent with.
    pub fn logout(&self) {
        self.dispatch.reduce_mut(|state| {
            state.token = None;
            state.user = None;
        });
        self.jar.set(&self.cookie.removal());
        self.redirector.redirect(&self.login_route);
    }

    /// Caches the whitelisted part of `profile`. `None` leaves the cache alone.
    pub fn set_current_user(&self, profile: Option<&UserProfile>) {
        let Some(profile) = profile else {
            return;
        };
        let user = UserProfile {
            id: profile.id,
            username: profile.username.clone(),
            email: profile.email.clone(),
            created_at: profile.created_at,
            public: profile.public,
            image_src: String::new(),
        };
        self.dispatch.reduce_mut(|state| state.user = Some(user));
    }

    /// Fetches `GET /user/profile` and caches it. A 401 means the token is
    /// stale, so the session is dropped.
    pub async fn load_profile(&self, gateway: &AuthenticatedFetch) {
        match gateway.get::<UserProfile>(PROFILE_PATH).await.into_result() {
            Ok(profile) => self.set_current_user(profile.as_ref()),
            Err(error) if error.is_unauthorized() => {
                log::warn!("profile rejected, dropping session: {error}");
                self.logout();
            }
            Err(error) => log::error!("failed to load profile: {error}"),
        }
    }

    /// Exchanges credentials for a token at `url` and stores it.
    pub async fn login(
        &self,
        transport: &dyn HttpTransport,
        url: &str,
        credentials: &LoginRequest,
    ) -> Result<(), FetchError> {
        let request = ApiRequest::json(Method::POST, url, credentials)?;
        let response = transport.send(request).await?;

        match response.decode::<LoginResponse>()? {
            Some(LoginResponse { token }) if !token.is_empty() => {
                self.set_token(&token);
                Ok(())
            }
            _ => Err(FetchError::Decode(
                "login response carried no token".to_string(),
            )),
        }
    }
}

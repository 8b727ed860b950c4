//! Cookie access for the session token.
//!
//! The browser's `document.cookie` is the only persistence the client relies
//! on. Everything that touches it goes through [`CookieJar`] so the session
//! logic can run against an in-memory jar in tests and pre-render passes.

use cookie::Cookie;
use cookie::time::Duration;
use std::cell::RefCell;
use std::collections::HashMap;

/// Name of the cookie holding the bearer token.
pub const TOKEN_COOKIE_NAME: &str = "token";
const TOKEN_COOKIE_PATH: &str = "/";

/// Read/write boundary over a cookie store.
pub trait CookieJar {
    /// Value of the cookie called `name`, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Writes a fully attributed cookie. A zero `Max-Age` deletes it.
    fn set(&self, cookie: &Cookie<'_>);
}

/// Finds `name` in a raw `Cookie:` header or `document.cookie` string.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Attributes used when persisting the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCookie {
    max_age: Option<u64>,
}

impl TokenCookie {
    pub fn new(max_age: Option<u64>) -> Self {
        Self { max_age }
    }

    /// Cookie storing `token`, scoped to the whole site.
    pub fn build(&self, token: &str) -> Cookie<'static> {
        let builder =
            Cookie::build((TOKEN_COOKIE_NAME, token.to_string())).path(TOKEN_COOKIE_PATH);
        match self.max_age {
            Some(secs) => builder
                .max_age(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)))
                .build(),
            None => builder.build(),
        }
    }

    /// Cookie that expires the token immediately.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE_NAME, ""))
            .path(TOKEN_COOKIE_PATH)
            .max_age(Duration::ZERO)
            .build()
    }
}

/// Cookie jar backed by `document.cookie`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentCookies;

impl DocumentCookies {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;

        web_sys::window()?.document()?.dyn_into().ok()
    }
}

impl CookieJar for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        let cookie_string = Self::document()?.cookie().ok()?;
        find_cookie(&cookie_string, name)
    }

    fn set(&self, cookie: &Cookie<'_>) {
        let Some(document) = Self::document() else {
            log::warn!("no document available, cookie {} not written", cookie.name());
            return;
        };
        if document.set_cookie(&cookie.to_string()).is_err() {
            log::error!("failed to write cookie {}", cookie.name());
        }
    }
}

/// In-memory jar for pre-render passes and tests.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-filled from a raw `Cookie:` header.
    #[cfg(test)]
    pub fn from_header(header: &str) -> Self {
        let values = Cookie::split_parse(header)
            .filter_map(Result::ok)
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect();
        Self {
            values: RefCell::new(values),
        }
    }
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values
            .borrow()
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn set(&self, cookie: &Cookie<'_>) {
        let mut values = self.values.borrow_mut();
        if cookie.max_age() == Some(Duration::ZERO) {
            values.remove(cookie.name());
        } else {
            values.insert(cookie.name().to_string(), cookie.value().to_string());
        }
    }
}

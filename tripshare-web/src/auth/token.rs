use std::rc::Rc;

use crate::cookies::{CookieJar, MemoryCookies, TOKEN_COOKIE_NAME, TokenCookie, find_cookie};

/// Source of the bearer token for outgoing calls.
#[cfg_attr(test, mockall::automock)]
pub trait TokenResolver {
    /// Current token, `None` when the visitor is not signed in.
    fn resolve(&self) -> Option<String>;
}

/// Reads the token straight from a client-side cookie store.
pub struct CookieStoreResolver {
    jar: Rc<dyn CookieJar>,
}

impl CookieStoreResolver {
    pub fn new(jar: Rc<dyn CookieJar>) -> Self {
        Self { jar }
    }
}

impl TokenResolver for CookieStoreResolver {
    fn resolve(&self) -> Option<String> {
        self.jar.get(TOKEN_COOKIE_NAME)
    }
}

/// Reads the token from the `Cookie:` header of an inbound request, for
/// passes that have no direct cookie store.
#[derive(Debug, Clone)]
pub struct RequestHeaderResolver {
    cookie_header: Option<String>,
}

impl RequestHeaderResolver {
    pub fn new(cookie_header: Option<String>) -> Self {
        Self { cookie_header }
    }
}

impl TokenResolver for RequestHeaderResolver {
    fn resolve(&self) -> Option<String> {
        self.cookie_header
            .as_deref()
            .and_then(|header| find_cookie(header, TOKEN_COOKIE_NAME))
    }
}

/// Where the current code runs, which decides how the token is read.
pub enum ExecutionContext {
    /// Regular client-side rendering with access to `document.cookie`.
    Browser(Rc<dyn CookieJar>),
    /// Pre-render pass driven by an inbound request.
    Prerender { cookie_header: Option<String> },
}

impl ExecutionContext {
    /// Jar the session writes to and the gateway reads from. A pre-render
    /// pass gets an in-memory jar seeded once from the inbound header.
    pub fn into_jar(self) -> Rc<dyn CookieJar> {
        match self {
            Self::Browser(jar) => jar,
            Self::Prerender { cookie_header } => {
                let jar = MemoryCookies::new();
                if let Some(token) = RequestHeaderResolver::new(cookie_header).resolve() {
                    jar.set(&TokenCookie::new(None).build(&token));
                }
                Rc::new(jar)
            }
        }
    }

    /// Resolver reading the token from [`Self::into_jar`].
    pub fn resolver(jar: &Rc<dyn CookieJar>) -> Rc<dyn TokenResolver> {
        Rc::new(CookieStoreResolver::new(Rc::clone(jar)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_store_resolver_follows_jar() {
        let jar = Rc::new(MemoryCookies::new());
        let resolver = CookieStoreResolver::new(jar.clone());
        assert_eq!(resolver.resolve(), None);

        jar.set(&TokenCookie::new(None).build("abc"));
        assert_eq!(resolver.resolve(), Some("abc".to_string()));
    }

    #[test]
    fn test_request_header_resolver() {
        let resolver = RequestHeaderResolver::new(Some("lang=fr; token=from-header".into()));
        assert_eq!(resolver.resolve(), Some("from-header".to_string()));

        let anonymous = RequestHeaderResolver::new(None);
        assert_eq!(anonymous.resolve(), None);
    }

    #[test]
    fn test_browser_context_keeps_its_jar() {
        let jar: Rc<dyn CookieJar> = Rc::new(MemoryCookies::from_header("token=client"));
        let shared = ExecutionContext::Browser(Rc::clone(&jar)).into_jar();
        assert!(Rc::ptr_eq(&jar, &shared));
        assert_eq!(ExecutionContext::resolver(&shared).resolve(), Some("client".to_string()));
    }

    #[test]
    fn test_prerender_jar_is_seeded_from_header_then_follows_writes() {
        let jar = ExecutionContext::Prerender {
            cookie_header: Some("lang=fr; token=server".into()),
        }
        .into_jar();
        let resolver = ExecutionContext::resolver(&jar);
        assert_eq!(resolver.resolve(), Some("server".to_string()));
        assert_eq!(jar.get("lang"), None);

        jar.set(&TokenCookie::new(None).build("rotated"));
        assert_eq!(resolver.resolve(), Some("rotated".to_string()));

        jar.set(&TokenCookie::new(None).removal());
        assert_eq!(resolver.resolve(), None);
    }

    #[test]
    fn test_prerender_without_cookie_header_is_anonymous() {
        let jar = ExecutionContext::Prerender { cookie_header: None }.into_jar();
        assert_eq!(ExecutionContext::resolver(&jar).resolve(), None);
    }
}

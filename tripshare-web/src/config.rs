//! Frontend configuration module
//!
//! Values are baked in at build time through `option_env!` and can be
//! overridden at runtime through a `window.TRIPSHARE_CONFIG` object, so a
//! static deployment can point at another backend without a rebuild.
//! Everything here is public; never put secrets in it.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TOKEN_MAX_AGE_SECS: u64 = 60 * 60;
const DEFAULT_PUBLIC_PATHS: &str = "/login,/about,/register";
const DEFAULT_LOGIN_ENDPOINT: &str = "/auth/login";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Route every unauthenticated visitor ends up on.
pub const LOGIN_ROUTE: &str = "/login";

/// Frontend configuration for the backend location and session policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Backend origin every API path is appended to
    pub api_base_url: String,
    /// Lifetime of the token cookie in seconds; `None` keeps it for the browser session
    pub token_max_age: Option<u64>,
    /// Paths reachable without a token
    pub public_paths: Vec<String>,
    /// Route the guard and the gateway redirect to
    pub login_route: String,
    /// Backend path exchanging credentials for a token
    pub login_endpoint: String,
    /// Most verbose level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TRIPSHARE_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            token_max_age: option_env!("TRIPSHARE_TOKEN_MAX_AGE_SECS")
                .map_or(Some(DEFAULT_TOKEN_MAX_AGE_SECS), parse_max_age),
            public_paths: parse_paths(
                option_env!("TRIPSHARE_PUBLIC_PATHS").unwrap_or(DEFAULT_PUBLIC_PATHS),
            ),
            login_route: LOGIN_ROUTE.to_string(),
            login_endpoint: option_env!("TRIPSHARE_LOGIN_ENDPOINT")
                .unwrap_or(DEFAULT_LOGIN_ENDPOINT)
                .to_string(),
            log_level: option_env!("TRIPSHARE_LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

impl FrontendConfig {
    /// Build-time defaults with runtime overrides applied
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    /// Get the backend base URL without a trailing slash
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    token_max_age: Option<String>,
    public_paths: Option<String>,
    login_endpoint: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut FrontendConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.token_max_age {
        config.token_max_age = parse_max_age(&value);
    }
    if let Some(value) = runtime.public_paths {
        config.public_paths = parse_paths(&value);
    }
    if let Some(value) = runtime.login_endpoint {
        config.login_endpoint = value;
    }
    if let Some(level) = runtime.log_level.and_then(|value| value.parse().ok()) {
        config.log_level = level;
    }
}

/// `0` or an unparsable value means no `Max-Age`.
fn parse_max_age(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

fn parse_paths(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("TRIPSHARE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        token_max_age: read_runtime_value(&object, "token_max_age"),
        public_paths: read_runtime_value(&object, "public_paths"),
        login_endpoint: read_runtime_value(&object, "login_endpoint"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&text)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

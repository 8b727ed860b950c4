use yew_router::history::{BrowserHistory, History};

/// Side channel used by non-component code to move the user elsewhere.
#[cfg_attr(test, mockall::automock)]
pub trait Redirector {
    fn redirect(&self, path: &str);
}

/// Pushes onto the browser history; the mounted `BrowserRouter` picks the
/// change up and re-renders.
#[derive(Debug, Default, Clone, Copy)]
pub struct HistoryRedirector;

impl Redirector for HistoryRedirector {
    fn redirect(&self, path: &str) {
        log::debug!("redirecting to {path}");
        BrowserHistory::new().push(path);
    }
}

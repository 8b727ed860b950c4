use std::rc::Rc;

use shared::models::Currency;
use yewdux::Context;

use super::resource::{ResourceState, ResourceStore};
use crate::api::AuthenticatedFetch;

const CURRENCIES_KEY: &str = "currencies";
const CURRENCIES_PATH: &str = "/currency/all";

/// Currencies offered by the backend, fetched once per session.
#[derive(Clone)]
pub struct CurrenciesStore {
    inner: ResourceStore<Vec<Currency>>,
}

impl CurrenciesStore {
    pub fn new(cx: &Context, gateway: Rc<AuthenticatedFetch>) -> Self {
        Self {
            inner: ResourceStore::new(cx, gateway),
        }
    }

    pub fn state(&self) -> Rc<ResourceState<Vec<Currency>>> {
        self.inner.state()
    }

    pub async fn fetch_currencies(&self) {
        self.inner.fetch(CURRENCIES_KEY, CURRENCIES_PATH).await;
    }

    pub fn reset(&self) {
        self.inner.reset();
    }
}

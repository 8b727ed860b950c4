//! Template shared by every domain store: one cached remote resource, fetched
//! once and kept until an explicit reset.
//!
//! State lives in a yewdux store scoped to the caller's [`yewdux::Context`],
//! so each application instance owns its own cache. Concurrent requests for the
//! same key share a single in-flight future instead of hitting the backend
//! twice.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use serde::de::DeserializeOwned;
use yewdux::{Context, Dispatch, Store};

use crate::api::AuthenticatedFetch;
use crate::errors::FetchError;

pub type FetchOutcome<T> = Result<Option<T>, FetchError>;
type SharedFetch<T> = Shared<LocalBoxFuture<'static, FetchOutcome<T>>>;

/// Reactive state of one cached resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
    /// Resource the cached `data` belongs to.
    pub key: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
            key: None,
        }
    }
}

impl<T: Clone + PartialEq + 'static> Store for ResourceState<T> {
    fn new(_cx: &Context) -> Self {
        Self::default()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

/// Requests currently on the wire, keyed by resource name.
pub struct InFlight<T> {
    pending: RefCell<HashMap<String, SharedFetch<T>>>,
}

impl<T> Default for InFlight<T> {
    fn default() -> Self {
        Self {
            pending: RefCell::new(HashMap::new()),
        }
    }
}

impl<T: Clone + 'static> InFlight<T> {
    /// Joins the request already running for `key`, or starts one with
    /// `start`. The flag tells whether this caller started it.
    pub fn join_or_start<F>(&self, key: &str, start: F) -> (SharedFetch<T>, bool)
    where
        F: FnOnce() -> LocalBoxFuture<'static, FetchOutcome<T>>,
    {
        let mut pending = self.pending.borrow_mut();
        if let Some(existing) = pending.get(key) {
            return (existing.clone(), false);
        }
        let request = start().shared();
        pending.insert(key.to_string(), request.clone());
        (request, true)
    }

    pub fn finish(&self, key: &str) {
        self.pending.borrow_mut().remove(key);
    }

    /// Forgets every running request; late joiners start fresh ones.
    pub fn clear(&self) {
        self.pending.borrow_mut().clear();
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.pending.borrow().contains_key(key)
    }
}

/// Cache-once store for a resource of type `T`.
pub struct ResourceStore<T: Clone + PartialEq + 'static> {
    dispatch: Dispatch<ResourceState<T>>,
    gateway: Rc<AuthenticatedFetch>,
    in_flight: Rc<InFlight<T>>,
    /// Bumped by [`Self::reset`]; fetches started before a reset are discarded.
    generation: Rc<Cell<u64>>,
    /// Key of the most recent fetch. Only its outcome is written.
    latest_key: Rc<RefCell<Option<String>>>,
}

impl<T: Clone + PartialEq + 'static> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            dispatch: self.dispatch.clone(),
            gateway: Rc::clone(&self.gateway),
            in_flight: Rc::clone(&self.in_flight),
            generation: Rc::clone(&self.generation),
            latest_key: Rc::clone(&self.latest_key),
        }
    }
}

impl<T> ResourceStore<T>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    pub fn new(cx: &Context, gateway: Rc<AuthenticatedFetch>) -> Self {
        Self {
            dispatch: Dispatch::new(cx),
            gateway,
            in_flight: Rc::new(InFlight::default()),
            generation: Rc::new(Cell::new(0)),
            latest_key: Rc::new(RefCell::new(None)),
        }
    }

    pub fn state(&self) -> Rc<ResourceState<T>> {
        self.dispatch.get()
    }

    pub fn is_cached(&self, key: &str) -> bool {
        let state = self.dispatch.get();
        state.data.is_some() && state.key.as_deref() == Some(key)
    }

    /// Loads `path` into the store unless `key` is already cached. Errors end
    /// up in the `error` field; nothing is returned to the caller.
    ///
    /// An outcome is dropped when the store was reset meanwhile or when a
    /// fetch for another key started after this one.
    pub async fn fetch(&self, key: &str, path: &str) {
        if self.is_cached(key) {
            return;
        }

        let generation = self.generation.get();
        *self.latest_key.borrow_mut() = Some(key.to_string());
        let (request, leader) = self.in_flight.join_or_start(key, || {
            let gateway = Rc::clone(&self.gateway);
            let path = path.to_string();
            async move { gateway.get::<T>(&path).await.into_result() }.boxed_local()
        });

        if leader {
            self.dispatch.reduce_mut(|state| {
                state.is_loading = true;
                state.error = None;
            });
        }

        let outcome = request.await;
        if self.generation.get() != generation {
            log::debug!("discarding {key}: store was reset");
            return;
        }
        if leader {
            self.in_flight.finish(key);
            if let Err(error) = &outcome {
                log::error!("failed to fetch {key}: {error}");
            }
        }
        if self.latest_key.borrow().as_deref() != Some(key) {
            log::debug!("discarding {key}: superseded by a newer fetch");
            return;
        }

        let key = key.to_string();
        self.dispatch.reduce_mut(|state| {
            match outcome {
                Ok(data) => {
                    state.data = data;
                    state.key = Some(key);
                }
                Err(error) => state.error = Some(error),
            }
            state.is_loading = false;
        });
    }

    /// Drops the cached payload; the next fetch goes to the backend again.
    pub fn reset(&self) {
        self.generation.set(self.generation.get() + 1);
        self.in_flight.clear();
        self.latest_key.borrow_mut().take();
        self.dispatch.set(ResourceState::default());
    }
}

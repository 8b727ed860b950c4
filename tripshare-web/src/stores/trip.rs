use std::fmt::Display;
use std::rc::Rc;

use shared::models::Trip;
use yewdux::Context;

use super::resource::{ResourceState, ResourceStore};
use crate::api::AuthenticatedFetch;

/// The trip currently open. Cached per trip id: asking for another id
/// fetches again, asking for the same one does not.
#[derive(Clone)]
pub struct TripStore {
    inner: ResourceStore<Trip>,
}

impl TripStore {
    pub fn new(cx: &Context, gateway: Rc<AuthenticatedFetch>) -> Self {
        Self {
            inner: ResourceStore::new(cx, gateway),
        }
    }

    pub fn state(&self) -> Rc<ResourceState<Trip>> {
        self.inner.state()
    }

    pub async fn fetch_trip(&self, trip_id: impl Display) {
        self.inner
            .fetch(&format!("trip/{trip_id}"), &format!("/trip/{trip_id}"))
            .await;
    }

    pub fn reset(&self) {
        self.inner.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeTransport, Harness};
    use futures::executor::block_on;

    const TRIP: &str = r#"{
        "id": 5,
        "name": "Lisbonne",
        "description": "",
        "startDate": "2025-04-18",
        "endDate": "2025-04-21",
        "public": false,
        "participants": [],
        "budget": 900,
        "imageSrc": ""
    }"#;

    #[test]
    fn test_fetch_trip_by_id() {
        let harness = Harness::signed_in(FakeTransport::ok(TRIP));
        let store = TripStore::new(&Context::new(), harness.gateway.clone());

        block_on(store.fetch_trip(5));

        let state = store.state();
        assert_eq!(state.data.as_ref().map(|trip| trip.name.as_str()), Some("Lisbonne"));
        assert_eq!(state.key.as_deref(), Some("trip/5"));
        assert_eq!(harness.transport.requests()[0].url, "http://api.test/trip/5");
    }

    #[test]
    fn test_same_trip_cached_other_trip_fetched() {
        let harness = Harness::signed_in(FakeTransport::ok(TRIP));
        let store = TripStore::new(&Context::new(), harness.gateway.clone());

        block_on(store.fetch_trip("5"));
        block_on(store.fetch_trip("5"));
        assert_eq!(harness.transport.calls(), 1);

        block_on(store.fetch_trip("6"));
        assert_eq!(harness.transport.calls(), 2);
        assert_eq!(
            harness.transport.requests()[1].url,
            "http://api.test/trip/6"
        );
    }

    #[test]
    fn test_not_found_keeps_error() {
        let harness = Harness::signed_in(FakeTransport::status(404, "Trip not found"));
        let store = TripStore::new(&Context::new(), harness.gateway.clone());

        block_on(store.fetch_trip(99));

        let state = store.state();
        assert!(state.data.is_none());
        assert!(!state.is_loading);
        assert_eq!(
            state.error.as_ref().map(ToString::to_string),
            Some("Request failed (404): Trip not found".to_string())
        );
    }
}

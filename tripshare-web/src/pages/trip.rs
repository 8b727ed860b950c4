use crate::{
    components::loading::Loading,
    services::ClientServices,
    stores::ResourceState,
};
use chrono::NaiveDate;
use shared::models::{Category, Trip};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct TripPageProps {
    pub id: String,
}

/// `2025-04-18` becomes `18/04/2025`; anything else is shown as sent.
fn format_day(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_or_else(|_| value.to_string(), |day| day.format("%d/%m/%Y").to_string())
}

fn trip_details(trip: &Trip) -> Html {
    html! {
        <section class="card bg-base-200">
            <div class="card-body">
                <h1 class="card-title text-2xl">{&trip.name}</h1>
                if !trip.description.is_empty() {
                    <p>{&trip.description}</p>
                }
                <p>{format!("Du {} au {}", format_day(&trip.start_date), format_day(&trip.end_date))}</p>
                <p>{format!("Budget : {:.2}", trip.budget)}</p>
                <h2 class="font-semibold">{"Participants"}</h2>
                <ul>
                    { for trip.participants.iter().map(|participant| html! {
                        <li key={participant.id}>
                            { participant.participant.as_ref().map_or("Invité", |user| user.username.as_str()) }
                            if !participant.role.is_empty() {
                                <span class="badge badge-ghost ml-2">{&participant.role}</span>
                            }
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(TripPage)]
pub fn trip_page(props: &TripPageProps) -> Html {
    let services = use_context::<ClientServices>();
    let (trip, _) = use_store::<ResourceState<Trip>>();
    // Re-renders the legend when the categories land.
    let _ = use_store::<ResourceState<Vec<Category>>>();
    let categories = services
        .as_ref()
        .and_then(|services| services.categories.mapped_categories());

    use_effect_with(props.id.clone(), move |id| {
        if let Some(services) = services {
            let id = id.clone();
            spawn_local(async move {
                futures::join!(
                    services.trip.fetch_trip(&id),
                    services.categories.fetch_categories()
                );
            });
        }
        || {}
    });

    let expected_key = format!("trip/{}", props.id);
    let body = if let Some(error) = &trip.error {
        html! { <div class="alert alert-error"><span>{error.to_string()}</span></div> }
    } else if let Some(data) = trip
        .data
        .as_ref()
        .filter(|_| trip.key.as_deref() == Some(expected_key.as_str()))
    {
        trip_details(data)
    } else {
        html! { <Loading label="Chargement du voyage" /> }
    };

    html! {
        <div class="grid gap-6 md:grid-cols-3">
            <div class="md:col-span-2">{body}</div>
            <aside>
                <h2 class="text-xl font-semibold mb-2">{"Catégories de dépenses"}</h2>
                <ul class="menu bg-base-200 rounded-box">
                    { for categories.iter().flatten().map(|category| html! {
                        <li key={category.id}>
                            <span class="gap-2">
                                <span class={category.icon}></span>
                                {category.display_name}
                            </span>
                        </li>
                    }) }
                </ul>
            </aside>
        </div>
    }
}

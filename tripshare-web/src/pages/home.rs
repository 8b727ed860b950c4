use crate::{
    components::loading::Loading, routes::Route, services::ClientServices, stores::ResourceState,
};
use shared::models::Currency;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

fn currency_label(currency: &Currency) -> String {
    match (&currency.name, &currency.symbol) {
        (Some(name), Some(symbol)) => format!("{} · {name} ({symbol})", currency.code),
        (Some(name), None) => format!("{} · {name}", currency.code),
        (None, Some(symbol)) => format!("{} ({symbol})", currency.code),
        (None, None) => currency.code.clone(),
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let services = use_context::<ClientServices>();
    let (currencies, _) = use_store::<ResourceState<Vec<Currency>>>();
    let trip_id = use_state(String::new);
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        if let Some(services) = services {
            spawn_local(async move {
                services.currencies.fetch_currencies().await;
            });
        }
        || {}
    });

    let on_trip_id_change = {
        let trip_id = trip_id.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                trip_id.set(input.value());
            }
        })
    };

    let on_open_trip = {
        let trip_id = trip_id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let id = trip_id.trim().to_string();
            if id.is_empty() {
                return;
            }
            if let Some(nav) = &navigator {
                nav.push(&Route::Trip { id });
            }
        })
    };

    let currency_list = if currencies.is_loading {
        html! { <Loading label="Chargement des devises" /> }
    } else if let Some(error) = &currencies.error {
        html! { <div class="alert alert-error"><span>{error.to_string()}</span></div> }
    } else {
        html! {
            <ul class="list bg-base-200 rounded-box">
                { for currencies.data.iter().flatten().map(|currency| html! {
                    <li class="list-row" key={currency.id}>{currency_label(currency)}</li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="grid gap-6 md:grid-cols-2">
            <section class="card bg-base-200">
                <form class="card-body" onsubmit={on_open_trip}>
                    <h2 class="card-title">{"Ouvrir un voyage"}</h2>
                    <input
                        class="input input-bordered"
                        type="text"
                        placeholder="Identifiant du voyage"
                        value={(*trip_id).clone()}
                        oninput={on_trip_id_change}
                    />
                    <button class="btn btn-primary" type="submit" disabled={trip_id.trim().is_empty()}>
                        {"Voir"}
                    </button>
                </form>
            </section>
            <section>
                <h2 class="text-xl font-semibold mb-2">{"Devises"}</h2>
                {currency_list}
            </section>
        </div>
    }
}

use crate::components::loading::Loading;
use crate::routes::{Route, switch};
use crate::services::ClientServices;
use wasm_bindgen_futures::spawn_local;
use yew::context::ContextProvider;
use yew::suspense::Suspense;
use yew::{Html, function_component, html, use_context, use_effect_with, use_memo};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let cx = use_context::<yewdux::Context>().unwrap_or_else(yewdux::Context::new);
    let services = use_memo(cx, ClientServices::browser);

    {
        let services = (*services).clone();
        use_effect_with((), move |_| {
            if services.session.authenticated() && services.session.current_user().is_none() {
                spawn_local(async move {
                    services.session.load_profile(&services.gateway).await;
                });
            }
            || ()
        });
    }

    html! {
        <ContextProvider<ClientServices> context={(*services).clone()}>
            <Suspense fallback={ html!{ <Loading /> } }>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </Suspense>
        </ContextProvider<ClientServices>>
    }
}

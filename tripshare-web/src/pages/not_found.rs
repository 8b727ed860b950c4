use crate::routes::Route;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center gap-4 p-8">
            <h1 class="text-3xl font-bold">{"404"}</h1>
            <p>{"Cette page n'existe pas."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Retour à l'accueil"}</Link<Route>>
        </div>
    }
}

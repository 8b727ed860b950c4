use crate::routes::Route;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Public placeholder until sign-up exists.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    html! {
        <div class="card max-w-md mx-auto bg-base-200">
            <div class="card-body">
                <h2 class="card-title">{"Créer un compte"}</h2>
                <p>{"Les inscriptions ne sont pas encore ouvertes."}</p>
                <Link<Route> to={Route::Login} classes="btn btn-primary">{"J'ai déjà un compte"}</Link<Route>>
            </div>
        </div>
    }
}

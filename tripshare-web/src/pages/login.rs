use crate::{errors::FetchError, routes::Route, services::ClientServices};
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

fn login_error_message(error: &FetchError) -> String {
    match error {
        FetchError::Http { status: 401, .. } => "Identifiants invalides".to_string(),
        FetchError::Network(_) => "Impossible de joindre le serveur".to_string(),
        other => format!("Connexion impossible : {other}"),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let services = use_context::<ClientServices>();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let username_handle = username.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(services) = services.clone() else {
                log::error!("login form rendered without client services");
                return;
            };
            let request = LoginRequest {
                username: (*username_handle).clone(),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match services.login(&request).await {
                    Ok(()) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&Route::Home);
                        }
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        error_ref.set(Some(login_error_message(&err)));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Connexion"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Nom d'utilisateur"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Mot de passe"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Connexion..." } else { "Se connecter" }}
                        </button>
                    </div>
                    <p class="text-sm">
                        <a href="/register" class="link">{"Pas encore de compte ?"}</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

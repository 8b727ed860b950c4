mod api;
mod app;
mod auth;
mod components;
mod config;
mod containers;
mod cookies;
mod errors;
mod logging;
mod navigation;
mod pages;
mod routes;
mod services;
mod stores;
#[cfg(test)]
mod test_support;

use app::App;
use config::FrontendConfig;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(TripshareApp)]
fn tripshare_app() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    logging::install_panic_hook();
    logging::init(FrontendConfig::load().log_level);

    log::info!("Starting Tripshare");

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::error!("no document body to mount the app on");
        return;
    };
    Renderer::<TripshareApp>::with_root(body.into()).render();
}

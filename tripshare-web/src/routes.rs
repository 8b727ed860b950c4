use crate::{
    auth::{GuardDecision, SessionState},
    containers::layout::Layout,
    pages::*,
    services::ClientServices,
};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The app routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/about")]
    About,
    #[at("/trip/:id")]
    Trip { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a guard redirect target, falling back to the login page.
    pub fn for_redirect(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::Login)
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let services = use_context::<ClientServices>();
    let is_authenticated = use_selector(|state: &SessionState| state.authenticated());

    let Some(services) = services else {
        log::error!("route rendered outside of the client services provider");
        return html! {};
    };

    let current_route = props.route.clone();
    if let GuardDecision::Redirect(target) =
        services.guard.check(*is_authenticated, &current_route.to_path())
    {
        return html! { <Redirect<Route> to={Route::for_redirect(&target)} /> };
    }

    match props.route.clone() {
        Route::Login => {
            if *is_authenticated {
                html! { <Redirect<Route> to={Route::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        Route::Register => html! { <Layout {current_route}><RegisterPage /></Layout> },
        Route::About => html! { <Layout {current_route}><AboutPage /></Layout> },
        Route::Home => html! { <Layout {current_route}><HomePage /></Layout> },
        Route::Trip { id } => html! { <Layout {current_route}><TripPage {id} /></Layout> },
        Route::NotFound => html! { <Layout {current_route}><NotFoundPage /></Layout> },
    }
}

/// Switch function for the app routes.
pub fn switch(route: Route) -> Html {
    log::debug!("switching to route: {route:?}");
    html! { <RouteView {route} /> }
}

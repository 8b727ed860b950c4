use crate::{
    auth::SessionState, components::header_nav_item::HeaderNavItem, routes::Route,
    services::ClientServices,
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let services = use_context::<ClientServices>();
    let is_authenticated = use_selector(|state: &SessionState| state.authenticated());
    let username = use_selector(|state: &SessionState| {
        state.user.as_ref().map(|user| user.username.clone())
    });

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(services) = &services {
            services.logout();
        }
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={Route::Home} classes="btn btn-ghost text-lg">
                {"Tripshare"}
            </Link<Route>>
            <ul class="menu menu-horizontal gap-2">
                if *is_authenticated {
                    <HeaderNavItem
                        route={Route::Home}
                        label="Accueil"
                        icon={IconId::HeroiconsOutlineHome}
                        current_route={props.current_route.clone()}
                    />
                }
                <HeaderNavItem
                    route={Route::About}
                    label="À propos"
                    icon={IconId::HeroiconsOutlineInformationCircle}
                    current_route={props.current_route.clone()}
                />
            </ul>
            <div class="flex items-center gap-2">
                if *is_authenticated {
                    if let Some(name) = (*username).clone() {
                        <span class="text-sm text-base-content/80">{name}</span>
                    }
                    <button class="btn btn-ghost btn-sm gap-2" onclick={on_logout}>
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} width="1.2em" height="1.2em" />
                        {"Déconnexion"}
                    </button>
                } else {
                    <Link<Route> to={Route::Login} classes="btn btn-primary btn-sm">
                        {"Connexion"}
                    </Link<Route>>
                }
            </div>
        </nav>
    }
}

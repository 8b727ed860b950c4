use yew::{AttrValue, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route: Route,
    pub label: AttrValue,
    pub icon: IconId,
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<Route> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <Icon icon_id={props.icon} width="1.2em" height="1.2em" />
              {props.label.clone()}
          </Link<Route>>
      </li>
    }
}

use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Chargement"))]
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center justify-center gap-2 p-6">
            <span class="loading loading-dots loading-md"></span>
            <span>{props.label.clone()}</span>
        </div>
    }
}

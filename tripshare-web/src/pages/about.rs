use yew::{Html, function_component, html};

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="prose max-w-2xl">
            <h1>{"À propos"}</h1>
            <p>{"Tripshare permet d'organiser un voyage à plusieurs et de partager ses dépenses entre participants."}</p>
        </div>
    }
}

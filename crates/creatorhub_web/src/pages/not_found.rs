use yew::{function_component, html, Html};
use yew_router::prelude::Link;

use crate::pages::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div>
            <h1>{"404 Not Found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
        </div>
    }
}

use yew::html::onclick::Event;
use yew::{function_component, html, Callback, Html};
use yew_router::prelude::use_navigator;

use crate::pages::Route;

#[function_component]
pub fn Home() -> Html {
    let onclick = use_navigator().map(|navigator| {
        Callback::from(move |_: Event| navigator.push(&Route::SignUp))
    });

    html! {
        <>
            <h1>{"Home"}</h1>
            <p>{"Nothing to see here yet."}</p>
            <div>
                <button {onclick}>{"Create an account"}</button>
            </div>
        </>
    }
}

pub mod config;
pub mod hooks;
pub mod pages;

use yew::{function_component, html, Html, Properties};
use yew_router::BrowserRouter;

use crate::hooks::route_table::{ProvideRouteTable, SharedRouteTable};
use crate::pages::RouteOutlet;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub routes: SharedRouteTable,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    html! {
        <ProvideRouteTable routes={props.routes.clone()}>
        <BrowserRouter>
            <RouteOutlet />
        </BrowserRouter>
        </ProvideRouteTable>
    }
}

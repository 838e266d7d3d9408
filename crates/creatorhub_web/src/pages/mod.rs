pub mod home;
pub mod not_found;
pub mod signup;

use creatorhub_routing::{RouteTable, RouteTableError};
use home::Home;
use not_found::NotFound;
use signup::SignUp;
use yew::{function_component, html, Html};
use yew_router::hooks::use_location;
use yew_router::Routable;

use crate::hooks::route_table::use_route_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `/` and `/signup` by exact path, everything else to [`Route::NotFound`].
pub fn route_table() -> Result<RouteTable<Route>, RouteTableError> {
    RouteTable::builder()
        .route(Route::Home.to_path(), Route::Home)
        .route(Route::SignUp.to_path(), Route::SignUp)
        .fallback(Route::NotFound)
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html!(<Home />),
        Route::SignUp => html!(<SignUp />),
        Route::NotFound => html!(<NotFound />),
    }
}

/// Renders the page the route table picks for the current location.
#[function_component]
pub fn RouteOutlet() -> Html {
    let routes = use_route_table();
    let location = use_location();

    let path = location.as_ref().map(|l| l.path()).unwrap_or_default();

    switch(routes.resolve(path))
}

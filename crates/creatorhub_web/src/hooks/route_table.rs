use std::ops::Deref;
use std::rc::Rc;

use creatorhub_routing::RouteTable;
use yew::{function_component, hook, html, use_context, Children, ContextProvider, Properties};

use crate::pages::Route;

/// The application's route table, shared with the component tree.
#[derive(Debug, Clone)]
pub struct SharedRouteTable(Rc<RouteTable<Route>>);

impl Eq for SharedRouteTable {}
impl PartialEq for SharedRouteTable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedRouteTable {
    type Target = RouteTable<Route>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<RouteTable<Route>> for SharedRouteTable {
    fn from(table: RouteTable<Route>) -> Self {
        Self(Rc::new(table))
    }
}

#[derive(Properties, PartialEq)]
pub struct ProvideRouteTableProps {
    pub routes: SharedRouteTable,
    pub children: Children,
}

#[function_component]
pub fn ProvideRouteTable(props: &ProvideRouteTableProps) -> yew::Html {
    html! {
        <ContextProvider<SharedRouteTable> context={props.routes.clone()}>
            {props.children.clone()}
        </ContextProvider<SharedRouteTable>>
    }
}

#[hook]
pub fn use_route_table() -> SharedRouteTable {
    use_context::<SharedRouteTable>().expect("route table context not found: did you provide it?")
}

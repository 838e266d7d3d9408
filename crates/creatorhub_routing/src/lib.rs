//! Path to page resolution for the creatorhub frontend.
//!
//! A [`RouteTable`] is an ordered list of literal paths closed by exactly one
//! wildcard. Resolution is a linear, first-match-wins scan that always yields
//! a page, so callers never see a "no route" state.

mod pattern;
mod table;

pub use pattern::{path_component, Pattern};
pub use table::{RouteTable, RouteTableBuilder, RouteTableError};

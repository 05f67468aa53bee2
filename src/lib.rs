//! Contact Graph Routing over a static contact plan: given a set of
//! scheduled link windows, compute earliest-arrival routes for a bundle
//! from a source to a destination node.
//!
//! The core is a pure function of its inputs — a [`contact::ContactSet`], a
//! [`neighbor_index::NeighborIndex`] built from it, and a [`query::Query`] —
//! with no shared mutable state, no logging, and no I/O. Everything else in
//! this crate ([`loader`], [`output`], the `cgr` binary) is ambient
//! plumbing around that core.

pub mod contact;
pub mod error;
pub mod eta;
pub mod heap;
pub mod loader;
pub mod neighbor_index;
pub mod output;
pub mod query;
pub mod routing;
pub mod types;

pub use contact::{Contact, ContactSet};
pub use eta::{eta_contact, Eta};
pub use neighbor_index::NeighborIndex;
pub use query::{Filters, Query, Route, Routes};
pub use routing::k_consume::k_routes_by_consumption;
pub use routing::k_yen::k_routes_by_deviation;
pub use routing::single::{best_route, best_route_filtered};

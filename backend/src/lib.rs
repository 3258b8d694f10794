//! User directory backend library.
//!
//! A small CRUD service: five REST endpoints over a user record store, with
//! the domain kept free of transport concerns. The list-shaping logic the
//! clients run lives in the sibling `listview` crate.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use middleware::RequestId;

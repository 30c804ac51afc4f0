//! Generic resource layer
//!
//! A data-driven mapping from symbolic actions to REST calls. Each model
//! declares a static endpoint table; the base layer resolves URL templates,
//! dispatches through the injected client, and wraps replies in a property
//! bag.
//!
//! - [`endpoint`] - endpoint tables, HTTP verbs, template substitution
//! - [`base`] - the [`base::Resource`] property bag, generic dispatch, and
//!   the CRUD capability traits

pub mod base;
pub mod endpoint;

pub use base::{action, ApiResource, Create, Delete, List, Read, Resource, Update};
pub use endpoint::{resolve, EndpointMap, Verb};

//! API transport layer
//!
//! Authentication and HTTP plumbing for the BitGo REST API.
//!
//! - [`auth`] - access tokens and credential validation
//! - [`client`] - the reqwest-backed client and the [`client::ApiClient`]
//!   collaborator trait the resource layer dispatches through

pub mod auth;
pub mod client;

pub use auth::{AccessToken, Credential};
pub use client::{ApiClient, Client, ClientBuilder, Environment, ProxyConfig, SharedClient};

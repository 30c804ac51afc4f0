//! Client library for the BitGo cryptocurrency wallet REST API.
//!
//! The crate is two layers. The [`api`] module is the transport: a
//! reqwest-backed [`Client`] that knows the environment base URL, sends
//! bearer-authenticated JSON requests, and maps error statuses to typed
//! errors. The [`resource`] module is a small data-driven layer on top:
//! each model declares a static endpoint table (action name to URL
//! template and HTTP method), and opts into the CRUD capability traits
//! ([`Create`], [`Read`], [`List`], [`Update`], [`Delete`]) that dispatch
//! through any [`ApiClient`].
//!
//! Models ([`Wallet`], [`WalletShare`], [`Keychain`], [`PendingApproval`])
//! are property bags over the server's JSON with typed accessors for the
//! common fields.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bitgo::{Client, Credential, Environment, Read, SharedClient, Wallet};
//!
//! #[tokio::main]
//! async fn main() -> bitgo::Result<()> {
//!     let client: SharedClient = Arc::new(Client::new(Environment::Test)?);
//!     let credential = Credential::from("my-access-token");
//!
//!     let wallet = Wallet::get(&client, &credential, &[], "2N9VaC4SDRNNnEy6G8zLF8gnHgkY6LV9PsX").await?;
//!     println!("{}: {} satoshis", wallet.label()?, wallet.balance()?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod approval;
pub mod error;
pub mod keychain;
pub mod resource;
pub mod wallet;

pub use api::{AccessToken, ApiClient, Client, ClientBuilder, Credential, Environment, ProxyConfig, SharedClient};
pub use approval::PendingApproval;
pub use error::{Error, Result};
pub use keychain::Keychain;
pub use resource::{
    action, resolve, ApiResource, Create, Delete, EndpointMap, List, Read, Resource, Update, Verb,
};
pub use wallet::{Wallet, WalletShare};

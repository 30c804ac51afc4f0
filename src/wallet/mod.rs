//! Wallets
//!
//! The central resource of the API. Wallets can be created, fetched,
//! listed, and updated; the API offers no way to delete one.

pub mod share;

use serde_json::{json, Value};

use crate::approval::PendingApproval;
use crate::error::Result;
use crate::resource::base::{ApiResource, Create, List, Read, Resource, Update};
use crate::resource::endpoint::EndpointMap;

pub use share::WalletShare;

const ENDPOINTS: EndpointMap = EndpointMap::new(&[
    ("CREATE", ("wallet", "POST")),
    ("READ", ("wallet/:id", "GET")),
    ("LIST", ("wallet", "GET")),
    ("UPDATE", ("wallet/:id", "PUT")),
]);

/// A multi-signature wallet.
#[derive(Debug, Clone)]
pub struct Wallet {
    inner: Resource,
}

impl ApiResource for Wallet {
    fn endpoints() -> EndpointMap {
        ENDPOINTS
    }

    fn from_resource(resource: Resource) -> Self {
        Self { inner: resource }
    }

    fn resource(&self) -> &Resource {
        &self.inner
    }
}

impl Create for Wallet {}
impl Read for Wallet {}
impl List for Wallet {}
impl Update for Wallet {}

impl Wallet {
    pub fn id(&self) -> Result<&str> {
        self.inner.str_property("id")
    }

    pub fn label(&self) -> Result<&str> {
        self.inner.str_property("label")
    }

    pub fn wallet_type(&self) -> Result<&str> {
        self.inner.str_property("type")
    }

    /// Total balance in satoshis, including unconfirmed funds.
    pub fn balance(&self) -> Result<i64> {
        self.inner.i64_property("balance")
    }

    /// Confirmed balance in satoshis.
    pub fn confirmed_balance(&self) -> Result<i64> {
        self.inner.i64_property("confirmedBalance")
    }

    pub fn unconfirmed_sends(&self) -> Result<i64> {
        self.inner.i64_property("unconfirmedSends")
    }

    pub fn unconfirmed_receives(&self) -> Result<i64> {
        self.inner.i64_property("unconfirmedReceives")
    }

    /// Relabel this wallet on the server, returning the updated copy.
    pub async fn set_label(&self, label: &str) -> Result<Self> {
        let id = self.id()?;
        Self::update(
            self.inner.client(),
            self.inner.credential(),
            &[],
            id,
            json!({ "label": label }),
        )
        .await
    }

    /// Approvals pending on this wallet, from the `pendingApprovals`
    /// property the server includes on fetch. Absent property means none.
    pub fn pending_approvals(&self) -> Result<Vec<PendingApproval>> {
        let entries = match self.inner.properties().get("pendingApprovals") {
            Some(value) => value.as_array().cloned().unwrap_or_default(),
            None => Vec::new(),
        };

        entries
            .into_iter()
            .map(|entry: Value| {
                PendingApproval::from_value(self.inner.client(), self.inner.credential(), entry)
            })
            .collect()
    }
}

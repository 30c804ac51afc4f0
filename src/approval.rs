//! Pending approvals
//!
//! Wallet policy can require a second user to sign off on an operation.
//! Such operations park as pending approvals; approving or rejecting one
//! is a state update against its id.

use serde_json::json;

use crate::error::Result;
use crate::resource::base::{ApiResource, List, Read, Resource, Update};
use crate::resource::endpoint::EndpointMap;

const ENDPOINTS: EndpointMap = EndpointMap::new(&[
    ("READ", ("pendingapprovals/:id", "GET")),
    ("LIST", ("pendingapprovals", "GET")),
    ("UPDATE", ("pendingapprovals/:id", "PUT")),
]);

/// An operation awaiting sign-off.
#[derive(Debug, Clone)]
pub struct PendingApproval {
    inner: Resource,
}

impl ApiResource for PendingApproval {
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

impl Read for PendingApproval {}
impl List for PendingApproval {}
impl Update for PendingApproval {}

impl PendingApproval {
    pub fn id(&self) -> Result<&str> {
        self.inner.str_property("id")
    }

    /// `pending`, `approved`, or `rejected`.
    pub fn state(&self) -> Result<&str> {
        self.inner.str_property("state")
    }

    pub fn wallet_id(&self) -> Result<&str> {
        self.inner.str_property("walletId")
    }

    pub fn enterprise_id(&self) -> Result<&str> {
        self.inner.str_property("enterpriseId")
    }

    pub fn creator(&self) -> Result<&str> {
        self.inner.str_property("creator")
    }

    pub fn approval_type(&self) -> Result<&str> {
        self.inner.str_property("type")
    }

    /// Approve this operation, returning the updated approval.
    pub async fn approve(&self) -> Result<Self> {
        self.set_state("approved").await
    }

    /// Reject this operation, returning the updated approval.
    pub async fn reject(&self) -> Result<Self> {
        self.set_state("rejected").await
    }

    async fn set_state(&self, state: &str) -> Result<Self> {
        let id = self.id()?;
        Self::update(
            self.inner.client(),
            self.inner.credential(),
            &[],
            id,
            json!({ "state": state }),
        )
        .await
    }
}

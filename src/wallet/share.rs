//! Wallet shares
//!
//! Sharing grants another user a permission set (`view`, `spend`, `admin`)
//! on a wallet. Creating a share posts against the wallet being shared;
//! pending shares are listed, fetched, and cancelled under `walletshare`.

use serde_json::{json, Map, Value};

use crate::api::auth::Credential;
use crate::api::client::SharedClient;
use crate::error::Result;
use crate::resource::base::{ApiResource, Create, Delete, List, Read, Resource, Update};
use crate::resource::endpoint::EndpointMap;

const ENDPOINTS: EndpointMap = EndpointMap::new(&[
    ("CREATE", ("wallet/:id/simpleshare", "POST")),
    ("READ", ("walletshare/:id", "GET")),
    ("LIST", ("walletshare", "GET")),
    ("UPDATE", ("walletshare/:id", "PUT")),
    ("DELETE", ("walletshare/:id", "DELETE")),
]);

/// An offer to share a wallet with another user.
#[derive(Debug, Clone)]
pub struct WalletShare {
    inner: Resource,
}

impl ApiResource for WalletShare {
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

impl Create for WalletShare {}
impl Read for WalletShare {}
impl List for WalletShare {}
impl Update for WalletShare {}
impl Delete for WalletShare {}

impl WalletShare {
    pub fn id(&self) -> Result<&str> {
        self.inner.str_property("id")
    }

    pub fn wallet_id(&self) -> Result<&str> {
        self.inner.str_property("walletId")
    }

    pub fn permissions(&self) -> Result<&str> {
        self.inner.str_property("permissions")
    }

    /// Share `wallet_id` with the user behind `email`.
    ///
    /// `wallet_password` decrypts the wallet locally so the keychain can be
    /// re-encrypted for the receiver; pass `skip_keychain` instead when the
    /// receiver gets the keychain out of band. `disable_email` suppresses
    /// the notification mail.
    #[allow(clippy::too_many_arguments)]
    pub async fn share_wallet(
        client: &SharedClient,
        credential: &Credential,
        wallet_id: &str,
        email: &str,
        permissions: &[&str],
        wallet_password: Option<&str>,
        skip_keychain: bool,
        disable_email: bool,
    ) -> Result<Self> {
        let mut params = Map::new();
        params.insert("user".to_string(), json!(email));
        params.insert("permissions".to_string(), json!(permissions.join(",")));
        params.insert("skipKeychain".to_string(), json!(skip_keychain));
        params.insert("disableEmail".to_string(), json!(disable_email));
        if let Some(password) = wallet_password {
            params.insert("walletPassphrase".to_string(), json!(password));
        }

        Self::create(client, credential, &[wallet_id], Value::Object(params)).await
    }

    /// Incoming and outgoing shares for the authenticated account.
    pub async fn list_shares(client: &SharedClient, credential: &Credential) -> Result<Self> {
        Self::list(client, credential, &[], None).await
    }

    /// Cancel a pending share (sender side) or remove an accepted one.
    pub async fn cancel(
        client: &SharedClient,
        credential: &Credential,
        share_id: &str,
    ) -> Result<Self> {
        Self::delete(client, credential, &[], share_id).await
    }

    /// Shares offered to the account, from a `LIST` reply.
    pub fn incoming(&self) -> Vec<Value> {
        self.group("incoming")
    }

    /// Shares the account has offered, from a `LIST` reply.
    pub fn outgoing(&self) -> Vec<Value> {
        self.group("outgoing")
    }

    fn group(&self, key: &str) -> Vec<Value> {
        self.inner
            .properties()
            .get(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }
}

//! Keychains
//!
//! A keychain is one leg of a wallet's multi-signature setup, identified
//! by its extended public key. Besides the canonical CRUD actions, the
//! endpoint table carries two server-side creation actions for the BitGo
//! and backup keys.

use serde_json::{json, Map, Value};

use crate::api::auth::Credential;
use crate::api::client::SharedClient;
use crate::error::Result;
use crate::resource::base::{ApiResource, Create, List, Read, Resource, Update};
use crate::resource::endpoint::EndpointMap;

const ENDPOINTS: EndpointMap = EndpointMap::new(&[
    ("CREATE", ("keychain", "POST")),
    ("READ", ("keychain/:xpub", "GET")),
    ("LIST", ("keychain", "GET")),
    ("UPDATE", ("keychain/:xpub", "PUT")),
    ("CREATE_BITGO", ("keychain/bitgo", "POST")),
    ("CREATE_BACKUP", ("keychain/backup", "POST")),
]);

/// One keychain registered on the account.
#[derive(Debug, Clone)]
pub struct Keychain {
    inner: Resource,
}

impl ApiResource for Keychain {
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

impl Create for Keychain {}
impl Read for Keychain {}
impl List for Keychain {}
impl Update for Keychain {}

impl Keychain {
    pub fn xpub(&self) -> Result<&str> {
        self.inner.str_property("xpub")
    }

    pub fn label(&self) -> Result<&str> {
        self.inner.str_property("label")
    }

    pub fn encrypted_xprv(&self) -> Result<&str> {
        self.inner.str_property("encryptedXprv")
    }

    /// List keychains with paging.
    pub async fn list_page(
        client: &SharedClient,
        credential: &Credential,
        skip: u32,
        limit: u32,
    ) -> Result<Self> {
        Self::list(
            client,
            credential,
            &[],
            Some(json!({ "skip": skip, "limit": limit })),
        )
        .await
    }

    /// Register a client-side keychain by its xpub.
    ///
    /// `encrypted_xprv` is the private key encrypted client-side; the
    /// server stores it blind.
    pub async fn add(
        client: &SharedClient,
        credential: &Credential,
        xpub: &str,
        encrypted_xprv: Option<&str>,
        label: Option<&str>,
    ) -> Result<Self> {
        let mut params = Map::new();
        params.insert("xpub".to_string(), json!(xpub));
        if let Some(encrypted_xprv) = encrypted_xprv {
            params.insert("encryptedXprv".to_string(), json!(encrypted_xprv));
        }
        if let Some(label) = label {
            params.insert("label".to_string(), json!(label));
        }

        Self::create(client, credential, &[], Value::Object(params)).await
    }

    /// Have the server create the BitGo leg of a wallet.
    pub async fn create_bitgo(client: &SharedClient, credential: &Credential) -> Result<Self> {
        Self::request_resource(client, credential, "CREATE_BITGO", &[], Some(json!({}))).await
    }

    /// Have the server create a backup key held by a third party.
    pub async fn create_backup(
        client: &SharedClient,
        credential: &Credential,
        provider: &str,
    ) -> Result<Self> {
        Self::request_resource(
            client,
            credential,
            "CREATE_BACKUP",
            &[],
            Some(json!({ "provider": provider })),
        )
        .await
    }
}

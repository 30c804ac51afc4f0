//! Resource base layer
//!
//! [`Resource`] is the property bag behind every API model: the JSON
//! object the server returned, plus the client handle and credential it
//! was fetched with. [`ApiResource`] adds the generic dispatch
//! (`request_resource`) that turns a symbolic action name into an HTTP
//! call through the resource's [`EndpointMap`], and the five capability
//! traits ([`Create`], [`Read`], [`List`], [`Update`], [`Delete`]) are
//! thin wrappers over it that a concrete type opts into.

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::api::auth::Credential;
use crate::api::client::SharedClient;
use crate::error::{Error, Result};
use crate::resource::endpoint::{resolve, EndpointMap};

/// Canonical action names used by the capability traits.
pub mod action {
    pub const CREATE: &str = "CREATE";
    pub const READ: &str = "READ";
    pub const LIST: &str = "LIST";
    pub const UPDATE: &str = "UPDATE";
    pub const DELETE: &str = "DELETE";
}

/// One API entity: its properties and the context it was fetched in.
///
/// Properties are set at construction and not mutated afterwards.
#[derive(Clone)]
pub struct Resource {
    client: SharedClient,
    credential: Credential,
    properties: Map<String, Value>,
}

impl Resource {
    pub fn new(
        client: &SharedClient,
        credential: &Credential,
        properties: Map<String, Value>,
    ) -> Self {
        Self {
            client: client.clone(),
            credential: credential.clone(),
            properties,
        }
    }

    /// Look up a property by key, failing with
    /// [`Error::PropertyNotFound`] when absent.
    pub fn property(&self, key: &str) -> Result<&Value> {
        self.properties
            .get(key)
            .ok_or_else(|| Error::PropertyNotFound(key.to_string()))
    }

    /// A property that must be a JSON string.
    pub fn str_property(&self, key: &str) -> Result<&str> {
        self.property(key)?.as_str().ok_or(Error::PropertyType {
            key: key.to_string(),
            expected: "string",
        })
    }

    /// A property that must be a JSON integer.
    pub fn i64_property(&self, key: &str) -> Result<i64> {
        self.property(key)?.as_i64().ok_or(Error::PropertyType {
            key: key.to_string(),
            expected: "integer",
        })
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn client(&self) -> &SharedClient {
        &self.client
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credential deliberately omitted
        f.debug_struct("Resource")
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

/// A model backed by a static endpoint table.
///
/// Implementors supply the table and the two conversions to and from
/// [`Resource`]; everything else is provided.
#[async_trait]
pub trait ApiResource: Sized + Send {
    /// The static action table for this resource type.
    fn endpoints() -> EndpointMap;

    fn from_resource(resource: Resource) -> Self;

    fn resource(&self) -> &Resource;

    /// Build an instance from an already-parsed JSON object.
    fn from_value(client: &SharedClient, credential: &Credential, payload: Value) -> Result<Self> {
        match payload {
            Value::Object(properties) => {
                Ok(Self::from_resource(Resource::new(client, credential, properties)))
            }
            _ => Err(Error::UnexpectedPayload),
        }
    }

    /// Build an instance from a raw JSON string.
    ///
    /// Equivalent to parsing the string and calling
    /// [`ApiResource::from_value`]; both paths produce identical
    /// properties.
    fn from_json(client: &SharedClient, credential: &Credential, raw: &str) -> Result<Self> {
        let payload: Value = serde_json::from_str(raw)?;
        Self::from_value(client, credential, payload)
    }

    /// Dispatch an action against the API and deserialize the reply.
    ///
    /// Looks up `(template, verb)` for `action`, substitutes `args` into
    /// the template, and performs the call through the injected client.
    /// All validation runs before any network activity.
    async fn request_resource(
        client: &SharedClient,
        credential: &Credential,
        action: &str,
        args: &[&str],
        params: Option<Value>,
    ) -> Result<Self> {
        let (template, verb) = Self::endpoints().lookup(action)?;
        let path = resolve(template, args)?;
        tracing::debug!("dispatch {} -> {} {}", action, verb, path);

        let payload = client
            .request(&path, verb, params.as_ref(), Some(credential))
            .await?;

        Self::from_value(client, credential, payload)
    }
}

/// Capability: create a new resource with `CREATE`.
#[async_trait]
pub trait Create: ApiResource {
    async fn create(
        client: &SharedClient,
        credential: &Credential,
        args: &[&str],
        params: Value,
    ) -> Result<Self> {
        Self::request_resource(client, credential, action::CREATE, args, Some(params)).await
    }
}

/// Capability: fetch one resource by id with `READ`.
///
/// The id is appended as the last positional argument, so it fills the
/// final mutable segment of the `READ` template.
#[async_trait]
pub trait Read: ApiResource {
    async fn get(
        client: &SharedClient,
        credential: &Credential,
        args: &[&str],
        resource_id: &str,
    ) -> Result<Self> {
        let mut mapped = args.to_vec();
        mapped.push(resource_id);
        Self::request_resource(client, credential, action::READ, &mapped, None).await
    }
}

/// Capability: list resources with `LIST`.
#[async_trait]
pub trait List: ApiResource {
    async fn list(
        client: &SharedClient,
        credential: &Credential,
        args: &[&str],
        params: Option<Value>,
    ) -> Result<Self> {
        Self::request_resource(client, credential, action::LIST, args, params).await
    }
}

/// Capability: update one resource by id with `UPDATE`.
#[async_trait]
pub trait Update: ApiResource {
    async fn update(
        client: &SharedClient,
        credential: &Credential,
        args: &[&str],
        resource_id: &str,
        params: Value,
    ) -> Result<Self> {
        let mut mapped = args.to_vec();
        mapped.push(resource_id);
        Self::request_resource(client, credential, action::UPDATE, &mapped, Some(params)).await
    }
}

/// Capability: delete one resource by id with `DELETE`.
#[async_trait]
pub trait Delete: ApiResource {
    async fn delete(
        client: &SharedClient,
        credential: &Credential,
        args: &[&str],
        resource_id: &str,
    ) -> Result<Self> {
        let mut mapped = args.to_vec();
        mapped.push(resource_id);
        Self::request_resource(client, credential, action::DELETE, &mapped, None).await
    }
}

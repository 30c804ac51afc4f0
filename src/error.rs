//! Error types
//!
//! Every failure in this crate is a variant of [`Error`]. Configuration
//! problems (bad credentials, malformed endpoint tables, template arity
//! mismatches) are detected before any network I/O; HTTP-level failures map
//! the interesting 4xx statuses to their own variants so callers can match
//! on them directly.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The supplied access token is blank or otherwise unusable.
    #[error("invalid access token: {0}")]
    InvalidAccessToken(String),

    /// The client could not be configured (bad base URL, bad proxy).
    #[error("invalid client configuration: {0}")]
    InvalidClient(String),

    /// The resource's endpoint table has no entry for this action.
    #[error("unknown action `{0}` for this resource")]
    UnknownAction(String),

    /// The endpoint table entry for this action is malformed.
    #[error("invalid endpoint for action `{action}`: {reason}")]
    InvalidEndpoint { action: String, reason: String },

    /// The endpoint table names an HTTP method outside GET/POST/PUT/DELETE.
    #[error("unsupported HTTP method `{method}` for action `{action}`")]
    InvalidMethod { method: String, action: String },

    /// Positional arguments do not match the template's mutable segments.
    #[error("template `{template}` takes {expected} argument(s) but {supplied} were supplied")]
    TemplateMismatch {
        template: String,
        expected: usize,
        supplied: usize,
    },

    /// A property was requested that the resource does not carry.
    #[error("resource has no property `{0}`")]
    PropertyNotFound(String),

    /// A property exists but has an unexpected JSON type.
    #[error("property `{key}` is not a {expected}")]
    PropertyType { key: String, expected: &'static str },

    /// The response body was not valid JSON.
    #[error("failed to parse response JSON")]
    Deserialize(#[from] serde_json::Error),

    /// The response parsed, but is not the JSON object a resource needs.
    #[error("response payload is not a JSON object")]
    UnexpectedPayload,

    /// HTTP 400: Bad Request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// HTTP 401: Unauthorized.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP 403: Forbidden.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// HTTP 404: Not Found.
    #[error("not found: {0}")]
    NotFound(String),

    /// HTTP 406: Not Acceptable.
    #[error("not acceptable: {0}")]
    NotAcceptable(String),

    /// Any other non-success HTTP status.
    #[error("API returned HTTP {status}")]
    Http { status: u16 },

    /// Connection, TLS, or protocol failure below the API layer.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),
}

//! Credentials
//!
//! BitGo authenticates every privileged call with a bearer token. A
//! [`Credential`] is either a bare token string or an [`AccessToken`], and
//! is validated before any request leaves the process. Token lifecycle
//! (refresh, expiry) is out of scope; tokens are treated as opaque.

use crate::error::{Error, Result};

/// An access token issued by the API.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print token material
        f.debug_struct("AccessToken").finish_non_exhaustive()
    }
}

/// A credential accepted by the client: a raw token string or an
/// [`AccessToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Token(String),
    Access(AccessToken),
}

impl Credential {
    /// The underlying bearer token.
    pub fn token(&self) -> &str {
        match self {
            Self::Token(token) => token,
            Self::Access(access) => access.as_str(),
        }
    }

    /// Check the credential is usable, returning the token on success.
    ///
    /// Runs before any network activity so a blank token never reaches the
    /// wire.
    pub(crate) fn validate(&self) -> Result<&str> {
        let token = self.token();
        if token.trim().is_empty() {
            return Err(Error::InvalidAccessToken(
                "access token is empty".to_string(),
            ));
        }
        Ok(token)
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

impl From<AccessToken> for Credential {
    fn from(access: AccessToken) -> Self {
        Self::Access(access)
    }
}

//! Endpoint credentials.
//!
//! Pure functions only: the authorization record arrives already parsed.

use std::fmt;

use udtask_common::{AUTH_PASSWORD, AUTH_USERNAME, EndpointAuthorization};

use crate::domain::error::TaskError;

/// Credential presented to the server on every udclient invocation.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Basic { username: String, password: String },
    Token(String),
}

impl Credential {
    /// The value that must never appear in logs.
    #[must_use]
    pub fn secret(&self) -> &str {
        match self {
            Self::Basic { password, .. } => password,
            Self::Token(token) => token,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"***").finish(),
        }
    }
}

/// Server URL plus the credential derived from its authorization record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub url: String,
    pub credential: Credential,
}

/// Build an [`EndpointConfig`] from the endpoint's URL and authorization record.
///
/// Without a user name the `password` parameter carries a pre-issued token.
///
/// # Errors
///
/// Returns [`TaskError::Configuration`] when the URL, the record, or its
/// password are missing.
pub fn resolve_endpoint(
    endpoint: &str,
    url: Option<&str>,
    auth: Option<&EndpointAuthorization>,
) -> Result<EndpointConfig, TaskError> {
    let url = url.filter(|u| !u.is_empty()).ok_or_else(|| {
        TaskError::configuration(format!(
            "The IBM UrbanCode Deploy endpoint URL for '{endpoint}' could not be found"
        ))
    })?;
    let auth = auth.ok_or_else(|| {
        TaskError::configuration(format!(
            "The IBM UrbanCode Deploy endpoint '{endpoint}' has no authorization record"
        ))
    })?;
    let password = auth.parameter(AUTH_PASSWORD).ok_or_else(|| {
        TaskError::configuration(format!(
            "The IBM UrbanCode Deploy endpoint '{endpoint}' has no password or token"
        ))
    })?;

    let credential = match auth.parameter(AUTH_USERNAME) {
        Some(username) => Credential::Basic {
            username: username.to_string(),
            password: password.to_string(),
        },
        None => {
            tracing::debug!("username not specified in serverEndpoint, using password as token");
            Credential::Token(password.to_string())
        }
    };

    Ok(EndpointConfig {
        url: url.to_string(),
        credential,
    })
}

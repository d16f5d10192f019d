use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parameter key holding the user name
pub const AUTH_USERNAME: &str = "username";

/// Parameter key holding the password, or the token when no user name is set
pub const AUTH_PASSWORD: &str = "password";

/// Authorization record attached to a service endpoint.
///
/// The host hands this over as JSON, e.g.
/// `{"scheme":"UsernamePassword","parameters":{"username":"u","password":"p"}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointAuthorization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl EndpointAuthorization {
    /// Look up a parameter, treating an empty value as absent.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

//! Host bindings: implementations of the `TaskHost` port.
//!
//! `EnvTaskHost` follows the pipeline agent's environment conventions.
//! `YamlTaskHost` reads the same values from a file so a task can be run by
//! hand outside a pipeline.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use udtask_common::EndpointAuthorization;

use crate::application::ports::TaskHost;

/// Environment key for a task input, e.g. `udClientLocation` → `INPUT_UDCLIENTLOCATION`.
#[must_use]
pub fn input_key(name: &str) -> String {
    format!("INPUT_{}", normalize(name))
}

/// Environment key for a pipeline variable, e.g. `Build.BuildId` → `BUILD_BUILDID`.
#[must_use]
pub fn variable_key(name: &str) -> String {
    normalize(name)
}

fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| if c == '.' || c == ' ' { '_' } else { c.to_ascii_uppercase() })
        .collect()
}

// ── Environment host ─────────────────────────────────────────────────────────

/// Task host backed by a snapshot of process environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvTaskHost {
    vars: HashMap<String, String>,
}

impl EnvTaskHost {
    /// Snapshot the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

impl TaskHost for EnvTaskHost {
    fn input(&self, name: &str) -> Option<String> {
        self.get(&input_key(name))
    }

    fn variable(&self, name: &str) -> Option<String> {
        self.get(&variable_key(name))
    }

    fn endpoint_url(&self, endpoint: &str) -> Option<String> {
        self.get(&format!("ENDPOINT_URL_{endpoint}"))
    }

    fn endpoint_authorization(&self, endpoint: &str) -> Result<Option<EndpointAuthorization>> {
        let Some(raw) = self.get(&format!("ENDPOINT_AUTH_{endpoint}")) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .with_context(|| format!("cannot parse authorization of endpoint '{endpoint}'"))
    }
}

// ── YAML file host ───────────────────────────────────────────────────────────

/// On-disk layout of an inputs file:
///
/// ```yaml
/// inputs:
///   serverEndpoint: ud
///   udComponentId: app1
/// variables:
///   Build.BuildNumber: "42"
/// endpoints:
///   ud:
///     url: https://ucd.example.com:8443
///     auth:
///       scheme: Token
///       parameters: { password: TOK123 }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InputsFile {
    inputs: BTreeMap<String, serde_yaml::Value>,
    variables: BTreeMap<String, serde_yaml::Value>,
    endpoints: BTreeMap<String, EndpointEntry>,
}

#[derive(Debug, Deserialize)]
struct EndpointEntry {
    url: String,
    #[serde(default)]
    auth: Option<EndpointAuthorization>,
}

/// Task host reading inputs, variables and endpoints from a YAML file.
/// Variables missing from the file fall back to the environment host.
#[derive(Debug)]
pub struct YamlTaskHost {
    file: InputsFile,
    fallback: EnvTaskHost,
}

impl YamlTaskHost {
    /// Load an inputs file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, fallback: EnvTaskHost) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::parse(&content, fallback).with_context(|| format!("cannot parse {}", path.display()))
    }

    /// Parse inputs-file YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the inputs-file layout.
    pub fn parse(content: &str, fallback: EnvTaskHost) -> Result<Self> {
        let file: InputsFile = serde_yaml::from_str(content)?;
        Ok(Self { file, fallback })
    }
}

/// Case-insensitive lookup of a scalar value, rendered as a string.
fn scalar(map: &BTreeMap<String, serde_yaml::Value>, name: &str) -> Option<String> {
    let value = map
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)?;
    let text = match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

impl TaskHost for YamlTaskHost {
    fn input(&self, name: &str) -> Option<String> {
        scalar(&self.file.inputs, name)
    }

    fn variable(&self, name: &str) -> Option<String> {
        scalar(&self.file.variables, name).or_else(|| self.fallback.variable(name))
    }

    fn endpoint_url(&self, endpoint: &str) -> Option<String> {
        self.file
            .endpoints
            .get(endpoint)
            .map(|e| e.url.clone())
            .filter(|u| !u.is_empty())
    }

    fn endpoint_authorization(&self, endpoint: &str) -> Result<Option<EndpointAuthorization>> {
        Ok(self.file.endpoints.get(endpoint).and_then(|e| e.auth.clone()))
    }
}

// ── Selected binding ─────────────────────────────────────────────────────────

/// The host binding chosen at startup.
#[derive(Debug)]
pub enum HostBinding {
    Env(EnvTaskHost),
    File(YamlTaskHost),
}

impl HostBinding {
    /// Use `inputs_file` when given, the process environment otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs file cannot be loaded.
    pub fn select(inputs_file: Option<&Path>) -> Result<Self> {
        let env = EnvTaskHost::from_env();
        match inputs_file {
            Some(path) => Ok(Self::File(YamlTaskHost::load(path, env)?)),
            None => Ok(Self::Env(env)),
        }
    }
}

impl TaskHost for HostBinding {
    fn input(&self, name: &str) -> Option<String> {
        match self {
            Self::Env(h) => h.input(name),
            Self::File(h) => h.input(name),
        }
    }

    fn variable(&self, name: &str) -> Option<String> {
        match self {
            Self::Env(h) => h.variable(name),
            Self::File(h) => h.variable(name),
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> Option<String> {
        match self {
            Self::Env(h) => h.endpoint_url(endpoint),
            Self::File(h) => h.endpoint_url(endpoint),
        }
    }

    fn endpoint_authorization(&self, endpoint: &str) -> Result<Option<EndpointAuthorization>> {
        match self {
            Self::Env(h) => h.endpoint_authorization(endpoint),
            Self::File(h) => h.endpoint_authorization(endpoint),
        }
    }
}

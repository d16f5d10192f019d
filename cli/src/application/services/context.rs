//! Application service: turn host inputs into a ready-to-use invocation
//! context.
//!
//! Runs once at startup, before any udclient process is spawned, so that
//! configuration and tool-resolution failures never leave a half-pushed
//! version behind.

use std::path::{Path, PathBuf};

use anyhow::Result;
use udtask_common::{inputs, variables};

use crate::application::ports::{FileProbe, PathLookup, TaskHost};
use crate::application::services::runtime_selector::select_runtime;
use crate::application::services::tool_locator::{LocateRequest, locate_udclient};
use crate::domain::inputs::{parse_bool, split_delimited};
use crate::domain::publish::resolve_upload_path;
use crate::domain::{
    BuildInfo, ComponentVersionContext, EndpointConfig, GlobalOptions, Launch, Runtime, TaskError,
    ToolLocation, resolve_endpoint,
};

/// Everything needed to invoke udclient, resolved once per task run.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: EndpointConfig,
    pub launch: Launch,
    pub options: GlobalOptions,
}

/// Read a required input.
///
/// # Errors
///
/// Returns [`TaskError::Configuration`] when the input is missing or empty.
pub fn required_input(host: &impl TaskHost, name: &str) -> Result<String, TaskError> {
    host.input(name)
        .ok_or_else(|| TaskError::configuration(format!("Input required: {name}")))
}

fn required_variable(host: &impl TaskHost, name: &str) -> Result<String, TaskError> {
    host.variable(name)
        .ok_or_else(|| TaskError::configuration(format!("Variable required: {name}")))
}

/// Resolve the `serverEndpoint` input into a URL and credential.
///
/// # Errors
///
/// Returns [`TaskError::Configuration`] when the endpoint or its
/// credentials are missing, or an error if its authorization record cannot
/// be parsed.
pub fn resolve_server_endpoint(host: &impl TaskHost) -> Result<EndpointConfig> {
    let endpoint = host.input(inputs::SERVER_ENDPOINT).ok_or_else(|| {
        TaskError::configuration("The IBM UrbanCode Deploy Endpoint could not be found")
    })?;
    let url = host.endpoint_url(&endpoint);
    let auth = host.endpoint_authorization(&endpoint)?;
    Ok(resolve_endpoint(&endpoint, url.as_deref(), auth.as_ref())?)
}

/// Locate udclient (and the java runtime when its jar is used).
///
/// # Errors
///
/// Returns [`TaskError::ToolNotFound`] when udclient, its artifact, or java
/// cannot be found.
pub fn locate_tool(
    host: &impl TaskHost,
    fs: &impl FileProbe,
    lookup: &impl PathLookup,
    server_url: Option<&str>,
) -> Result<(ToolLocation, Option<Runtime>)> {
    let override_path = host.input(inputs::UDCLIENT_LOCATION);
    let sentinel = host.variable(variables::SOURCES_DIRECTORY);
    let use_launcher = parse_bool(inputs::USE_LAUNCHER, host.input(inputs::USE_LAUNCHER).as_deref())?;

    let request = LocateRequest {
        override_path: override_path.as_deref(),
        sentinel: sentinel.as_deref(),
        use_launcher,
        server_url,
    };
    let location = locate_udclient(&request, fs, lookup)?;
    let runtime = match location.artifact {
        Some(_) => Some(select_runtime(
            host.variable(variables::JAVA_HOME).as_deref(),
            lookup,
        )?),
        None => None,
    };
    Ok((location, runtime))
}

/// Build the [`ClientSettings`] for this run.
///
/// `force_verbose` turns on udclient's `--verbose` regardless of the
/// `udVerbose` input.
///
/// # Errors
///
/// Returns [`TaskError::Configuration`] or [`TaskError::ToolNotFound`].
pub fn load_client_settings(
    host: &impl TaskHost,
    fs: &impl FileProbe,
    lookup: &impl PathLookup,
    force_verbose: bool,
) -> Result<ClientSettings> {
    let endpoint = resolve_server_endpoint(host)?;
    let working_dir = required_input(host, inputs::WORKING_DIRECTORY)?;
    let verbose = force_verbose
        || parse_bool(inputs::VERBOSE, host.input(inputs::VERBOSE).as_deref())?;
    let extra_args = host
        .input(inputs::GLOBAL_COMMAND_ARGS)
        .map(|raw| split_delimited(&raw))
        .unwrap_or_default();

    let (location, runtime) = locate_tool(host, fs, lookup, Some(&endpoint.url))?;
    let launch = Launch::new(&location, runtime)?;

    Ok(ClientSettings {
        endpoint,
        launch,
        options: GlobalOptions {
            verbose,
            extra_args,
            working_dir: Some(PathBuf::from(working_dir)),
        },
    })
}

/// The udclient command line of the generic task.
///
/// # Errors
///
/// Returns [`TaskError::Configuration`] when `udClientCommandArgs` is
/// missing or holds no arguments.
pub fn load_command_args(host: &impl TaskHost) -> Result<Vec<String>, TaskError> {
    let args = split_delimited(&required_input(host, inputs::COMMAND_ARGS)?);
    if args.is_empty() {
        return Err(TaskError::configuration(format!(
            "Input required: {}",
            inputs::COMMAND_ARGS
        )));
    }
    Ok(args)
}

/// Read the component version inputs and the triggering build's variables.
///
/// # Errors
///
/// Returns [`TaskError::Configuration`] when a required input or build
/// variable is missing.
pub fn load_component_context(host: &impl TaskHost) -> Result<ComponentVersionContext, TaskError> {
    let component_id = required_input(host, inputs::COMPONENT_ID)?;
    let version_name = required_input(host, inputs::COMPONENT_VERSION_NAME)?;
    let checkout_root = host.variable(variables::SOURCES_DIRECTORY);

    let file_to_upload = match host.input(inputs::FILE_TO_UPLOAD) {
        None => None,
        Some(raw) if Some(&raw) == checkout_root.as_ref() => None,
        Some(raw) if Path::new(&raw).is_absolute() => Some(PathBuf::from(raw)),
        Some(raw) => {
            let root = checkout_root.as_deref().ok_or_else(|| {
                TaskError::configuration(format!(
                    "cannot resolve relative {} '{raw}': {} is not set",
                    inputs::FILE_TO_UPLOAD,
                    variables::SOURCES_DIRECTORY
                ))
            })?;
            Some(resolve_upload_path(&raw, Path::new(root)))
        }
    };

    let build = BuildInfo {
        build_number: required_variable(host, variables::BUILD_NUMBER)?,
        build_id: required_variable(host, variables::BUILD_ID)?,
        collection_uri: required_variable(host, variables::COLLECTION_URI)?,
        project: required_variable(host, variables::TEAM_PROJECT)?,
    };

    Ok(ComponentVersionContext {
        component_id,
        version_name,
        file_to_upload,
        tag: host.input(inputs::OPTIONAL_TAG),
        build,
    })
}

/// Whether the agent runs with `System.Debug` turned on. Anything but
/// `true` counts as off.
#[must_use]
pub fn debug_enabled(host: &impl TaskHost) -> bool {
    parse_bool(
        variables::SYSTEM_DEBUG,
        host.variable(variables::SYSTEM_DEBUG).as_deref(),
    )
    .unwrap_or(false)
}

//! Publish workflow planning: which udclient commands push a component
//! version, and with which arguments.
//!
//! Pure functions only. The filesystem is consulted by the caller, which
//! passes in the [`PathKind`] of the upload path.

use std::fmt;
use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use udtask_common::udclient;

use crate::domain::error::TaskError;
use crate::domain::tool::PathKind;

/// Characters escaped in the project segment of the build link.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The build that triggered the task, for the traceability link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub build_number: String,
    pub build_id: String,
    pub collection_uri: String,
    pub project: String,
}

impl BuildInfo {
    /// Human-readable link name, e.g. `VSTS Build: 42`.
    #[must_use]
    pub fn link_name(&self) -> String {
        format!("{}{}", udclient::LINK_NAME_PREFIX, self.build_number)
    }

    /// Build summary page of this build.
    #[must_use]
    pub fn link_url(&self) -> String {
        format!(
            "{}/{}/_build?_a=summary&buildId={}",
            self.collection_uri.trim_end_matches('/'),
            utf8_percent_encode(&self.project, PATH_SEGMENT),
            self.build_id
        )
    }
}

/// Inputs that drive the publish workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentVersionContext {
    pub component_id: String,
    pub version_name: String,
    /// Absolute path of the file or directory to upload.
    pub file_to_upload: Option<PathBuf>,
    pub tag: Option<String>,
    pub build: BuildInfo,
}

/// One state of `CreateVersion -> AttachFiles? -> AttachBuildLink -> ApplyTag?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishStep {
    CreateVersion,
    AttachFiles(PathBuf),
    AttachBuildLink,
    ApplyTag(String),
}

impl PublishStep {
    /// udclient subcommand run by this step.
    #[must_use]
    pub fn command(&self) -> &'static str {
        match self {
            Self::CreateVersion => udclient::CREATE_VERSION,
            Self::AttachFiles(_) => udclient::ADD_VERSION_FILES,
            Self::AttachBuildLink => udclient::ADD_VERSION_LINK,
            Self::ApplyTag(_) => udclient::ADD_VERSION_STATUS,
        }
    }
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateVersion => f.write_str("create version"),
            Self::AttachFiles(path) => write!(f, "upload {}", path.display()),
            Self::AttachBuildLink => f.write_str("link build"),
            Self::ApplyTag(tag) => write!(f, "apply status {tag}"),
        }
    }
}

/// Steps to run for `ctx`, in execution order.
#[must_use]
pub fn plan(ctx: &ComponentVersionContext) -> Vec<PublishStep> {
    let mut steps = vec![PublishStep::CreateVersion];
    if let Some(path) = &ctx.file_to_upload {
        steps.push(PublishStep::AttachFiles(path.clone()));
    }
    steps.push(PublishStep::AttachBuildLink);
    if let Some(tag) = ctx.tag.as_ref().filter(|t| !t.is_empty()) {
        steps.push(PublishStep::ApplyTag(tag.clone()));
    }
    steps
}

/// Resolve a possibly relative upload path against the checkout root.
#[must_use]
pub fn resolve_upload_path(input: &str, checkout_root: &Path) -> PathBuf {
    let path = Path::new(input);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        checkout_root.join(path)
    }
}

/// Command arguments for `step`.
///
/// `upload_kind` is what the upload path stat'ed as; it is only read for
/// [`PublishStep::AttachFiles`].
///
/// # Errors
///
/// Returns [`TaskError::InvalidInput`] when the upload path is neither a
/// file nor a directory.
pub fn step_args(
    ctx: &ComponentVersionContext,
    step: &PublishStep,
    upload_kind: Option<PathKind>,
) -> Result<Vec<String>, TaskError> {
    let component = ctx.component_id.clone();
    let version = ctx.version_name.clone();
    let command = step.command().to_string();
    let args = match step {
        PublishStep::CreateVersion => {
            vec![command, "-component".into(), component, "-name".into(), version]
        }
        PublishStep::AttachFiles(path) => {
            let mut args = vec![command, "-component".into(), component, "-version".into(), version];
            args.extend(upload_args(path, upload_kind)?);
            args
        }
        PublishStep::AttachBuildLink => vec![
            command,
            "-component".into(),
            component,
            "-version".into(),
            version,
            "-linkName".into(),
            ctx.build.link_name(),
            "-link".into(),
            ctx.build.link_url(),
        ],
        PublishStep::ApplyTag(tag) => vec![
            command,
            "-component".into(),
            component,
            "-version".into(),
            version,
            "-status".into(),
            tag.clone(),
        ],
    };
    Ok(args)
}

/// `-base`/`-include` pair for an upload path.
///
/// udclient takes a root directory plus a relative include pattern, so a
/// single file is split into its parent and its name. A directory is
/// uploaded whole.
fn upload_args(path: &Path, kind: Option<PathKind>) -> Result<Vec<String>, TaskError> {
    match kind {
        Some(PathKind::Directory) => Ok(vec!["-base".into(), path.display().to_string()]),
        Some(PathKind::File) => {
            let (Some(base), Some(name)) = (path.parent(), path.file_name()) else {
                return Err(TaskError::InvalidInput(format!(
                    "cannot split upload path {} into a base directory and file name",
                    path.display()
                )));
            };
            Ok(vec![
                "-base".into(),
                base.display().to_string(),
                "-include".into(),
                name.to_string_lossy().into_owned(),
            ])
        }
        Some(PathKind::Other) | None => Err(TaskError::InvalidInput(format!(
            "file to upload {} is neither a file nor a directory",
            path.display()
        ))),
    }
}

//! Application service: push a component version.
//!
//! `CreateVersion -> AttachFiles? -> AttachBuildLink -> ApplyTag?`, strictly
//! in order. The first failing step ends the workflow; later steps never run.

use anyhow::Result;

use crate::application::ports::{CommandRunner, FileProbe, ProgressReporter};
use crate::application::services::udclient::UdClient;
use crate::domain::publish::{self, PublishStep};
use crate::domain::{ComponentVersionContext, PathKind};

/// Steps that completed, in execution order.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub completed: Vec<PublishStep>,
}

/// Run the publish workflow for `ctx`.
///
/// # Errors
///
/// Returns the failing step's error: [`crate::domain::TaskError::InvalidInput`]
/// for an upload path that does not exist, or
/// [`crate::domain::TaskError::ExternalProcess`] when udclient fails.
pub async fn publish_version<R: CommandRunner>(
    client: &UdClient<'_, R>,
    fs: &impl FileProbe,
    ctx: &ComponentVersionContext,
    reporter: &impl ProgressReporter,
) -> Result<PublishReport> {
    let steps = publish::plan(ctx);
    let total = steps.len();
    let mut report = PublishReport::default();

    for step in steps {
        reporter.step(&format!("{} ({})", step, step.command()));
        if let Err(e) = run_step(client, fs, ctx, &step).await {
            reporter.warn(&format!("halted at {}", step.command()));
            tracing::warn!(
                completed = report.completed.len(),
                total,
                "publish workflow halted at {}",
                step.command()
            );
            return Err(e);
        }
        reporter.success(&step.to_string());
        report.completed.push(step);
    }

    tracing::info!(
        component = %ctx.component_id,
        version = %ctx.version_name,
        "component version published"
    );
    Ok(report)
}

async fn run_step<R: CommandRunner>(
    client: &UdClient<'_, R>,
    fs: &impl FileProbe,
    ctx: &ComponentVersionContext,
    step: &PublishStep,
) -> Result<()> {
    let upload_kind = match step {
        PublishStep::AttachFiles(path) => probe(fs, path),
        _ => None,
    };
    let args = publish::step_args(ctx, step, upload_kind)?;
    client.invoke_checked(args).await?;
    Ok(())
}

fn probe(fs: &impl FileProbe, path: &std::path::Path) -> Option<PathKind> {
    match fs.kind(path) {
        Ok(kind) => Some(kind),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot stat file to upload");
            None
        }
    }
}

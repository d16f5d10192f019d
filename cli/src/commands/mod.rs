//! Command implementations

pub mod locate;
pub mod push;
pub mod run;

use anyhow::Result;

use crate::application::ports::PipelineReporter;
use crate::domain::{TaskError, TaskOutcome};

/// Report the task result to the pipeline and pass `result` through.
///
/// Every failure is logged as an error issue and sets the task result to
/// failed; a successful run completes as succeeded.
///
/// # Errors
///
/// Returns `result` unchanged.
pub fn finish(pipeline: &impl PipelineReporter, result: Result<()>) -> Result<()> {
    let mut outcome = TaskOutcome::default();
    if let Err(e) = &result {
        let message = describe(e);
        tracing::debug!(kind = ?e.downcast_ref::<TaskError>().map(TaskError::kind), "task failed");
        pipeline.error(&message);
        outcome.fail(message);
    }
    pipeline.complete(outcome.result(), outcome.message());
    result
}

fn describe(e: &anyhow::Error) -> String {
    match e.downcast_ref::<TaskError>() {
        Some(task_error) => task_error.to_string(),
        None => format!("{e:#}"),
    }
}

//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation: it spawns the
//! process with tokio, streams its stdout/stderr line by line into the
//! task's own output (so the pipeline log shows udclient as it runs), and
//! keeps a copy of both streams for error reporting.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::application::ports::CommandRunner;
use crate::domain::InvocationSpec;

/// Production `CommandRunner` backed by `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, invocation: &InvocationSpec) -> Result<Output> {
        let program = invocation.program.display().to_string();
        let mut command = tokio::process::Command::new(&invocation.program);
        command
            .args(invocation.args())
            .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout_handle = child.stdout.take();
        let stderr_handle = child.stderr.take();

        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            tee(stdout_handle, tokio::io::stdout()),
            tee(stderr_handle, tokio::io::stderr()),
        );

        Ok(Output {
            status: status.with_context(|| format!("waiting for {program}"))?,
            stdout,
            stderr,
        })
    }
}

/// Copy `source` into `sink` line by line, returning everything read.
///
/// A failing sink stops forwarding but never stops capture, so the child is
/// always drained. On a read error the reader is dropped, which closes the
/// pipe instead of leaving the child blocked on it.
async fn tee<R, W>(source: Option<R>, mut sink: W) -> Vec<u8>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut captured = Vec::new();
    let Some(source) = source else {
        return captured;
    };
    let mut reader = BufReader::new(source);
    let mut line = Vec::new();
    let mut forwarding = true;
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {
                if forwarding {
                    if let Err(e) = forward(&mut sink, &line).await {
                        tracing::warn!(error = %e, "cannot forward udclient output, capturing only");
                        forwarding = false;
                    }
                }
                captured.extend_from_slice(&line);
            }
            Err(e) => {
                tracing::warn!(error = %e, "reading udclient output failed");
                break;
            }
        }
    }
    captured
}

async fn forward<W: AsyncWrite + Unpin>(sink: &mut W, line: &[u8]) -> std::io::Result<()> {
    sink.write_all(line).await?;
    sink.flush().await
}

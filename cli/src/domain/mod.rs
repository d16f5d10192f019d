//! Domain layer: pure task logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod credentials;
pub mod error;
pub mod inputs;
pub mod invocation;
pub mod outcome;
pub mod publish;
pub mod tool;

pub use credentials::{Credential, EndpointConfig, resolve_endpoint};
pub use error::TaskError;
pub use invocation::{GlobalOptions, InvocationSpec, Launch, build_invocation};
pub use outcome::{TaskOutcome, TaskResult};
pub use publish::{BuildInfo, ComponentVersionContext, PublishStep};
pub use tool::{PathKind, Runtime, ToolLocation};

//! Application services: use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`: never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod context;
pub mod publish;
pub mod runtime_selector;
pub mod tool_locator;
pub mod udclient;

#[cfg(test)]
pub(crate) mod test_support;

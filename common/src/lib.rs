//! # Pulsr Common
//!
//! Shared vocabulary of the workspace: the endpoint and status models, the
//! contracts (traits) that the engine in `pulsr-core` depends on, runtime
//! configuration and the CSV ingestion collaborator.
//!
//! * **[`monitor`]**: endpoints, projects and probe outcomes.
//! * **[`probe`]**: the outbound ports for the external probe tools.
//! * **[`observer`]**: the callback surface a UI or logger binds to.
//! * **[`ingest`]**: turns CSV rows into a [`monitor::project::ProjectSet`].

pub mod config;
pub mod ingest;
pub mod monitor;
pub mod observer;
pub mod probe;

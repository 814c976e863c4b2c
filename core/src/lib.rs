//! # Pulsr Core
//!
//! The status-checking engine.
//!
//! * **[`probe`]**: the two external probes, spawned as bounded subprocesses.
//! * **[`resolver`]**: composes them into one [`StatusReport`] per endpoint.
//! * **[`store`]**: the only write path for per-row results.
//! * **[`batch`]** and **[`recheck`]**: the controllers driving the resolver,
//!   both exposed as methods on [`StatusEngine`].
//!
//! [`StatusReport`]: pulsr_common::monitor::status::StatusReport

pub mod batch;
pub mod engine;
pub mod probe;
pub mod recheck;
pub mod resolver;
pub mod signal;
pub mod store;

pub use batch::BatchOutcome;
pub use engine::{EngineError, StatusEngine};
pub use signal::StopSignal;

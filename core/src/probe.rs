//! # External Probes
//!
//! Concrete [`ReachabilityProbe`] and [`PathTracer`] implementations backed by
//! the platform's `ping` and `traceroute`/`tracert`.
//!
//! Every invocation goes through [`command::run`], which enforces a watchdog
//! timeout and kills the child when it fires. Failures to launch or finish a
//! tool are logged and collapse into the `ProbeError` variants; they never
//! reach the caller as errors.
//!
//! [`ReachabilityProbe`]: pulsr_common::probe::ReachabilityProbe
//! [`PathTracer`]: pulsr_common::probe::PathTracer

pub mod command;
pub mod ping;
pub mod trace;

pub use command::{CommandTemplate, ProbeFailure};
pub use ping::PingProbe;
pub use trace::TraceRouteProbe;

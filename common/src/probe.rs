//! # Probe Ports
//!
//! Contracts for the two external liveness checks. Implementations live in
//! `pulsr-core::probe`; tests substitute their own.
//!
//! Neither trait returns a `Result`: every failure to run the underlying tool
//! is folded into the `ProbeError` variant before it leaves the probe.

use std::net::IpAddr;

use async_trait::async_trait;

use crate::monitor::status::{ProbeResult, TraceResult};

/// Hop bound used by the resolver's fallback trace.
pub const DEFAULT_MAX_HOPS: u8 = 10;

/// A single-attempt reachability check against one address.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn probe(&self, addr: IpAddr) -> ProbeResult;
}

/// Classification plus whatever the trace tool printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceOutput {
    pub result: TraceResult,
    /// Combined stdout/stderr. Only used for diagnostic display.
    pub transcript: String,
}

impl TraceOutput {
    pub fn new(result: TraceResult, transcript: impl Into<String>) -> Self {
        Self {
            result,
            transcript: transcript.into(),
        }
    }
}

impl From<TraceResult> for TraceOutput {
    fn from(result: TraceResult) -> Self {
        Self::new(result, String::new())
    }
}

/// A hop-bounded path trace against one address.
#[async_trait]
pub trait PathTracer: Send + Sync {
    async fn trace(&self, addr: IpAddr, max_hops: u8) -> TraceOutput;
}

//! # Status Resolver
//!
//! Applies the fallback policy to one endpoint:
//!
//! 1. Run the reachability probe.
//! 2. `Reachable`: done, no trace.
//! 3. Anything else: run the path trace with the configured hop bound. The
//!    report keeps the ping outcome as its tag; the trace is informational.
//!
//! Each probe runs in its own task so that even a panicking probe
//! implementation degrades to `ProbeError` instead of tearing down a pass.

use std::net::IpAddr;
use std::sync::Arc;

use pulsr_common::config::Config;
use pulsr_common::monitor::endpoint::Endpoint;
use pulsr_common::monitor::status::{ProbeResult, StatusReport, TraceResult};
use pulsr_common::probe::{DEFAULT_MAX_HOPS, PathTracer, ReachabilityProbe, TraceOutput};
use tracing::{debug, error};

use crate::probe::{PingProbe, TraceRouteProbe};

/// Stateless apart from its probes, so one resolver can serve any number of
/// concurrent callers.
#[derive(Clone)]
pub struct StatusResolver {
    pinger: Arc<dyn ReachabilityProbe>,
    tracer: Arc<dyn PathTracer>,
    max_hops: u8,
}

impl StatusResolver {
    pub fn new(
        pinger: impl ReachabilityProbe + 'static,
        tracer: impl PathTracer + 'static,
    ) -> Self {
        Self {
            pinger: Arc::new(pinger),
            tracer: Arc::new(tracer),
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    /// Resolver backed by the platform tools, or the templates in `cfg`.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let pinger = PingProbe::from_config(cfg)?;
        let tracer = TraceRouteProbe::from_config(cfg)?;
        Ok(Self::new(pinger, tracer).with_max_hops(cfg.max_hops))
    }

    pub fn with_max_hops(mut self, max_hops: u8) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn max_hops(&self) -> u8 {
        self.max_hops
    }

    pub async fn resolve(&self, endpoint: &Endpoint) -> StatusReport {
        let ping = self.ping(endpoint.address).await;
        if ping == ProbeResult::Reachable {
            debug!("{endpoint} is reachable");
            return StatusReport::reachable(endpoint.clone());
        }

        let trace = self.trace(endpoint).await.result;
        debug!("{endpoint}: ping {ping}, trace {trace}");
        StatusReport::with_trace(endpoint.clone(), ping, trace)
    }

    /// Runs only the path trace, keeping the tool's transcript.
    pub async fn trace(&self, endpoint: &Endpoint) -> TraceOutput {
        let tracer = Arc::clone(&self.tracer);
        let addr: IpAddr = endpoint.address;
        let max_hops: u8 = self.max_hops;

        match tokio::spawn(async move { tracer.trace(addr, max_hops).await }).await {
            Ok(output) => output,
            Err(e) => {
                error!("Path trace task for {addr} aborted: {e}");
                TraceOutput::new(TraceResult::ProbeError, e.to_string())
            }
        }
    }

    async fn ping(&self, addr: IpAddr) -> ProbeResult {
        let pinger = Arc::clone(&self.pinger);

        match tokio::spawn(async move { pinger.probe(addr).await }).await {
            Ok(result) => result,
            Err(e) => {
                error!("Ping task for {addr} aborted: {e}");
                ProbeResult::ProbeError
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

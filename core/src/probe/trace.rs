use std::net::IpAddr;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use pulsr_common::config::Config;
use pulsr_common::monitor::status::TraceResult;
use pulsr_common::probe::{PathTracer, TraceOutput};
use tracing::warn;

use super::command::{self, CommandTemplate};

/// Probes sent per hop by both `traceroute` and `tracert`.
const PROBES_PER_HOP: u32 = 3;

/// Worst-case wait for one unanswered probe, reverse lookup included.
const PROBE_WAIT: Duration = Duration::from_secs(5);

/// Slack on top of the per-hop budget for process start and teardown.
const WATCHDOG_GRACE: Duration = Duration::from_secs(5);

#[cfg(windows)]
const PLATFORM_TEMPLATE: &str = "tracert -h {hops} {addr}";
#[cfg(not(windows))]
const PLATFORM_TEMPLATE: &str = "traceroute -m {hops} {addr}";

/// Hop-bounded path trace backed by `traceroute` (or `tracert` on Windows).
///
/// The watchdog grows with the hop bound so that a trace through silent hops
/// can still run to its own end and report `Failed`.
#[derive(Debug, Clone)]
pub struct TraceRouteProbe {
    template: CommandTemplate,
    min_watchdog: Duration,
}

impl TraceRouteProbe {
    pub fn new(template: CommandTemplate, min_watchdog: Duration) -> Self {
        Self { template, min_watchdog }
    }

    /// Time the tool gets for `max_hops` hops before it is killed.
    pub fn watchdog(&self, max_hops: u8) -> Duration {
        let hop_budget: Duration = PROBE_WAIT * PROBES_PER_HOP * u32::from(max_hops);
        self.min_watchdog.max(hop_budget + WATCHDOG_GRACE)
    }

    pub fn platform_default(min_watchdog: Duration) -> Self {
        let template =
            CommandTemplate::parse(PLATFORM_TEMPLATE).expect("platform trace template is not blank");
        Self::new(template, min_watchdog)
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        match cfg.trace_cmd.as_deref() {
            Some(custom) => {
                let template = CommandTemplate::parse(custom).context("trace command is empty")?;
                Ok(Self::new(template, cfg.trace_timeout))
            }
            None => Ok(Self::platform_default(cfg.trace_timeout)),
        }
    }
}

#[async_trait]
impl PathTracer for TraceRouteProbe {
    async fn trace(&self, addr: IpAddr, max_hops: u8) -> TraceOutput {
        let invocation = self.template.render(&[
            ("addr", addr.to_string()),
            ("hops", max_hops.to_string()),
        ]);
        match command::run(&invocation, self.watchdog(max_hops)).await {
            Ok(completed) if completed.success => TraceOutput::new(TraceResult::Success, completed.output),
            Ok(completed) => TraceOutput::new(TraceResult::Failed, completed.output),
            Err(e) => {
                warn!("Path trace to {addr} failed: {e}");
                TraceOutput::new(TraceResult::ProbeError, e.to_string())
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

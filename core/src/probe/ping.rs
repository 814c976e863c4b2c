use std::net::IpAddr;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use pulsr_common::config::Config;
use pulsr_common::monitor::status::ProbeResult;
use pulsr_common::probe::ReachabilityProbe;
use tracing::{debug, warn};

use super::command::{self, CommandTemplate, Invocation};

/// Extra time the tool gets beyond its own reply timeout before it is killed.
const WATCHDOG_GRACE: Duration = Duration::from_secs(1);

#[cfg(windows)]
const PLATFORM_TEMPLATE: &str = "ping -n 1 -w {timeout_ms} {addr}";
#[cfg(target_os = "macos")]
const PLATFORM_TEMPLATE: &str = "ping -c 1 -W {timeout_ms} {addr}";
#[cfg(not(any(windows, target_os = "macos")))]
const PLATFORM_TEMPLATE: &str = "ping -c 1 -W {timeout_secs} {addr}";

/// Single-attempt reachability probe backed by the platform `ping`.
///
/// `Reachable` iff the tool exits with status 0.
#[derive(Debug, Clone)]
pub struct PingProbe {
    template: CommandTemplate,
    reply_timeout: Duration,
    watchdog: Duration,
}

impl PingProbe {
    pub fn new(template: CommandTemplate, reply_timeout: Duration) -> Self {
        Self {
            template,
            reply_timeout,
            watchdog: reply_timeout + WATCHDOG_GRACE,
        }
    }

    pub fn platform_default(reply_timeout: Duration) -> Self {
        let template =
            CommandTemplate::parse(PLATFORM_TEMPLATE).expect("platform ping template is not blank");
        Self::new(template, reply_timeout)
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        match cfg.ping_cmd.as_deref() {
            Some(custom) => {
                let template = CommandTemplate::parse(custom).context("ping command is empty")?;
                Ok(Self::new(template, cfg.probe_timeout))
            }
            None => Ok(Self::platform_default(cfg.probe_timeout)),
        }
    }

    pub fn with_watchdog(mut self, watchdog: Duration) -> Self {
        self.watchdog = watchdog;
        self
    }

    fn invocation(&self, addr: IpAddr) -> Invocation {
        let secs: u64 = (self.reply_timeout.as_secs_f64().ceil() as u64).max(1);
        let millis: u128 = self.reply_timeout.as_millis().max(1);
        self.template.render(&[
            ("addr", addr.to_string()),
            ("timeout_secs", secs.to_string()),
            ("timeout_ms", millis.to_string()),
        ])
    }
}

#[async_trait]
impl ReachabilityProbe for PingProbe {
    async fn probe(&self, addr: IpAddr) -> ProbeResult {
        let invocation = self.invocation(addr);
        match command::run(&invocation, self.watchdog).await {
            Ok(completed) if completed.success => ProbeResult::Reachable,
            Ok(_) => {
                debug!("{addr} did not answer");
                ProbeResult::Unreachable
            }
            Err(e) => {
                warn!("Ping probe for {addr} failed: {e}");
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

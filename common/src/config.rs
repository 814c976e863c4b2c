use std::time::Duration;

use crate::probe::DEFAULT_MAX_HOPS;

/// Default reply timeout of the reachability probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default minimum watchdog for one path trace run.
///
/// The effective watchdog also grows with the hop bound.
pub const DEFAULT_TRACE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct Config {
    /// Reply timeout handed to the reachability tool.
    ///
    /// The process watchdog is this value plus a short grace period.
    pub probe_timeout: Duration,

    /// Minimum watchdog for the path trace tool.
    ///
    /// Raised per run to cover every hop of the configured bound.
    pub trace_timeout: Duration,

    /// Hop bound handed to the path trace tool.
    pub max_hops: u8,

    /// Overrides the platform reachability command.
    ///
    /// Whitespace separated; `{addr}`, `{timeout_secs}` and `{timeout_ms}`
    /// are substituted per call.
    pub ping_cmd: Option<String>,

    /// Overrides the platform path trace command.
    ///
    /// Whitespace separated; `{addr}` and `{hops}` are substituted per call.
    pub trace_cmd: Option<String>,

    /// 0 prints everything, 1 drops decorations, 2 only prints the summary.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            trace_timeout: DEFAULT_TRACE_TIMEOUT,
            max_hops: DEFAULT_MAX_HOPS,
            ping_cmd: None,
            trace_cmd: None,
            quiet: 0,
        }
    }
}

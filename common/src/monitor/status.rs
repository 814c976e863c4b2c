//! Probe outcomes and the per-endpoint [`StatusReport`].
//!
//! Negative outcomes (`Unreachable`, `Failed`) are ordinary results. Only a
//! tool that could not be run, or did not finish in time, yields `ProbeError`.

use std::fmt;

use super::endpoint::Endpoint;

/// Outcome of the primary reachability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeResult {
    Reachable,
    Unreachable,
    ProbeError,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ProbeResult::Reachable => "Reachable",
            ProbeResult::Unreachable => "Unreachable",
            ProbeResult::ProbeError => "ProbeError",
        };
        f.write_str(text)
    }
}

/// Outcome of the fallback path trace probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceResult {
    Success,
    Failed,
    ProbeError,
}

impl fmt::Display for TraceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TraceResult::Success => "Success",
            TraceResult::Failed => "Failed",
            TraceResult::ProbeError => "ProbeError",
        };
        f.write_str(text)
    }
}

/// Classification used to style or group a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTag {
    /// Loaded but never probed.
    Unknown,
    /// A probe cycle for the row is in flight.
    Checking,
    Active,
    Unreachable,
    ProbeError,
}

impl DisplayTag {
    /// Final tags are the ones a finished probe cycle can produce.
    pub fn is_final(self) -> bool {
        !matches!(self, DisplayTag::Unknown | DisplayTag::Checking)
    }
}

impl From<ProbeResult> for DisplayTag {
    fn from(ping: ProbeResult) -> Self {
        match ping {
            ProbeResult::Reachable => DisplayTag::Active,
            ProbeResult::Unreachable => DisplayTag::Unreachable,
            ProbeResult::ProbeError => DisplayTag::ProbeError,
        }
    }
}

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DisplayTag::Unknown => "Unknown",
            DisplayTag::Checking => "Checking",
            DisplayTag::Active => "Active",
            DisplayTag::Unreachable => "Unreachable",
            DisplayTag::ProbeError => "ProbeError",
        };
        f.write_str(text)
    }
}

/// Result of one probe cycle for one endpoint.
///
/// `trace` is populated if and only if `ping` is not [`ProbeResult::Reachable`];
/// the two constructors are the only way to build a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    endpoint: Endpoint,
    ping: ProbeResult,
    trace: Option<TraceResult>,
    display_tag: DisplayTag,
}

impl StatusReport {
    pub fn reachable(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            ping: ProbeResult::Reachable,
            trace: None,
            display_tag: DisplayTag::Active,
        }
    }

    /// Report for an endpoint whose ping failed, carrying the fallback trace.
    ///
    /// The tag follows the ping outcome; the trace is informational only.
    pub fn with_trace(endpoint: Endpoint, ping: ProbeResult, trace: TraceResult) -> Self {
        if ping == ProbeResult::Reachable {
            return Self::reachable(endpoint);
        }
        Self {
            endpoint,
            ping,
            trace: Some(trace),
            display_tag: DisplayTag::from(ping),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn ping(&self) -> ProbeResult {
        self.ping
    }

    pub fn trace(&self) -> Option<TraceResult> {
        self.trace
    }

    pub fn display_tag(&self) -> DisplayTag {
        self.display_tag
    }

    /// Human readable status line, e.g. `Ping: Unreachable | Trace route: Failed`.
    pub fn status_text(&self) -> String {
        match self.trace {
            None => format!("Ping: {}", self.ping),
            Some(trace) => format!("Ping: {} | Trace route: {}", self.ping, trace),
        }
    }
}

/// Display values for one row, as handed to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub station: String,
    pub sensor: String,
    pub address: String,
    pub status: String,
    pub tag: DisplayTag,
}

impl RowView {
    fn new(endpoint: &Endpoint, status: String, tag: DisplayTag) -> Self {
        Self {
            station: endpoint.station.clone(),
            sensor: endpoint.sensor.clone(),
            address: endpoint.address.to_string(),
            status,
            tag,
        }
    }

    pub fn unknown(endpoint: &Endpoint) -> Self {
        Self::new(endpoint, "Unknown".to_string(), DisplayTag::Unknown)
    }

    pub fn checking(endpoint: &Endpoint) -> Self {
        Self::new(endpoint, "Checking...".to_string(), DisplayTag::Checking)
    }
}

impl From<&StatusReport> for RowView {
    fn from(report: &StatusReport) -> Self {
        RowView::new(report.endpoint(), report.status_text(), report.display_tag())
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

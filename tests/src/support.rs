use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pulsr_common::monitor::endpoint::{Endpoint, SlotId};
use pulsr_common::monitor::status::{DisplayTag, ProbeResult, RowView, TraceResult};
use pulsr_common::observer::StatusObserver;
use pulsr_common::probe::{PathTracer, ReachabilityProbe, TraceOutput};
use pulsr_core::StopSignal;
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Item(SlotId, DisplayTag, String),
    Progress(usize, usize),
    Complete,
    NoSelection,
    Cancelled(usize, usize),
    TraceOutput(SlotId, String),
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Progress(done, total) => Some((done, total)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Event) -> usize {
        self.events().iter().filter(|event| *event == wanted).count()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl StatusObserver for RecordingObserver {
    fn on_item_update(&self, slot: SlotId, row: &RowView) {
        self.push(Event::Item(slot, row.tag, row.status.clone()));
    }
    fn on_progress(&self, done: usize, total: usize) {
        self.push(Event::Progress(done, total));
    }
    fn on_complete(&self) {
        self.push(Event::Complete);
    }
    fn on_no_selection(&self) {
        self.push(Event::NoSelection);
    }
    fn on_cancelled(&self, done: usize, total: usize) {
        self.push(Event::Cancelled(done, total));
    }
    fn on_trace_output(&self, slot: SlotId, transcript: &str) {
        self.push(Event::TraceOutput(slot, transcript.to_string()));
    }
}

/// Answers from a per-address table; unlisted addresses are unreachable.
#[derive(Default, Clone)]
pub struct ScriptedPing {
    answers: Arc<Mutex<HashMap<IpAddr, ProbeResult>>>,
    calls: Arc<Mutex<Vec<IpAddr>>>,
    stop_on: Option<(IpAddr, StopSignal)>,
}

impl ScriptedPing {
    pub fn answer(self, addr: &str, result: ProbeResult) -> Self {
        self.set(addr, result);
        self
    }

    pub fn set(&self, addr: &str, result: ProbeResult) {
        self.answers.lock().unwrap().insert(ip(addr), result);
    }

    /// Raises `stop` while probing `addr`.
    pub fn stopping_at(mut self, addr: &str, stop: StopSignal) -> Self {
        self.stop_on = Some((ip(addr), stop));
        self
    }

    pub fn calls(&self) -> Vec<IpAddr> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReachabilityProbe for ScriptedPing {
    async fn probe(&self, addr: IpAddr) -> ProbeResult {
        self.calls.lock().unwrap().push(addr);
        if let Some((stop_addr, stop)) = &self.stop_on {
            if *stop_addr == addr {
                stop.stop();
            }
        }
        self.answers
            .lock()
            .unwrap()
            .get(&addr)
            .copied()
            .unwrap_or(ProbeResult::Unreachable)
    }
}

/// Always answers `result`, counting calls.
#[derive(Clone)]
pub struct FixedTrace {
    result: TraceResult,
    calls: Arc<AtomicUsize>,
}

impl FixedTrace {
    pub fn new(result: TraceResult) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PathTracer for FixedTrace {
    async fn trace(&self, addr: IpAddr, max_hops: u8) -> TraceOutput {
        self.calls.fetch_add(1, Ordering::SeqCst);
        TraceOutput::new(self.result, format!("traced {addr} in {max_hops} hops"))
    }
}

/// First call parks until released and answers `Unreachable`; every later
/// call answers `Reachable` immediately.
#[derive(Default, Clone)]
pub struct GatedPing {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ReachabilityProbe for GatedPing {
    async fn probe(&self, _addr: IpAddr) -> ProbeResult {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.entered.notify_one();
            self.release.notified().await;
            return ProbeResult::Unreachable;
        }
        ProbeResult::Reachable
    }
}

pub fn ip(addr: &str) -> IpAddr {
    addr.parse().unwrap()
}

pub fn endpoint(station: &str, sensor: &str, addr: &str) -> Endpoint {
    Endpoint::new(station, sensor, ip(addr))
}

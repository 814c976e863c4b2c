//! Full engine against real commands instead of `ping`/`traceroute`.
#![cfg(unix)]

use std::sync::Arc;
use std::time::Duration;

use pulsr_common::config::Config;
use pulsr_common::monitor::endpoint::SlotId;
use pulsr_common::monitor::status::{DisplayTag, ProbeResult, TraceResult};
use pulsr_core::{BatchOutcome, StatusEngine, StopSignal};

use crate::support::{endpoint, Event, RecordingObserver};

fn engine(ping_cmd: &str, trace_cmd: &str) -> (Arc<RecordingObserver>, StatusEngine) {
    let cfg = Config {
        probe_timeout: Duration::from_secs(1),
        trace_timeout: Duration::from_secs(2),
        max_hops: 4,
        ping_cmd: Some(ping_cmd.to_string()),
        trace_cmd: Some(trace_cmd.to_string()),
        ..Config::default()
    };
    let observer = Arc::new(RecordingObserver::default());
    let engine = StatusEngine::from_config(&cfg, observer.clone()).unwrap();
    (observer, engine)
}

#[tokio::test]
async fn successful_tool_means_reachable() {
    let (_observer, engine) = engine("true {addr}", "false {addr}");

    engine
        .run_batch(vec![endpoint("S1", "Sen1", "127.0.0.1")], StopSignal::new())
        .await;

    let report = engine.store().report(SlotId(0)).unwrap();
    assert_eq!(report.ping(), ProbeResult::Reachable);
    assert_eq!(report.trace(), None);
}

#[tokio::test]
async fn failing_tool_falls_back_to_trace() {
    let (observer, engine) = engine("false {addr}", "echo {hops} {addr}");

    engine
        .run_batch(vec![endpoint("S1", "Sen1", "10.0.0.5")], StopSignal::new())
        .await;

    let report = engine.store().report(SlotId(0)).unwrap();
    assert_eq!(report.status_text(), "Ping: Unreachable | Trace route: Success");

    let transcript = engine.trace_only(SlotId(0)).await.unwrap();
    assert_eq!(transcript, TraceResult::Success);
    assert_eq!(
        observer.count(&Event::TraceOutput(SlotId(0), "4 10.0.0.5\n".to_string())),
        1
    );
}

#[tokio::test]
async fn missing_tools_still_complete_the_pass() {
    let (observer, engine) = engine("pulsr-missing-ping {addr}", "pulsr-missing-trace {addr}");
    let endpoints = vec![endpoint("S1", "Sen1", "fe80::1"), endpoint("S1", "Sen2", "10.0.0.1")];

    let outcome = engine.run_batch(endpoints, StopSignal::new()).await;

    assert_eq!(outcome, BatchOutcome::Completed { total: 2 });
    for row in engine.store().rows() {
        assert_eq!(row.tag, DisplayTag::ProbeError);
        assert_eq!(row.status, "Ping: ProbeError | Trace route: ProbeError");
    }
    assert_eq!(observer.count(&Event::Complete), 1);
}

#[tokio::test]
async fn stalled_ping_is_cut_off_by_the_watchdog() {
    let (_observer, engine) = engine("sleep 30", "false {addr}");

    let started = std::time::Instant::now();
    engine
        .run_batch(vec![endpoint("S1", "Sen1", "10.0.0.1")], StopSignal::new())
        .await;

    let report = engine.store().report(SlotId(0)).unwrap();
    assert_eq!(report.ping(), ProbeResult::ProbeError);
    assert_eq!(report.trace(), Some(TraceResult::Failed));
    assert!(started.elapsed() < Duration::from_secs(10));
}

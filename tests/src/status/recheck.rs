use std::sync::Arc;

use pulsr_common::monitor::endpoint::SlotId;
use pulsr_common::monitor::status::{DisplayTag, ProbeResult, TraceResult};
use pulsr_core::resolver::StatusResolver;
use pulsr_core::{BatchOutcome, EngineError, StatusEngine, StopSignal};

use crate::support::{endpoint, Event, FixedTrace, GatedPing, RecordingObserver, ScriptedPing};

fn engine(ping: ScriptedPing, trace: FixedTrace) -> (Arc<RecordingObserver>, StatusEngine) {
    let observer = Arc::new(RecordingObserver::default());
    let engine = StatusEngine::new(StatusResolver::new(ping, trace), observer.clone());
    (observer, engine)
}

#[tokio::test]
async fn recheck_replaces_only_its_row() {
    let ping = ScriptedPing::default();
    let (observer, engine) = engine(ping.clone(), FixedTrace::new(TraceResult::Failed));
    let endpoints = vec![endpoint("S1", "Sen1", "10.0.0.1"), endpoint("S1", "Sen2", "10.0.0.2")];
    engine.run_batch(endpoints, StopSignal::new()).await;
    let before = observer.events().len();

    ping.set("10.0.0.2", ProbeResult::Reachable);
    let report = engine.spawn_recheck(SlotId(1)).await.unwrap().unwrap();

    assert_eq!(report.display_tag(), DisplayTag::Active);
    assert_eq!(engine.store().report(SlotId(1)), Some(report));
    assert_eq!(engine.store().rows()[0].tag, DisplayTag::Unreachable);
    assert_eq!(
        observer.events()[before..],
        [
            Event::Item(SlotId(1), DisplayTag::Checking, "Checking...".to_string()),
            Event::Item(SlotId(1), DisplayTag::Active, "Ping: Reachable".to_string()),
        ]
    );
    assert!(observer.progress().len() == 2, "recheck does not report progress");
}

#[tokio::test]
async fn recheck_of_missing_row_fails() {
    let (_observer, engine) = engine(ScriptedPing::default(), FixedTrace::new(TraceResult::Failed));
    engine.load(&[endpoint("S1", "Sen1", "10.0.0.1")]);

    let result = engine.recheck(SlotId(3)).await;

    assert!(matches!(result, Err(EngineError::UnknownSlot(SlotId(3)))));
}

#[tokio::test]
async fn trace_only_forwards_transcript_and_keeps_report() {
    let ping = ScriptedPing::default().answer("10.0.0.1", ProbeResult::Reachable);
    let trace = FixedTrace::new(TraceResult::Success);
    let (observer, engine) = engine(ping, trace.clone());
    engine
        .run_batch(vec![endpoint("S1", "Sen1", "10.0.0.1")], StopSignal::new())
        .await;
    let before = observer.events().len();

    let result = engine.spawn_trace_only(SlotId(0)).await.unwrap().unwrap();

    assert_eq!(result, TraceResult::Success);
    assert_eq!(trace.calls(), 1);
    assert_eq!(engine.store().report(SlotId(0)).unwrap().trace(), None);
    assert_eq!(
        observer.events()[before..],
        [
            Event::Item(SlotId(0), DisplayTag::Checking, "Checking...".to_string()),
            Event::TraceOutput(SlotId(0), "traced 10.0.0.1 in 10 hops".to_string()),
            Event::Item(SlotId(0), DisplayTag::Active, "Ping: Reachable".to_string()),
        ]
    );
}

#[tokio::test]
async fn trace_only_on_unchecked_row_returns_to_unknown() {
    let (_observer, engine) = engine(ScriptedPing::default(), FixedTrace::new(TraceResult::Failed));
    engine.load(&[endpoint("S1", "Sen1", "10.0.0.1")]);

    let result = engine.trace_only(SlotId(0)).await.unwrap();

    assert_eq!(result, TraceResult::Failed);
    assert_eq!(engine.store().rows()[0].tag, DisplayTag::Unknown);
}

#[tokio::test]
async fn newer_recheck_wins_over_slower_batch_result() {
    let ping = GatedPing::default();
    let observer = Arc::new(RecordingObserver::default());
    let engine = StatusEngine::new(
        StatusResolver::new(ping.clone(), FixedTrace::new(TraceResult::Failed)),
        observer.clone(),
    );
    let endpoints = vec![endpoint("S1", "Sen1", "10.0.0.1"), endpoint("S1", "Sen2", "10.0.0.2")];

    let batch = engine.spawn_batch(endpoints, StopSignal::new());
    ping.entered.notified().await;

    let report = engine.recheck(SlotId(0)).await.unwrap();
    assert_eq!(report.display_tag(), DisplayTag::Active);
    ping.release.notify_one();

    assert_eq!(batch.await.unwrap(), BatchOutcome::Completed { total: 2 });
    assert_eq!(engine.store().rows()[0].tag, DisplayTag::Active);
    assert_eq!(engine.store().rows()[1].tag, DisplayTag::Active);
    assert_eq!(observer.progress(), vec![(1, 2), (2, 2)]);
    assert_eq!(observer.count(&Event::Complete), 1);
}

#[tokio::test]
async fn recheck_that_loses_its_row_reports_superseded() {
    let ping = GatedPing::default();
    let observer = Arc::new(RecordingObserver::default());
    let engine = StatusEngine::new(
        StatusResolver::new(ping.clone(), FixedTrace::new(TraceResult::Failed)),
        observer,
    );
    engine.load(&[endpoint("S1", "Sen1", "10.0.0.1")]);

    let recheck = engine.spawn_recheck(SlotId(0));
    ping.entered.notified().await;
    engine.load(&[endpoint("S9", "Sen9", "10.0.0.9")]);
    ping.release.notify_one();

    let result = recheck.await.unwrap();
    assert!(matches!(result, Err(EngineError::Superseded(SlotId(0)))));
    assert_eq!(engine.store().rows()[0].station, "S9");
    assert_eq!(engine.store().rows()[0].tag, DisplayTag::Unknown);
}

#[tokio::test]
async fn trace_during_batch_keeps_the_batch_result() {
    let ping = GatedPing::default();
    let trace = FixedTrace::new(TraceResult::Failed);
    let observer = Arc::new(RecordingObserver::default());
    let engine = StatusEngine::new(StatusResolver::new(ping.clone(), trace.clone()), observer.clone());

    let batch = engine.spawn_batch(vec![endpoint("S1", "Sen1", "10.0.0.1")], StopSignal::new());
    ping.entered.notified().await;

    let traced = engine.trace_only(SlotId(0)).await.unwrap();
    assert_eq!(traced, TraceResult::Failed);
    assert_eq!(engine.store().rows()[0].tag, DisplayTag::Checking);
    ping.release.notify_one();

    assert_eq!(batch.await.unwrap(), BatchOutcome::Completed { total: 1 });
    let report = engine.store().report(SlotId(0)).expect("batch result is kept");
    assert_eq!(report.status_text(), "Ping: Unreachable | Trace route: Failed");
    assert_eq!(engine.store().rows()[0].tag, DisplayTag::Unreachable);
    assert_eq!(trace.calls(), 2);
    assert_eq!(
        observer.events().last(),
        Some(&Event::Complete),
    );
}

use std::sync::Arc;

use pulsr_common::config::Config;
use pulsr_common::monitor::endpoint::SlotId;
use pulsr_common::monitor::status::TraceResult;
use pulsr_core::StatusEngine;
use tracing::{info, info_span, warn};

use super::RowSelection;
use crate::terminal::{observer::TerminalObserver, print};

pub async fn trace(selection: RowSelection, cfg: &Config) -> anyhow::Result<()> {
    let projects = super::load_projects(&selection.selection.csv)?;
    let endpoints = super::require_project(&projects, &selection.selection)?;

    let observer = Arc::new(TerminalObserver::new(info_span!("trace"), cfg.quiet));
    let engine = StatusEngine::from_config(cfg, observer)?;
    engine.load(endpoints);

    let slot = SlotId(selection.row);
    print::header("tracing route", cfg.quiet);
    let result: TraceResult = engine.spawn_trace_only(slot).await??;

    let endpoint = engine.store().endpoint(slot);
    let target: String = endpoint.map(|e| e.to_string()).unwrap_or_default();
    match result {
        TraceResult::Success => info!("Trace route to {target}: {result}"),
        TraceResult::Failed | TraceResult::ProbeError => warn!("Trace route to {target}: {result}"),
    }
    Ok(())
}

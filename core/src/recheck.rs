//! # Single-Item Recheck Controller
//!
//! On-demand probing of one row of the currently loaded project. Both actions
//! publish the same transitional `Checking` row as a batch pass does.

use pulsr_common::monitor::endpoint::SlotId;
use pulsr_common::monitor::status::{StatusReport, TraceResult};
use tokio::task::JoinHandle;
use tracing::info;

use crate::engine::{EngineError, StatusEngine};

impl StatusEngine {
    /// Resolves one row again and replaces its report.
    ///
    /// Fails for a row that does not exist, and for a result that lost the
    /// row to a newer check or a project reload while it was running.
    pub async fn recheck(&self, slot: SlotId) -> Result<StatusReport, EngineError> {
        let endpoint = self.store.endpoint(slot).ok_or(EngineError::UnknownSlot(slot))?;
        let ticket = self.store.begin(slot).ok_or(EngineError::UnknownSlot(slot))?;

        info!("Rechecking {endpoint}");
        let report = self.resolver.resolve(&endpoint).await;

        if !self.store.commit(ticket, report.clone()) {
            return Err(EngineError::Superseded(slot));
        }
        Ok(report)
    }

    /// Runs only the path trace for one row.
    ///
    /// The transcript goes to `on_trace_output`; the row's report is left as
    /// it was, and a check already running on the row still lands.
    pub async fn trace_only(&self, slot: SlotId) -> Result<TraceResult, EngineError> {
        let endpoint = self.store.endpoint(slot).ok_or(EngineError::UnknownSlot(slot))?;
        let mark = self.store.mark_checking(slot).ok_or(EngineError::UnknownSlot(slot))?;

        info!("Tracing route to {endpoint}");
        let output = self.resolver.trace(&endpoint).await;

        self.store.trace_output(slot, &output.transcript);
        self.store.restore(mark);
        Ok(output.result)
    }

    pub fn spawn_recheck(&self, slot: SlotId) -> JoinHandle<Result<StatusReport, EngineError>> {
        let engine = self.clone();
        tokio::spawn(async move { engine.recheck(slot).await })
    }

    pub fn spawn_trace_only(&self, slot: SlotId) -> JoinHandle<Result<TraceResult, EngineError>> {
        let engine = self.clone();
        tokio::spawn(async move { engine.trace_only(slot).await })
    }
}

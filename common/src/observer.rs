//! # Status Observer
//!
//! Callback surface exposed by the engine. A terminal printer, a logger or a
//! GUI binds to it; the engine never reads anything back.
//!
//! Callbacks are invoked from the engine's worker task while the result store
//! is locked, so implementations must be quick and must not call back into
//! the engine.

use crate::monitor::endpoint::SlotId;
use crate::monitor::status::RowView;

pub trait StatusObserver: Send + Sync {
    /// A row changed, either to a transitional value or to a final report.
    fn on_item_update(&self, slot: SlotId, row: &RowView);

    /// `done` of `total` endpoints have a final report in the current pass.
    fn on_progress(&self, done: usize, total: usize);

    /// The pass finished every endpoint. Called at most once per pass.
    fn on_complete(&self);

    /// A pass was requested with nothing to check.
    fn on_no_selection(&self);

    /// The pass stopped early after `done` of `total` endpoints.
    fn on_cancelled(&self, _done: usize, _total: usize) {}

    /// Raw output of a trace-only diagnostic.
    fn on_trace_output(&self, _slot: SlotId, _transcript: &str) {}
}

/// Observer that ignores everything. Handy for callers that only want the
/// returned reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl StatusObserver for NullObserver {
    fn on_item_update(&self, _slot: SlotId, _row: &RowView) {}
    fn on_progress(&self, _done: usize, _total: usize) {}
    fn on_complete(&self) {}
    fn on_no_selection(&self) {}
}

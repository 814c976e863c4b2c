//! # Result Store
//!
//! Owns the per-row state of the project being checked and is the only place
//! that writes it. Every write notifies the observer while the store lock is
//! held, so observers see row updates in exactly the order they were applied.
//!
//! A probe cycle starts with [`ResultStore::begin`], which hands out a
//! [`Ticket`] and marks the row as `Checking`. Its result is applied with
//! [`ResultStore::commit`] only if no newer cycle has started on that row in
//! the meantime; otherwise it is dropped. A batch pass and a recheck racing on
//! the same row therefore always settle on the most recently started cycle.
//!
//! Diagnostics that never produce a report use [`ResultStore::mark_checking`]
//! instead. A [`Mark`] does not start a cycle, so it cannot invalidate an open
//! ticket, and [`ResultStore::restore`] leaves the row alone once anything else
//! has written it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pulsr_common::monitor::endpoint::{Endpoint, SlotId};
use pulsr_common::monitor::status::{RowView, StatusReport};
use pulsr_common::observer::StatusObserver;
use tracing::debug;

/// Claim on a row for one probe cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: SlotId,
    generation: u64,
}

impl Ticket {
    pub fn slot(&self) -> SlotId {
        self.slot
    }
}

/// Claim on a row's display for a diagnostic that produces no report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    slot: SlotId,
    revision: u64,
}

#[derive(Debug)]
struct Slot {
    endpoint: Endpoint,
    row: RowView,
    report: Option<StatusReport>,
    /// Newest probe cycle started on this row.
    generation: u64,
    /// Bumped on every write to `row`.
    revision: u64,
    /// The newest cycle has not committed yet.
    pending: bool,
}

impl Slot {
    fn settled_row(&self) -> RowView {
        match (&self.report, self.pending) {
            (_, true) => RowView::checking(&self.endpoint),
            (Some(report), false) => RowView::from(report),
            (None, false) => RowView::unknown(&self.endpoint),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    slots: Vec<Slot>,
    next_generation: u64,
}

impl State {
    fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn current(&mut self, ticket: Ticket) -> Option<&mut Slot> {
        self.slots
            .get_mut(ticket.slot.index())
            .filter(|slot| slot.generation == ticket.generation)
    }
}

pub struct ResultStore {
    observer: Arc<dyn StatusObserver>,
    state: Mutex<State>,
}

impl ResultStore {
    pub fn new(observer: Arc<dyn StatusObserver>) -> Self {
        Self {
            observer,
            state: Mutex::new(State::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces every row with `endpoints`, all marked `Unknown`.
    ///
    /// Cycles started before the load can no longer commit.
    pub fn load(&self, endpoints: &[Endpoint]) {
        let mut state = self.lock();
        let generation = state.next_generation();
        state.slots = endpoints
            .iter()
            .map(|endpoint| Slot {
                endpoint: endpoint.clone(),
                row: RowView::unknown(endpoint),
                report: None,
                generation,
                revision: generation,
                pending: false,
            })
            .collect();

        for (idx, slot) in state.slots.iter().enumerate() {
            self.observer.on_item_update(SlotId(idx), &slot.row);
        }
    }

    /// Starts a probe cycle on `slot` and publishes its `Checking` row.
    pub fn begin(&self, slot: SlotId) -> Option<Ticket> {
        let mut state = self.lock();
        let generation = state.next_generation();
        let entry = state.slots.get_mut(slot.index())?;
        entry.generation = generation;
        entry.revision = generation;
        entry.pending = true;
        entry.row = RowView::checking(&entry.endpoint);
        self.observer.on_item_update(slot, &entry.row);
        Some(Ticket { slot, generation })
    }

    /// Applies `report` if `ticket` is still the newest cycle on its row.
    pub fn commit(&self, ticket: Ticket, report: StatusReport) -> bool {
        let mut state = self.lock();
        let revision = state.next_generation();
        let Some(entry) = state.current(ticket) else {
            debug!("Discarding stale result for row {}", ticket.slot);
            return false;
        };
        entry.revision = revision;
        entry.pending = false;
        entry.row = RowView::from(&report);
        entry.report = Some(report);
        self.observer.on_item_update(ticket.slot, &entry.row);
        true
    }

    /// Publishes a `Checking` row for a diagnostic without starting a cycle.
    pub fn mark_checking(&self, slot: SlotId) -> Option<Mark> {
        let mut state = self.lock();
        let revision = state.next_generation();
        let entry = state.slots.get_mut(slot.index())?;
        entry.revision = revision;
        entry.row = RowView::checking(&entry.endpoint);
        self.observer.on_item_update(slot, &entry.row);
        Some(Mark { slot, revision })
    }

    /// Ends a diagnostic, putting back the row it covered.
    ///
    /// A no-op once the row was written after `mark`, e.g. by a commit or a
    /// reload. A cycle still in flight keeps showing `Checking`.
    pub fn restore(&self, mark: Mark) -> bool {
        let mut state = self.lock();
        let revision = state.next_generation();
        let Some(entry) = state
            .slots
            .get_mut(mark.slot.index())
            .filter(|entry| entry.revision == mark.revision)
        else {
            debug!("Row {} changed during the diagnostic, leaving it", mark.slot);
            return false;
        };
        entry.revision = revision;
        entry.row = entry.settled_row();
        self.observer.on_item_update(mark.slot, &entry.row);
        true
    }

    pub fn endpoint(&self, slot: SlotId) -> Option<Endpoint> {
        self.lock()
            .slots
            .get(slot.index())
            .map(|entry| entry.endpoint.clone())
    }

    pub fn report(&self, slot: SlotId) -> Option<StatusReport> {
        self.lock()
            .slots
            .get(slot.index())
            .and_then(|entry| entry.report.clone())
    }

    /// Snapshot of every row in slot order.
    pub fn rows(&self) -> Vec<RowView> {
        self.lock().slots.iter().map(|entry| entry.row.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn progress(&self, done: usize, total: usize) {
        let _state = self.lock();
        self.observer.on_progress(done, total);
    }

    pub(crate) fn complete(&self) {
        let _state = self.lock();
        self.observer.on_complete();
    }

    pub(crate) fn cancelled(&self, done: usize, total: usize) {
        let _state = self.lock();
        self.observer.on_cancelled(done, total);
    }

    pub(crate) fn no_selection(&self) {
        let _state = self.lock();
        self.observer.on_no_selection();
    }

    pub(crate) fn trace_output(&self, slot: SlotId, transcript: &str) {
        let _state = self.lock();
        self.observer.on_trace_output(slot, transcript);
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

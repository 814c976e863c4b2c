//! # Batch Status Controller
//!
//! One sequential sweep over a project's endpoints. Probes run strictly one at
//! a time and in input order, which bounds the number of live probe processes
//! to one and keeps row and progress updates in order.

use pulsr_common::monitor::endpoint::{Endpoint, SlotId};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::engine::StatusEngine;
use crate::signal::StopSignal;

/// How a batch pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Nothing was selected; no row was touched.
    NoSelection,
    Completed { total: usize },
    Cancelled { done: usize, total: usize },
}

impl StatusEngine {
    /// Loads `endpoints` as the current rows and resolves each of them.
    ///
    /// An empty list only triggers `on_no_selection`. Otherwise every
    /// endpoint produces `Checking`, its final row and one `on_progress`,
    /// and the pass ends with either `on_complete` or, when `stop` was set,
    /// `on_cancelled`.
    pub async fn run_batch(&self, endpoints: Vec<Endpoint>, stop: StopSignal) -> BatchOutcome {
        if endpoints.is_empty() {
            warn!("No endpoints selected, nothing to check");
            self.store.no_selection();
            return BatchOutcome::NoSelection;
        }

        let total: usize = endpoints.len();
        self.store.load(&endpoints);
        info!("Checking {total} endpoints");

        for (idx, endpoint) in endpoints.iter().enumerate() {
            if stop.is_stopped() {
                info!("Batch stopped after {idx} of {total} endpoints");
                self.store.cancelled(idx, total);
                return BatchOutcome::Cancelled { done: idx, total };
            }

            let slot = SlotId(idx);
            let ticket = self.store.begin(slot);
            let report = self.resolver.resolve(endpoint).await;
            match ticket {
                Some(ticket) => {
                    self.store.commit(ticket, report);
                }
                None => debug!("Row {slot} vanished before its result arrived"),
            }
            self.store.progress(idx + 1, total);
        }

        self.store.complete();
        BatchOutcome::Completed { total }
    }

    /// Runs [`StatusEngine::run_batch`] on its own task so the caller stays
    /// responsive.
    pub fn spawn_batch(&self, endpoints: Vec<Endpoint>, stop: StopSignal) -> JoinHandle<BatchOutcome> {
        let engine = self.clone();
        tokio::spawn(async move { engine.run_batch(endpoints, stop).await })
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

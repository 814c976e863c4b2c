//! # Status Engine
//!
//! Bundles a [`StatusResolver`] with the [`ResultStore`] it writes into.
//! Cheap to clone; every clone drives the same store, which is what lets a
//! spawned batch task and an interactive recheck share rows safely.
//!
//! The controllers themselves live in [`crate::batch`] and [`crate::recheck`].

use std::sync::Arc;

use pulsr_common::config::Config;
use pulsr_common::monitor::endpoint::{Endpoint, SlotId};
use pulsr_common::observer::StatusObserver;
use thiserror::Error;

use crate::resolver::StatusResolver;
use crate::store::ResultStore;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("row {0} does not exist")]
    UnknownSlot(SlotId),
    #[error("row {0} was checked again or reloaded before the result arrived")]
    Superseded(SlotId),
}

#[derive(Clone)]
pub struct StatusEngine {
    pub(crate) resolver: Arc<StatusResolver>,
    pub(crate) store: Arc<ResultStore>,
}

impl StatusEngine {
    pub fn new(resolver: StatusResolver, observer: Arc<dyn StatusObserver>) -> Self {
        Self {
            resolver: Arc::new(resolver),
            store: Arc::new(ResultStore::new(observer)),
        }
    }

    /// Engine backed by the platform probe tools configured in `cfg`.
    pub fn from_config(cfg: &Config, observer: Arc<dyn StatusObserver>) -> anyhow::Result<Self> {
        Ok(Self::new(StatusResolver::from_config(cfg)?, observer))
    }

    pub fn resolver(&self) -> &StatusResolver {
        &self.resolver
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Shows `endpoints` as unchecked rows without probing anything.
    pub fn load(&self, endpoints: &[Endpoint]) {
        self.store.load(endpoints);
    }
}

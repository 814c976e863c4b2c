use std::sync::Arc;

use pulsr_common::config::Config;
use pulsr_common::monitor::endpoint::SlotId;
use pulsr_core::StatusEngine;
use tracing::{info, info_span};

use super::RowSelection;
use crate::terminal::{observer::TerminalObserver, print};

pub async fn recheck(selection: RowSelection, cfg: &Config) -> anyhow::Result<()> {
    let projects = super::load_projects(&selection.selection.csv)?;
    let endpoints = super::require_project(&projects, &selection.selection)?;

    let observer = Arc::new(TerminalObserver::new(info_span!("recheck"), cfg.quiet));
    let engine = StatusEngine::from_config(cfg, observer)?;
    engine.load(endpoints);

    print::header("checking again", cfg.quiet);
    let report = engine.spawn_recheck(SlotId(selection.row)).await??;
    info!("{} is {}", report.endpoint(), report.display_tag());
    Ok(())
}

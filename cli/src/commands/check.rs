use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use pulsr_common::config::Config;
use pulsr_common::monitor::endpoint::Endpoint;
use pulsr_common::monitor::status::{DisplayTag, RowView};
use pulsr_core::{BatchOutcome, StatusEngine, StopSignal};
use tracing::{Instrument, info_span, warn};

use super::Selection;
use crate::terminal::{colors, format, observer::TerminalObserver, print};

pub async fn check(selection: Selection, cfg: &Config) -> anyhow::Result<()> {
    let projects = super::load_projects(&selection.csv)?;
    let endpoints: Vec<Endpoint> = match selection.project.as_deref() {
        Some(name) => match projects.get(name) {
            Some(endpoints) => endpoints.to_vec(),
            None => {
                warn!("Unknown project '{name}'");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let span = info_span!("check", indicatif.pb_show = true);
    let observer = Arc::new(TerminalObserver::new(span.clone(), cfg.quiet));
    let engine = StatusEngine::from_config(cfg, observer)?;

    let stop = StopSignal::new();
    stop_on_ctrl_c(stop.clone());

    print::header("checking endpoints", cfg.quiet);
    let start_time: Instant = Instant::now();
    let outcome: BatchOutcome = engine.spawn_batch(endpoints, stop).instrument(span).await?;

    match outcome {
        BatchOutcome::NoSelection => {
            print::header("nothing to check", cfg.quiet);
            if cfg.quiet == 0 {
                print::no_results();
            }
            print::print_status(format!("Available projects: {}", super::available(&projects)));
        }
        BatchOutcome::Completed { .. } | BatchOutcome::Cancelled { .. } => {
            print_summary(&engine.store().rows(), outcome, start_time.elapsed(), cfg);
        }
    }
    Ok(())
}

fn stop_on_ctrl_c(stop: StopSignal) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Stopping after the current endpoint...");
            stop.stop();
        }
    });
}

fn count(rows: &[RowView], tag: DisplayTag) -> usize {
    rows.iter().filter(|row| row.tag == tag).count()
}

fn print_summary(rows: &[RowView], outcome: BatchOutcome, total_time: Duration, cfg: &Config) {
    let tally = |tag: DisplayTag, label: &str| -> ColoredString {
        format!("{} {label}", count(rows, tag)).color(format::tag_color(tag)).bold()
    };
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let verb: &str = match outcome {
        BatchOutcome::Cancelled { .. } => "Check Stopped",
        _ => "Check Complete",
    };
    let output: ColoredString = format!(
        "{verb}: {}, {}, {} in {total_time}",
        tally(DisplayTag::Active, "active"),
        tally(DisplayTag::Unreachable, "unreachable"),
        tally(DisplayTag::ProbeError, "errors"),
    )
    .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => print::print(&output.to_string()),
    }
}

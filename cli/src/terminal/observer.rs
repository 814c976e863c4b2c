use colored::*;
use indicatif::ProgressStyle;
use pulsr_common::monitor::endpoint::SlotId;
use pulsr_common::monitor::status::{DisplayTag, RowView};
use pulsr_common::observer::StatusObserver;
use tracing::{Span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::{colors, format, print};

/// Prints rows as they settle and drives the progress bar of `span`.
pub struct TerminalObserver {
    span: Span,
    quiet: u8,
}

impl TerminalObserver {
    pub fn new(span: Span, quiet: u8) -> Self {
        let style = ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:32.green/bright_black}] {pos}/{len}")
            .unwrap()
            .tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]);
        span.pb_set_style(&style);
        Self { span, quiet }
    }
}

impl StatusObserver for TerminalObserver {
    fn on_item_update(&self, slot: SlotId, row: &RowView) {
        match row.tag {
            DisplayTag::Unknown => {}
            DisplayTag::Checking => {
                self.span.pb_set_message(&format!("Checking {}", row.address.color(colors::ACCENT)));
            }
            _ if self.quiet > 1 => {}
            _ if self.quiet == 1 => print::print(&format::row_to_line(row)),
            _ => {
                print::tree_head(slot.index(), &row.station);
                print::as_tree_one_level(format::row_to_details(row));
            }
        }
    }

    fn on_progress(&self, done: usize, total: usize) {
        self.span.pb_set_length(total as u64);
        self.span.pb_set_position(done as u64);
    }

    fn on_complete(&self) {
        self.span.pb_set_message("Done");
    }

    fn on_no_selection(&self) {
        warn!("No project selected.");
    }

    fn on_cancelled(&self, done: usize, total: usize) {
        warn!("Check stopped after {done} of {total} endpoints");
    }

    fn on_trace_output(&self, _slot: SlotId, transcript: &str) {
        for line in transcript.lines() {
            print::print(&format!("  {}", line.color(colors::TEXT_DEFAULT)));
        }
    }
}

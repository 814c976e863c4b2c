use pulsr_common::config::Config;
use pulsr_common::monitor::status::RowView;

use super::Selection;
use crate::terminal::{format, print};

pub fn show(selection: Selection, cfg: &Config) -> anyhow::Result<()> {
    let projects = super::load_projects(&selection.csv)?;
    let endpoints = super::require_project(&projects, &selection)?;

    print::header(selection.project.as_deref().unwrap_or_default(), cfg.quiet);
    for (idx, endpoint) in endpoints.iter().enumerate() {
        let row = RowView::unknown(endpoint);
        match cfg.quiet {
            0 => {
                print::tree_head(idx, &row.station);
                print::as_tree_one_level(format::row_to_details(&row));
            }
            _ => print::print(&format!("[{idx}] {}", format::row_to_line(&row))),
        }
    }
    Ok(())
}

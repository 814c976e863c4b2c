//! # CSV Ingestion
//!
//! Turns `project,station,sensor,address` rows into a [`ProjectSet`].
//!
//! * The first record is a header and is discarded.
//! * A blank project cell inherits the last non-blank project above it.
//! * Records with an invalid IP literal, a missing field, or fewer than four
//!   cells are dropped. Dropping is not an error.
//! * Cells are trimmed. Double-quoted cells may contain commas, newlines and
//!   `""` escapes.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::monitor::endpoint::Endpoint;
use crate::monitor::project::ProjectSet;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no valid rows found")]
    NoValidRows,
}

/// Reads and parses the CSV file at `path`.
pub fn load(path: &Path) -> Result<ProjectSet, IngestError> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parses CSV text. Fails only when no record survives validation.
pub fn parse(text: &str) -> Result<ProjectSet, IngestError> {
    let mut projects = ProjectSet::new();
    let mut last_project: Option<String> = None;

    for (idx, record) in split_records(text).into_iter().enumerate().skip(1) {
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let [project, station, sensor, address, ..] = record.as_slice() else {
            debug!("Dropping record {idx}: expected 4 cells, got {}", record.len());
            continue;
        };

        let project: Option<String> = if project.is_empty() {
            last_project.clone()
        } else {
            Some(project.clone())
        };
        if project.is_some() {
            last_project = project.clone();
        }

        let Ok(addr) = address.parse::<IpAddr>() else {
            debug!("Dropping record {idx}: '{address}' is not an IP address");
            continue;
        };

        let Some(project) = project else {
            debug!("Dropping record {idx}: no project");
            continue;
        };
        if station.is_empty() || sensor.is_empty() {
            debug!("Dropping record {idx}: missing station or sensor");
            continue;
        }

        projects.push(&project, Endpoint::new(station.as_str(), sensor.as_str(), addr));
    }

    if projects.is_empty() {
        return Err(IngestError::NoValidRows);
    }
    Ok(projects)
}

/// Splits CSV text into records of trimmed cells.
fn split_records(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                cell.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if cell.trim().is_empty() => {
                cell.clear();
                in_quotes = true;
            }
            (',', false) => record.push(std::mem::take(&mut cell).trim().to_string()),
            ('\r', false) => {}
            ('\n', false) => {
                record.push(std::mem::take(&mut cell).trim().to_string());
                records.push(std::mem::take(&mut record));
            }
            _ => cell.push(c),
        }
    }

    if !cell.is_empty() || !record.is_empty() {
        record.push(cell.trim().to_string());
        records.push(record);
    }
    records
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

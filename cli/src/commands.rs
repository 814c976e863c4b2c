pub mod check;
pub mod projects;
pub mod recheck;
pub mod show;
pub mod trace;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use pulsr_common::config::Config;
use pulsr_common::ingest;
use pulsr_common::monitor::endpoint::Endpoint;
use pulsr_common::monitor::project::ProjectSet;
use pulsr_common::probe::DEFAULT_MAX_HOPS;

#[derive(Parser)]
#[command(name = "pulsr")]
#[command(about = "Checks whether the stations of a project are still reachable.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reply timeout of the reachability probe, in seconds
    #[arg(long, global = true, default_value_t = 5)]
    pub timeout: u64,

    /// Minimum time a path trace may run, in seconds; grows with --max-hops
    #[arg(long, global = true, default_value_t = 60)]
    pub trace_timeout: u64,

    /// Hop limit of the fallback path trace
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_HOPS,
          value_parser = clap::value_parser!(u8).range(1..=64))]
    pub max_hops: u8,

    /// Custom reachability command, e.g. "ping -c 1 -W {timeout_secs} {addr}"
    #[arg(long, global = true)]
    pub ping_cmd: Option<String>,

    /// Custom path trace command, e.g. "traceroute -m {hops} {addr}"
    #[arg(long, global = true)]
    pub trace_cmd: Option<String>,

    /// Less output; repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the projects found in a CSV file
    #[command(alias = "p")]
    Projects { csv: PathBuf },
    /// List the endpoints of a project without probing them
    #[command(alias = "l")]
    Show(Selection),
    /// Check every endpoint of a project
    #[command(alias = "c")]
    Check(Selection),
    /// Check a single endpoint again
    #[command(alias = "r")]
    Recheck(RowSelection),
    /// Trace the route to a single endpoint and print the tool's output
    #[command(alias = "t")]
    Trace(RowSelection),
}

#[derive(Args)]
pub struct Selection {
    /// CSV file with project,station,sensor,ip rows
    pub csv: PathBuf,
    /// Project to work on
    #[arg(short, long)]
    pub project: Option<String>,
}

#[derive(Args)]
pub struct RowSelection {
    #[command(flatten)]
    pub selection: Selection,
    /// Row index as printed by `show`
    #[arg(short, long)]
    pub row: usize,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            probe_timeout: Duration::from_secs(self.timeout),
            trace_timeout: Duration::from_secs(self.trace_timeout),
            max_hops: self.max_hops,
            ping_cmd: self.ping_cmd.clone(),
            trace_cmd: self.trace_cmd.clone(),
            quiet: self.quiet,
        }
    }
}

pub fn load_projects(csv: &Path) -> anyhow::Result<ProjectSet> {
    ingest::load(csv).with_context(|| format!("failed to load CSV file {}", csv.display()))
}

/// Endpoints of the selected project, or an error naming the valid choices.
pub fn require_project<'a>(projects: &'a ProjectSet, selection: &Selection) -> anyhow::Result<&'a [Endpoint]> {
    let name: &str = selection
        .project
        .as_deref()
        .with_context(|| format!("no project selected, choose one of: {}", available(projects)))?;
    projects
        .get(name)
        .with_context(|| format!("unknown project '{name}', choose one of: {}", available(projects)))
}

pub fn available(projects: &ProjectSet) -> String {
    projects.names().collect::<Vec<&str>>().join(", ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

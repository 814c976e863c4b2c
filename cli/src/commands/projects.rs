use std::path::Path;

use pulsr_common::config::Config;

use crate::terminal::print;

pub fn projects(csv: &Path, cfg: &Config) -> anyhow::Result<()> {
    let projects = super::load_projects(csv)?;

    print::header("projects", cfg.quiet);
    let key_width: usize = projects.names().map(str::len).max().unwrap_or(0);
    for (name, endpoints) in projects.iter() {
        let unit: &str = if endpoints.len() == 1 { "endpoint" } else { "endpoints" };
        print::aligned_line(name, format!("{} {unit}", endpoints.len()), key_width);
    }

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    print::print_status(format!(
        "{} projects, {} endpoints in total",
        projects.len(),
        projects.endpoint_count()
    ));
    Ok(())
}

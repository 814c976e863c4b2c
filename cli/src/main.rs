mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, projects, recheck, show, trace};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.quiet);

    match commands.command {
        Commands::Projects { csv } => projects::projects(&csv, &cfg),
        Commands::Show(selection) => show::show(selection, &cfg),
        Commands::Check(selection) => check::check(selection, &cfg).await,
        Commands::Recheck(selection) => recheck::recheck(selection, &cfg).await,
        Commands::Trace(selection) => trace::trace(selection, &cfg).await,
    }
}

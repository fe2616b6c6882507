use std::io;

use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::{check, generate, ksyms, list};
use cli::config::Settings;
use cli::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet));

    match &cli.command {
        Commands::Generate { table } => {
            generate::generate_files(&Settings::resolve(table)?)?;
            Ok(())
        }
        Commands::Check { table } => check::check_files(&Settings::resolve(table)?),
        Commands::List { table } => list::list_table(&Settings::resolve(table)?, io::stdout().lock()),
        Commands::Ksyms { null } => ksyms::ksyms_command(*null),
    }
}

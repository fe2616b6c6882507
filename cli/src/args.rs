use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gen-syscalls")]
#[command(about = "Generate the kernel system call table and numbers header", long_about = None)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

/// Inputs shared by every command that reads the master file.
/// Flags override the config file, which overrides built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct TableArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Master definitions file
    #[arg(long)]
    pub master: Option<PathBuf>,
    /// Output header with call-number constants
    #[arg(long)]
    pub header: Option<PathBuf>,
    /// Output dispatch-table source
    #[arg(long)]
    pub source: Option<PathBuf>,
    /// Keep the last definition when a call number repeats instead of failing
    #[arg(long)]
    pub allow_duplicates: bool,
    /// Emit positional table rows instead of `[N] =` designated initializers
    #[arg(long)]
    pub positional: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the header and dispatch table from the master file
    Generate {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Fail if the generated files are missing or out of date
    Check {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Print the parsed call table
    List {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Reformat an `<address> <size> <name>` symbol dump from stdin
    Ksyms {
        /// Write `name\0address\0` records instead of text lines
        #[arg(long)]
        null: bool,
    },
}

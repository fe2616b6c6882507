use std::io;

use anyhow::{Context, Result};
use log::debug;
use syscall_table::ksyms::{reformat, SymbolFormat};

pub fn ksyms_command(null: bool) -> Result<()> {
    let format = if null {
        SymbolFormat::Null
    } else {
        SymbolFormat::Text
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let count = reformat(stdin.lock(), stdout.lock(), format)
        .context("failed to reformat symbol dump")?;
    debug!("wrote {count} symbols");
    Ok(())
}

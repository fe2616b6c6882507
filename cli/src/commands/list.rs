use std::io::Write;

use anyhow::Result;

use crate::commands::load_table;
use crate::config::Settings;

/// Print the table the way `generate` sees it: ascending, one call per line.
pub fn list_table<W: Write>(settings: &Settings, mut out: W) -> Result<()> {
    let table = load_table(settings)?;

    writeln!(out, "== {} ==", settings.master.display())?;
    writeln!(out, "{:>6}  {:<24} {}", "NR", "NAME", "ARGS")?;
    for def in &table {
        writeln!(out, "{:>6}  {:<24} {}", def.number(), def.name(), def.arg_count())?;
    }
    match table.max_nr() {
        Some(max_nr) => writeln!(
            out,
            "{} calls, {} = {}",
            table.len(),
            settings.emit.sentinel_name(),
            max_nr
        )?,
        None => writeln!(out, "no calls defined")?,
    }
    Ok(())
}

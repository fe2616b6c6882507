pub mod check;
pub mod generate;
pub mod ksyms;
pub mod list;

use anyhow::{Context, Result};
use syscall_table::{emit, Artifacts, CallTable, Loader};

use crate::config::Settings;

/// Load the master file named by `settings`, failing on the first bad line.
pub(crate) fn load_table(settings: &Settings) -> Result<CallTable> {
    Loader::new()
        .duplicates(settings.duplicates)
        .load(&settings.master)
        .with_context(|| format!("failed to load {}", settings.master.display()))
}

/// Validate and render; the error names the master file that produced the table.
pub(crate) fn render(settings: &Settings, table: &CallTable) -> Result<Artifacts> {
    emit(table, &settings.emit)
        .with_context(|| format!("invalid system call table in {}", settings.master.display()))
}

use anyhow::Result;
use log::info;
use syscall_table::Artifacts;

use crate::commands::{load_table, render};
use crate::config::Settings;
use crate::output::{write_all_or_nothing, Artifact};

/// Load, validate and render, then write both artifacts. Nothing is
/// written unless every step before it succeeded.
pub fn generate_files(settings: &Settings) -> Result<Artifacts> {
    let table = load_table(settings)?;
    let artifacts = render(settings, &table)?;

    let written = write_all_or_nothing(&[
        Artifact {
            path: &settings.header,
            contents: &artifacts.header,
        },
        Artifact {
            path: &settings.source,
            contents: &artifacts.source,
        },
    ])?;

    info!(
        "{} calls, {} = {}; {} of 2 files updated ({}, {})",
        table.len(),
        settings.emit.sentinel_name(),
        artifacts.max_nr,
        written,
        settings.header.display(),
        settings.source.display()
    );
    Ok(artifacts)
}

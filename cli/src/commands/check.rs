use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;
use syscall_table::read_constants;

use crate::commands::{load_table, render};
use crate::config::Settings;

/// Compare the files on disk with what `generate` would write.
pub fn check_files(settings: &Settings) -> Result<()> {
    let table = load_table(settings)?;
    let artifacts = render(settings, &table)?;

    let mut problems = Vec::new();

    if let Some(on_disk) = read_existing(&settings.header)? {
        if on_disk != artifacts.header {
            let drift = constant_drift(&on_disk, &artifacts.header);
            if drift.is_empty() {
                problems.push(format!("{} is stale", settings.header.display()));
            } else {
                problems.push(format!(
                    "{} is stale: {}",
                    settings.header.display(),
                    drift.join(", ")
                ));
            }
        }
    } else {
        problems.push(format!("{} is missing", settings.header.display()));
    }

    match read_existing(&settings.source)? {
        Some(on_disk) if on_disk == artifacts.source => {}
        Some(_) => problems.push(format!("{} is stale", settings.source.display())),
        None => problems.push(format!("{} is missing", settings.source.display())),
    }

    if !problems.is_empty() {
        bail!(
            "generated files are out of date ({}); run `gen-syscalls generate`",
            problems.join("; ")
        );
    }

    info!("{} and {} are up to date", settings.header.display(), settings.source.display());
    Ok(())
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
    }
}

/// Constants that differ between two headers, in name order.
pub fn constant_drift(on_disk: &str, fresh: &str) -> Vec<String> {
    let old: BTreeMap<String, u64> = read_constants(on_disk)
        .into_iter()
        .map(|c| (c.name, c.value))
        .collect();
    let new: BTreeMap<String, u64> = read_constants(fresh)
        .into_iter()
        .map(|c| (c.name, c.value))
        .collect();

    let mut drift = Vec::new();
    for (name, value) in &new {
        match old.get(name) {
            None => drift.push(format!("{name} added")),
            Some(prev) if prev != value => drift.push(format!("{name} {prev} -> {value}")),
            Some(_) => {}
        }
    }
    for name in old.keys().filter(|name| !new.contains_key(*name)) {
        drift.push(format!("{name} removed"));
    }
    drift
}

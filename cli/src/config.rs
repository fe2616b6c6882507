//! Resolved settings for a generator run.
//!
//! A TOML file may set any of:
//!
//! ```toml
//! master = "kernel/syscall/syscalls.master"
//! header = "include/sys/syscalls.h"
//! source = "kernel/syscall/syscall_table.c"
//! allow_duplicates = false
//!
//! [emit]
//! prefix = "SYS_"
//! sentinel = "MAXNR"
//! rows = "indexed"
//! ```
//!
//! Paths are taken relative to the working directory, which is the
//! build root when invoked from the build.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use syscall_table::{DuplicatePolicy, EmitConfig, RowStyle};

use crate::args::TableArgs;

pub const DEFAULT_MASTER: &str = "kernel/syscall/syscalls.master";
pub const DEFAULT_HEADER: &str = "include/sys/syscalls.h";
pub const DEFAULT_SOURCE: &str = "kernel/syscall/syscall_table.c";

/// Contents of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub master: Option<PathBuf>,
    pub header: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub allow_duplicates: Option<bool>,
    pub emit: EmitConfig,
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub master: PathBuf,
    pub header: PathBuf,
    pub source: PathBuf,
    pub duplicates: DuplicatePolicy,
    pub emit: EmitConfig,
}

impl Settings {
    pub fn resolve(args: &TableArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load_config(path)?,
            None => FileConfig::default(),
        };

        let mut emit = file.emit;
        if args.positional {
            emit.rows = RowStyle::Positional;
        }

        let duplicates = if args.allow_duplicates || file.allow_duplicates.unwrap_or(false) {
            DuplicatePolicy::LastWins
        } else {
            DuplicatePolicy::Reject
        };

        Ok(Self {
            master: pick(&args.master, file.master, DEFAULT_MASTER),
            header: pick(&args.header, file.header, DEFAULT_HEADER),
            source: pick(&args.source, file.source, DEFAULT_SOURCE),
            duplicates,
            emit,
        })
    }
}

fn pick(flag: &Option<PathBuf>, file: Option<PathBuf>, default: &str) -> PathBuf {
    flag.clone()
        .or(file)
        .unwrap_or_else(|| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config() {
        let settings = Settings::resolve(&TableArgs::default()).unwrap();
        assert_eq!(settings.master, Path::new(DEFAULT_MASTER));
        assert_eq!(settings.header, Path::new(DEFAULT_HEADER));
        assert_eq!(settings.source, Path::new(DEFAULT_SOURCE));
        assert_eq!(settings.duplicates, DuplicatePolicy::Reject);
        assert_eq!(settings.emit, EmitConfig::default());
    }

    #[test]
    fn parses_emit_table() {
        let file: FileConfig = toml::from_str(
            r#"
            master = "sys.master"
            allow_duplicates = true

            [emit]
            prefix = "__NR_"
            rows = "positional"
            constants_include = "asm/unistd.h"
            "#,
        )
        .unwrap();
        assert_eq!(file.master.as_deref(), Some(Path::new("sys.master")));
        assert_eq!(file.allow_duplicates, Some(true));
        assert_eq!(file.emit.prefix, "__NR_");
        assert_eq!(file.emit.rows, RowStyle::Positional);
        assert_eq!(file.emit.sentinel, "MAXNR");
        assert_eq!(file.emit.constants_include.as_deref(), Some("asm/unistd.h"));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<FileConfig>("mastr = \"typo\"").is_err());
        assert!(toml::from_str::<FileConfig>("[emit]\nprefx = \"X\"").is_err());
    }
}

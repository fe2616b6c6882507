//! Artifact emitter.
//!
//! Emission happens in two stages. [`validate`] checks the whole table and
//! yields a [`ValidatedTable`]; only that type is accepted by the
//! [`HeaderTemplate`] and [`SourceTemplate`], so nothing is rendered from a
//! table that failed a check. [`emit`] runs both stages and returns both
//! artifacts or an error, never one without the other.

mod header;
mod source;
mod validate;

pub use header::{read_constants, HeaderConstant, HeaderTemplate};
pub use source::SourceTemplate;
pub use validate::{is_c_identifier, validate, ValidatedTable};

use log::debug;
use serde::Deserialize;

use crate::error::EmitError;
use crate::table::CallTable;

/// How dispatch-table rows are keyed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStyle {
    /// `[N] = { ... }`: every row lands at its call number even when the
    /// table has gaps.
    #[default]
    Indexed,
    /// `{ ... }`: rows are placed by position, so [`validate`] rejects a
    /// table with gaps.
    Positional,
}

/// Naming and framing of the generated C artifacts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    /// Prepended to every call name to form its constant.
    pub prefix: String,
    /// Suffix of the one-past-the-end constant, `SYS_MAXNR` by default.
    pub sentinel: String,
    pub guard: String,
    /// Header included by the generated source.
    pub header_include: String,
    /// Extra include at the top of the generated header.
    pub constants_include: Option<String>,
    /// Prepended to every call name to form its handler symbol.
    pub handler_prefix: String,
    pub entry_type: String,
    pub table_name: String,
    /// Named in the do-not-edit banner.
    pub generator: String,
    pub rows: RowStyle,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            prefix: "SYS_".to_string(),
            sentinel: "MAXNR".to_string(),
            guard: "_SYS_SYSCALLS_H_".to_string(),
            header_include: "sys/syscalls.h".to_string(),
            constants_include: Some("sys/syscall_constants.h".to_string()),
            handler_prefix: "sys_".to_string(),
            entry_type: "sysent_t".to_string(),
            table_name: "syscalls".to_string(),
            generator: "gen-syscalls".to_string(),
            rows: RowStyle::Indexed,
        }
    }
}

impl EmitConfig {
    pub fn constant_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    pub fn sentinel_name(&self) -> String {
        self.constant_name(&self.sentinel)
    }

    pub fn handler_name(&self, name: &str) -> String {
        format!("{}{}", self.handler_prefix, name)
    }

    fn banner(&self) -> String {
        format!("/* GENERATED -- DO NOT EDIT (see {}) */\n", self.generator)
    }
}

/// The rendered pair, plus the sentinel value both were built with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    pub header: String,
    pub source: String,
    pub max_nr: u64,
}

/// Validate `table` and render both artifacts.
pub fn emit(table: &CallTable, config: &EmitConfig) -> Result<Artifacts, EmitError> {
    let validated = validate(table, config)?;
    let header = HeaderTemplate::new(config).render(&validated);
    let source = SourceTemplate::new(config).render(&validated);
    debug!(
        "rendered {} calls, {} = {}",
        validated.len(),
        config.sentinel_name(),
        validated.max_nr()
    );
    Ok(Artifacts {
        header,
        source,
        max_nr: validated.max_nr(),
    })
}

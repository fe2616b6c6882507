use std::collections::HashMap;

use crate::emit::{EmitConfig, RowStyle};
use crate::error::EmitError;
use crate::table::{CallDefinition, CallTable, MAX_ARGS};

/// A table that passed every check in [`validate`].
#[derive(Clone, Copy, Debug)]
pub struct ValidatedTable<'a> {
    table: &'a CallTable,
    max_nr: u64,
}

impl<'a> ValidatedTable<'a> {
    pub fn table(&self) -> &'a CallTable {
        self.table
    }

    pub fn max_nr(&self) -> u64 {
        self.max_nr
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CallDefinition> {
        self.table.iter()
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Empty, or something that can start an identifier.
fn is_identifier_prefix(prefix: &str) -> bool {
    prefix.is_empty() || is_c_identifier(prefix)
}

fn is_type_name(ty: &str) -> bool {
    let mut words = ty.split_whitespace().peekable();
    words.peek().is_some() && words.all(is_c_identifier)
}

fn is_include_path(path: &str) -> bool {
    !path.is_empty() && !path.contains(|c: char| c == '>' || c.is_control())
}

fn check_config(config: &EmitConfig) -> Result<(), EmitError> {
    let invalid = |field: &'static str, value: &str| EmitError::InvalidConfig {
        field,
        value: value.to_string(),
    };

    if !is_identifier_prefix(&config.prefix) {
        return Err(invalid("prefix", &config.prefix));
    }
    if !is_c_identifier(&config.sentinel_name()) {
        return Err(invalid("sentinel", &config.sentinel));
    }
    if !is_identifier_prefix(&config.handler_prefix) {
        return Err(invalid("handler_prefix", &config.handler_prefix));
    }
    if !is_c_identifier(&config.guard) {
        return Err(invalid("guard", &config.guard));
    }
    if !is_c_identifier(&config.table_name) {
        return Err(invalid("table_name", &config.table_name));
    }
    if !is_type_name(&config.entry_type) {
        return Err(invalid("entry_type", &config.entry_type));
    }
    if !is_include_path(&config.header_include) {
        return Err(invalid("header_include", &config.header_include));
    }
    if let Some(include) = &config.constants_include {
        if !is_include_path(include) {
            return Err(invalid("constants_include", include));
        }
    }
    if config.generator.contains("*/") || config.generator.contains(|c: char| c.is_control()) {
        return Err(invalid("generator", &config.generator));
    }
    Ok(())
}

/// First call number below `max_nr` with no definition.
fn first_gap(table: &CallTable) -> Option<u32> {
    table
        .numbers()
        .zip(0u32..)
        .find(|&(number, expected)| number != expected)
        .map(|(_, expected)| expected)
}

/// Check the table before anything is rendered.
///
/// Order: the table must be non-empty; the emit settings must yield valid
/// C; then each entry, in ascending call number, must have a definable
/// name that is not the sentinel and an argument count in `0..=MAX_ARGS`;
/// then no two entries may share a name; finally positional rows require
/// a table with no gaps. The first failure is returned.
pub fn validate<'a>(
    table: &'a CallTable,
    config: &EmitConfig,
) -> Result<ValidatedTable<'a>, EmitError> {
    let Some(max_nr) = table.max_nr() else {
        return Err(EmitError::EmptyTable);
    };
    check_config(config)?;

    for def in table {
        if !is_c_identifier(def.name()) {
            return Err(EmitError::InvalidName {
                number: def.number(),
                name: def.name().to_string(),
            });
        }
        if def.name() == config.sentinel {
            return Err(EmitError::ReservedName {
                number: def.number(),
                name: def.name().to_string(),
            });
        }
        if !(0..=MAX_ARGS).contains(&def.arg_count()) {
            return Err(EmitError::ArgCount {
                number: def.number(),
                name: def.name().to_string(),
                count: def.arg_count(),
                max: MAX_ARGS,
            });
        }
    }

    let mut seen: HashMap<&str, u32> = HashMap::with_capacity(table.len());
    for def in table {
        if let Some(&first) = seen.get(def.name()) {
            return Err(EmitError::DuplicateName {
                name: def.name().to_string(),
                first,
                second: def.number(),
            });
        }
        seen.insert(def.name(), def.number());
    }

    if config.rows == RowStyle::Positional {
        if let Some(missing) = first_gap(table) {
            return Err(EmitError::SparsePositional { missing });
        }
    }

    Ok(ValidatedTable { table, max_nr })
}

//! Loader and emitter for kernel system-call tables.
//!
//! A master file lists one call per line (`<number> <name> <argcount>`).
//! [`load_master`] turns it into a [`CallTable`], and [`emit`] validates
//! that table and renders the dispatch-table source and the constants
//! header consumed by kernel and user space.

pub mod emit;
pub mod error;
pub mod ksyms;
pub mod loader;
pub mod table;

pub use emit::{
    emit, read_constants, validate, Artifacts, EmitConfig, HeaderConstant, RowStyle,
    ValidatedTable,
};
pub use error::{EmitError, LoadError, ParseError};
pub use loader::{load_master, parse_master, read_master, DuplicatePolicy, Loader};
pub use table::{CallDefinition, CallTable, MAX_ARGS};

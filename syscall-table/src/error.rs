/// Errors raised while loading a master file or emitting artifacts.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A malformed master-file line, with its source location.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("parse error at line {line}, col {col}: {message} (in {text:?})")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    /// The offending line, without its trailing newline.
    pub text: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, col: usize, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            text: text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read master file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read master file: {0}")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error("call number {number} defined twice (line {first_line} and line {line})")]
    DuplicateNumber {
        number: u32,
        first_line: usize,
        line: usize,
    },
}

/// Validation failures. Each one aborts emission before any text is
/// rendered, so callers never see half a pair of artifacts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    #[error("system call table is empty")]
    EmptyTable,

    #[error("call {number}: {name:?} is not a valid C identifier")]
    InvalidName { number: u32, name: String },

    #[error("call {number}: name {name:?} collides with the reserved sentinel constant")]
    ReservedName { number: u32, name: String },

    #[error("call {number} ({name}): argument count {count} outside 0..={max}")]
    ArgCount {
        number: u32,
        name: String,
        count: i64,
        max: i64,
    },

    #[error("emit setting {field} = {value:?} would not produce valid C")]
    InvalidConfig { field: &'static str, value: String },

    #[error("positional rows need a contiguous table, but call {missing} is undefined")]
    SparsePositional { missing: u32 },

    #[error("calls {first} and {second} share the name {name:?}")]
    DuplicateName {
        name: String,
        first: u32,
        second: u32,
    },
}

impl EmitError {
    /// Call number of the offending entry, if the failure is tied to one.
    pub fn number(&self) -> Option<u32> {
        match self {
            EmitError::EmptyTable
            | EmitError::InvalidConfig { .. }
            | EmitError::SparsePositional { .. } => None,
            EmitError::InvalidName { number, .. }
            | EmitError::ReservedName { number, .. }
            | EmitError::ArgCount { number, .. } => Some(*number),
            EmitError::DuplicateName { second, .. } => Some(*second),
        }
    }
}

/// Master-file loader.
///
/// The file is treated as one unit: the first malformed line aborts the
/// load and no partial table is returned.
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::error::{LoadError, ParseError};
use crate::table::{CallDefinition, CallTable};

/// Lines starting with this character are skipped verbatim.
pub const COMMENT: char = '#';

/// What to do when a call number appears on more than one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail the load.
    #[default]
    Reject,
    /// Keep the later definition.
    LastWins,
}

#[derive(Clone, Debug, Default)]
pub struct Loader {
    duplicates: DuplicatePolicy,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn parse(&self, source: &str) -> Result<CallTable, LoadError> {
        let mut table = CallTable::new();
        let mut defined_on: HashMap<u32, usize> = HashMap::new();

        for (idx, text) in source.lines().enumerate() {
            let line = idx + 1;
            let Some(def) = parse_line(text, line)? else {
                continue;
            };

            if let Some(&first_line) = defined_on.get(&def.number()) {
                match self.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(LoadError::DuplicateNumber {
                            number: def.number(),
                            first_line,
                            line,
                        });
                    }
                    DuplicatePolicy::LastWins => warn!(
                        "line {line}: call {} redefined, replacing definition from line {first_line}",
                        def.number()
                    ),
                }
            }

            defined_on.insert(def.number(), line);
            table.insert(def);
        }

        debug!("loaded {} system call definitions", table.len());
        Ok(table)
    }

    pub fn read<R: Read>(&self, mut reader: R) -> Result<CallTable, LoadError> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(LoadError::Read)?;
        self.parse(&source)
    }

    pub fn load(&self, path: &Path) -> Result<CallTable, LoadError> {
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read master file {}", path.display());
        self.parse(&source)
    }
}

/// Parse master-file text with the default loader.
pub fn parse_master(source: &str) -> Result<CallTable, LoadError> {
    Loader::new().parse(source)
}

pub fn read_master<R: Read>(reader: R) -> Result<CallTable, LoadError> {
    Loader::new().read(reader)
}

pub fn load_master(path: &Path) -> Result<CallTable, LoadError> {
    Loader::new().load(path)
}

/// A whitespace-delimited token and its 1-based column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Field<'a> {
    col: usize,
    text: &'a str,
}

struct Fields<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Fields<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Field<'a>;

    fn next(&mut self) -> Option<Field<'a>> {
        let bytes = self.source.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Some(Field {
            col: start + 1,
            text: &self.source[start..self.pos],
        })
    }
}

/// `Ok(None)` for comments.
fn parse_line(text: &str, line: usize) -> Result<Option<CallDefinition>, ParseError> {
    if text.starts_with(COMMENT) {
        return Ok(None);
    }

    let fields: Vec<Field<'_>> = Fields::new(text).collect();
    let end_col = text.trim_end().len() + 1;
    let err = |message: String, col: usize| ParseError::new(message, line, col, text);

    let (number, name, args) = match fields.as_slice() {
        [] => return Err(err("empty line".into(), 1)),
        [_] => return Err(err("missing name and argument count".into(), end_col)),
        [_, _] => return Err(err("missing argument count".into(), end_col)),
        [number, name, args] => (number, name, args),
        [_, _, _, extra, ..] => {
            return Err(err(
                format!("unexpected trailing field {:?}", extra.text),
                extra.col,
            ))
        }
    };

    let number = parse_number(number).map_err(|message| err(message, number.col))?;
    let arg_count = args
        .text
        .parse::<i64>()
        .map_err(|_| err(format!("invalid argument count {:?}", args.text), args.col))?;

    Ok(Some(CallDefinition::new(number, name.text, arg_count)))
}

fn parse_number(field: &Field<'_>) -> Result<u32, String> {
    match field.text.parse::<u32>() {
        Ok(n) => Ok(n),
        Err(_) if field.text.starts_with('-') && field.text[1..].parse::<u64>().is_ok() => {
            Err(format!("call number {} is negative", field.text))
        }
        Err(_) => Err(format!("invalid call number {:?}", field.text)),
    }
}

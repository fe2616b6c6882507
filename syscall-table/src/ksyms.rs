/// Reformat a size-aware symbol dump (`<address> <size> <name>` per line)
/// into the form the kernel symbolizer loads at runtime.
///
/// Independent of the call-table generator; it lives here so the build
/// has a single host tool.
use std::io::{self, BufRead, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymbolFormat {
    /// `name address\n`
    #[default]
    Text,
    /// `name\0address\0`, for embedding as a binary blob.
    Null,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol<'a> {
    pub address: &'a str,
    pub name: &'a str,
}

/// Lines with fewer than three fields (undefined or sizeless symbols)
/// yield `None`.
pub fn parse_symbol(line: &str) -> Option<Symbol<'_>> {
    let mut fields = line.split_whitespace();
    let address = fields.next()?;
    let _size = fields.next()?;
    let name = fields.next()?;
    Some(Symbol { address, name })
}

pub fn write_symbol<W: Write>(out: &mut W, symbol: &Symbol<'_>, format: SymbolFormat) -> io::Result<()> {
    match format {
        SymbolFormat::Text => writeln!(out, "{} {}", symbol.name, symbol.address),
        SymbolFormat::Null => {
            out.write_all(symbol.name.as_bytes())?;
            out.write_all(b"\0")?;
            out.write_all(symbol.address.as_bytes())?;
            out.write_all(b"\0")
        }
    }
}

/// Copy every symbol from `input` to `output`. Returns how many were
/// written.
pub fn reformat<R: BufRead, W: Write>(input: R, mut output: W, format: SymbolFormat) -> io::Result<usize> {
    let mut written = 0;
    for line in input.lines() {
        let line = line?;
        if let Some(symbol) = parse_symbol(&line) {
            write_symbol(&mut output, &symbol, format)?;
            written += 1;
        }
    }
    output.flush()?;
    Ok(written)
}

/// Constants header: one `#define` per call plus the sentinel.
use crate::emit::{EmitConfig, ValidatedTable};

pub struct HeaderTemplate<'c> {
    config: &'c EmitConfig,
}

impl<'c> HeaderTemplate<'c> {
    pub fn new(config: &'c EmitConfig) -> Self {
        Self { config }
    }

    /// Per-call `#define` lines in ascending call-number order, followed
    /// by the sentinel.
    pub fn rows(&self, table: &ValidatedTable<'_>) -> Vec<String> {
        let mut rows: Vec<String> = table
            .iter()
            .map(|def| define(&self.config.constant_name(def.name()), u64::from(def.number())))
            .collect();
        rows.push(define(&self.config.sentinel_name(), table.max_nr()));
        rows
    }

    pub fn render(&self, table: &ValidatedTable<'_>) -> String {
        let guard = &self.config.guard;
        let mut out = String::new();

        out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
        if let Some(include) = &self.config.constants_include {
            out.push_str(&format!("#include <{include}>\n\n"));
        }
        out.push_str(&self.config.banner());
        out.push_str("/* System call numbers */\n\n");

        for row in self.rows(table) {
            out.push_str(&row);
            out.push('\n');
        }

        out.push_str(&format!("\n#endif /* {guard} */\n"));
        out
    }
}

fn define(name: &str, value: u64) -> String {
    format!("#define {name} {value}")
}

/// A `#define NAME VALUE` read back from a header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderConstant {
    pub name: String,
    pub value: u64,
}

/// Every `#define NAME <integer>` line in `text`, in file order. Defines
/// without an integer value (include guards, macros) are skipped.
pub fn read_constants(text: &str) -> Vec<HeaderConstant> {
    text.lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace();
            if words.next()? != "#define" {
                return None;
            }
            let name = words.next()?;
            let value = words.next()?.parse::<u64>().ok()?;
            if words.next().is_some() {
                return None;
            }
            Some(HeaderConstant {
                name: name.to_string(),
                value,
            })
        })
        .collect()
}

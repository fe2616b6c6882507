/// Dispatch-table source: a single static array of `{ name, argc, handler }`.
use crate::emit::{EmitConfig, RowStyle, ValidatedTable};

const INDENT: &str = "        ";

pub struct SourceTemplate<'c> {
    config: &'c EmitConfig,
}

impl<'c> SourceTemplate<'c> {
    pub fn new(config: &'c EmitConfig) -> Self {
        Self { config }
    }

    /// One initializer per call, ascending, each tagged with its number.
    pub fn rows(&self, table: &ValidatedTable<'_>) -> Vec<String> {
        table
            .iter()
            .map(|def| {
                let entry = format!(
                    "{{ \"{}\", {}, (void *){} }}",
                    def.name(),
                    def.arg_count(),
                    self.config.handler_name(def.name())
                );
                match self.config.rows {
                    RowStyle::Indexed => format!("[{}] = {entry}, /* {} */", def.number(), def.number()),
                    RowStyle::Positional => format!("{entry}, /* {} */", def.number()),
                }
            })
            .collect()
    }

    pub fn render(&self, table: &ValidatedTable<'_>) -> String {
        let mut out = String::new();

        out.push_str(&format!("#include <{}>\n\n", self.config.header_include));
        out.push_str(&self.config.banner());
        out.push_str("/* System call table for the kernel */\n\n");

        out.push_str(&format!(
            "const {} {}[] =\n{{\n",
            self.config.entry_type, self.config.table_name
        ));
        out.push_str(INDENT);
        out.push_str("/*  name, num_args, func_ptr */\n");
        for row in self.rows(table) {
            out.push_str(INDENT);
            out.push_str(&row);
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::validate;
    use crate::table::{CallDefinition, CallTable};

    fn sparse() -> CallTable {
        [
            CallDefinition::new(5, "exit", 1),
            CallDefinition::new(0, "read", 3),
            CallDefinition::new(1, "write", 3),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn renders_indexed_table() {
        let table = sparse();
        let config = EmitConfig::default();
        let validated = validate(&table, &config).unwrap();
        let source = SourceTemplate::new(&config).render(&validated);

        let expected = "\
#include <sys/syscalls.h>

/* GENERATED -- DO NOT EDIT (see gen-syscalls) */
/* System call table for the kernel */

const sysent_t syscalls[] =
{
        /*  name, num_args, func_ptr */
        [0] = { \"read\", 3, (void *)sys_read }, /* 0 */
        [1] = { \"write\", 3, (void *)sys_write }, /* 1 */
        [5] = { \"exit\", 1, (void *)sys_exit }, /* 5 */
};
";
        assert_eq!(source, expected);
    }

    #[test]
    fn positional_rows_keep_number_annotation() {
        let table: CallTable = [
            CallDefinition::new(0, "read", 3),
            CallDefinition::new(1, "write", 3),
            CallDefinition::new(2, "exit", 1),
        ]
        .into_iter()
        .collect();
        let config = EmitConfig {
            rows: RowStyle::Positional,
            ..EmitConfig::default()
        };
        let validated = validate(&table, &config).unwrap();
        let rows = SourceTemplate::new(&config).rows(&validated);
        assert_eq!(
            rows,
            [
                "{ \"read\", 3, (void *)sys_read }, /* 0 */",
                "{ \"write\", 3, (void *)sys_write }, /* 1 */",
                "{ \"exit\", 1, (void *)sys_exit }, /* 2 */",
            ]
        );
    }

    #[test]
    fn naming_follows_config() {
        let table: CallTable = [CallDefinition::new(0, "yield", 0)].into_iter().collect();
        let config = EmitConfig {
            handler_prefix: "do_".to_string(),
            entry_type: "struct sysent".to_string(),
            table_name: "sysent".to_string(),
            header_include: "kern/nr.h".to_string(),
            ..EmitConfig::default()
        };
        let validated = validate(&table, &config).unwrap();
        let source = SourceTemplate::new(&config).render(&validated);
        assert!(source.starts_with("#include <kern/nr.h>\n"));
        assert!(source.contains("const struct sysent sysent[] =\n"));
        assert!(source.contains("(void *)do_yield"));
    }
}

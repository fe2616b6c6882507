use std::io::Write;
use std::path::Path;

use syscall_table::{load_master, parse_master, read_master, LoadError};
use tempfile::NamedTempFile;

fn write_temp_master(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::with_suffix(".master").unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn loads_scenario_master_file() {
    let master = write_temp_master("0 read 3\n1 write 3\n# comment\n5 exit 1");
    let table = load_master(master.path()).expect("load failed");

    assert_eq!(table.len(), 3);
    let rows: Vec<(u32, &str, i64)> = table
        .iter()
        .map(|d| (d.number(), d.name(), d.arg_count()))
        .collect();
    assert_eq!(rows, [(0, "read", 3), (1, "write", 3), (5, "exit", 1)]);
    assert_eq!(table.max_nr(), Some(6));
}

#[test]
fn unsorted_input_iterates_sorted() {
    let table = parse_master("9 nine 0\n2 two 0\n4 four 0\n").unwrap();
    let numbers: Vec<u32> = table.numbers().collect();
    assert_eq!(numbers, [2, 4, 9]);
}

#[test]
fn arbitrary_whitespace_between_fields() {
    let table = parse_master("  3\t\tclose    1  \n").unwrap();
    assert_eq!(table.get(3).unwrap().name(), "close");
}

#[test]
fn comment_only_file_loads_empty_table() {
    let table = parse_master("# nothing here\n#\n").unwrap();
    assert!(table.is_empty());
}

#[test]
fn malformed_line_aborts_whole_load() {
    // line 3 would fail validation later, but the parse error on line 2
    // must be reported first and nothing returned
    let err = parse_master("0 read 3\n3 onlytwo\n2 bad_args 9\n").unwrap_err();
    match err {
        LoadError::Syntax(e) => {
            assert_eq!(e.line, 2);
            assert_eq!(e.text, "3 onlytwo");
        }
        other => panic!("expected syntax error, got: {other:?}"),
    }
}

#[test]
fn blank_line_is_a_parse_error() {
    let err = parse_master("0 read 3\n\n1 write 3\n").unwrap_err();
    match err {
        LoadError::Syntax(e) => {
            assert_eq!(e.line, 2);
            assert_eq!(e.message, "empty line");
        }
        other => panic!("expected syntax error, got: {other:?}"),
    }
    assert!(parse_master("0 read 3\n \t\n").is_err());
}

#[test]
fn trailing_newline_is_not_a_blank_line() {
    let table = parse_master("0 read 3\n1 write 3\n").unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn non_numeric_call_number() {
    let err = parse_master("zero read 3\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 1, col 1"), "got: {msg}");
    assert!(msg.contains("invalid call number"), "got: {msg}");
}

#[test]
fn missing_file_reports_path() {
    let path = Path::new("/tmp/nonexistent_gen_syscalls_test.master");
    let err = load_master(path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("nonexistent_gen_syscalls_test.master"));
}

#[test]
fn reads_from_any_reader() {
    let table = read_master("7 open 3\n".as_bytes()).unwrap();
    assert_eq!(table.get(7).unwrap().arg_count(), 3);
}

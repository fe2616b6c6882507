//! Property-based tests for load → validate → render.
//!
//! Random master files with distinct call numbers, distinct names and
//! in-range argument counts must always emit, and the artifacts must
//! mirror the input exactly.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use syscall_table::{emit, parse_master, read_constants, EmitConfig};

/// Strategy: up to 40 calls with unique numbers (sparse, unsorted) and
/// unique lowercase names.
fn master_entries() -> impl Strategy<Value = Vec<(u32, String, i64)>> {
    prop::collection::btree_map(0u32..4096, 0i64..=6, 1..40).prop_flat_map(|calls| {
        let len = calls.len();
        (
            Just(calls),
            prop::collection::btree_set("[a-z][a-z0-9_]{0,10}", len..=len),
        )
            .prop_map(|(calls, names)| {
                calls
                    .into_iter()
                    .zip(names)
                    .map(|((number, args), name)| (number, name, args))
                    .collect::<Vec<_>>()
            })
            .prop_shuffle()
    })
}

fn to_master(entries: &[(u32, String, i64)]) -> String {
    let mut text = String::from("# generated for proptest\n");
    for (number, name, args) in entries {
        text.push_str(&format!("{number}\t{name} {args}\n"));
    }
    text
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_one_constant_per_call_plus_sentinel(entries in master_entries()) {
        let table = parse_master(&to_master(&entries)).unwrap();
        let artifacts = emit(&table, &EmitConfig::default()).unwrap();
        let constants = read_constants(&artifacts.header);

        prop_assert_eq!(constants.len(), entries.len() + 1);
        let max = entries.iter().map(|e| e.0).max().unwrap();
        let sentinel = constants.last().unwrap();
        prop_assert_eq!(sentinel.name.as_str(), "SYS_MAXNR");
        prop_assert_eq!(sentinel.value, u64::from(max) + 1);
        prop_assert_eq!(artifacts.max_nr, u64::from(max) + 1);
    }

    #[test]
    fn prop_header_round_trips_call_numbers(entries in master_entries()) {
        let table = parse_master(&to_master(&entries)).unwrap();
        let artifacts = emit(&table, &EmitConfig::default()).unwrap();

        let read_back: BTreeMap<String, u64> = read_constants(&artifacts.header)
            .into_iter()
            .filter(|c| c.name != "SYS_MAXNR")
            .map(|c| (c.name, c.value))
            .collect();
        let expected: BTreeMap<String, u64> = entries
            .iter()
            .map(|(n, name, _)| (format!("SYS_{name}"), u64::from(*n)))
            .collect();
        prop_assert_eq!(read_back, expected);
    }

    #[test]
    fn prop_source_rows_match_input(entries in master_entries()) {
        let table = parse_master(&to_master(&entries)).unwrap();
        let artifacts = emit(&table, &EmitConfig::default()).unwrap();

        let rows: Vec<&str> = artifacts
            .source
            .lines()
            .filter(|l| l.contains("(void *)"))
            .collect();
        prop_assert_eq!(rows.len(), entries.len());

        let mut sorted = entries.clone();
        sorted.sort_by_key(|e| e.0);
        for (row, (number, name, args)) in rows.iter().zip(&sorted) {
            let expected = format!(
                "[{number}] = {{ \"{name}\", {args}, (void *)sys_{name} }}, /* {number} */"
            );
            prop_assert_eq!(row.trim(), expected.as_str());
        }
    }

    #[test]
    fn prop_out_of_range_arg_count_never_emits(
        entries in master_entries(),
        bad in prop_oneof![-1000i64..0, 7i64..1000],
    ) {
        let mut entries = entries;
        entries[0].2 = bad;
        let table = parse_master(&to_master(&entries)).unwrap();
        prop_assert!(emit(&table, &EmitConfig::default()).is_err());
    }

    #[test]
    fn prop_distinct_numbers_survive_loading(entries in master_entries()) {
        let table = parse_master(&to_master(&entries)).unwrap();
        let loaded: BTreeSet<u32> = table.numbers().collect();
        let expected: BTreeSet<u32> = entries.iter().map(|e| e.0).collect();
        prop_assert_eq!(loaded, expected);
    }
}

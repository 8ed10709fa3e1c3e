// sovad-core/tests/fixtures_flatten.rs
// ============================================================================
// Module: Expected-Table Flattening Tests
// Description: Tests for expected-evaluation table flattening.
// Purpose: Ensure flattening preserves table order and case count.
// Dependencies: sovad-core, proptest
// ============================================================================
//! ## Overview
//! Exercises the grouped-to-flat table transform on a literal table and with
//! property tests over randomly shaped tables.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use proptest::prelude::Strategy;
use proptest::prelude::proptest;
use proptest::sample::select;
use sovad_core::Criterion;
use sovad_core::EvidenceCounts;
use sovad_core::ExpectedCase;
use sovad_core::ExpectedGroup;
use sovad_core::Pathogenicity;
use sovad_core::flatten_expected;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn counts(entries: &[(Criterion, u32)]) -> EvidenceCounts {
    entries.iter().copied().collect()
}

/// Strategy producing arbitrary evidence records.
fn counts_strategy() -> impl Strategy<Value = EvidenceCounts> {
    proptest::collection::vec((select(Criterion::all().to_vec()), 0_u32..6), 0..5)
        .prop_map(|entries| entries.into_iter().collect::<EvidenceCounts>())
}

/// Strategy producing arbitrary grouped expected tables.
fn table_strategy() -> impl Strategy<Value = Vec<ExpectedGroup>> {
    proptest::collection::vec(
        (select(Pathogenicity::all().to_vec()), proptest::collection::vec(counts_strategy(), 0..4))
            .prop_map(|(pathogenicity, cases)| ExpectedGroup {
                pathogenicity,
                cases,
            }),
        0..6,
    )
}

// ============================================================================
// SECTION: Literal Table
// ============================================================================

/// Verifies flattening of a small literal table matches the expected pairs.
#[test]
fn flatten_literal_table_preserves_pairs() {
    let table = vec![
        ExpectedGroup {
            pathogenicity: Pathogenicity::Benign,
            cases: vec![counts(&[(Criterion::Ba, 1)])],
        },
        ExpectedGroup {
            pathogenicity: Pathogenicity::LikelyBenign,
            cases: vec![
                counts(&[(Criterion::Bs, 1), (Criterion::Bp, 1)]),
                counts(&[(Criterion::Bp, 2)]),
            ],
        },
    ];

    let flat = flatten_expected(&table);

    assert_eq!(flat, vec![
        ExpectedCase {
            counts: counts(&[(Criterion::Ba, 1)]),
            pathogenicity: Pathogenicity::Benign,
        },
        ExpectedCase {
            counts: counts(&[(Criterion::Bs, 1), (Criterion::Bp, 1)]),
            pathogenicity: Pathogenicity::LikelyBenign,
        },
        ExpectedCase {
            counts: counts(&[(Criterion::Bp, 2)]),
            pathogenicity: Pathogenicity::LikelyBenign,
        },
    ]);
}

/// Verifies an empty table flattens to no cases.
#[test]
fn flatten_empty_table_yields_no_cases() {
    assert!(flatten_expected(&[]).is_empty());
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    /// Flattening preserves the total case count.
    #[test]
    fn flatten_preserves_case_count(table in table_strategy()) {
        let flat = flatten_expected(&table);
        let expected: usize = table.iter().map(|group| group.cases.len()).sum();
        assert_eq!(flat.len(), expected);
    }

    /// Flattening preserves table order and per-group labels.
    #[test]
    fn flatten_preserves_order_and_labels(table in table_strategy()) {
        let flat = flatten_expected(&table);
        let mut index = 0;
        for group in &table {
            for case in &group.cases {
                assert_eq!(flat[index].counts, *case);
                assert_eq!(flat[index].pathogenicity, group.pathogenicity);
                index += 1;
            }
        }
        assert_eq!(index, flat.len());
    }
}

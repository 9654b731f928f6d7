//! Property-based tests for the table transforms.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p fmritab --test property_tests
//! ```

use proptest::prelude::*;

use fmritab::table::round_half_even;
use fmritab::{
    NumericPolicy, Parser, ParserConfig, Table, TransformEngine, Value, Writer, WriterConfig,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Finite values, some missing.
fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (-1.0e6..1.0e6f64).prop_map(Value::Number),
        1 => Just(Value::Missing),
    ]
}

/// A rectangular table of numeric cells with names c0, c1, ...
fn numeric_table() -> impl Strategy<Value = Table> {
    (1usize..6, 1usize..40).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(prop::collection::vec(cell(), rows), cols).prop_map(|columns| {
            Table::from_columns(
                columns
                    .into_iter()
                    .enumerate()
                    .map(|(i, values)| (format!("c{}", i), values)),
            )
            .unwrap()
        })
    })
}

// =============================================================================
// Derive Properties
// =============================================================================

proptest! {
    /// Output always has the input's rows, four columns, and missing
    /// derivatives in the first row.
    #[test]
    fn derive_preserves_shape(values in prop::collection::vec(-1.0e6..1.0e6f64, 1..200)) {
        let input = Table::from_columns([("0", values.iter().copied().map(Value::Number).collect::<Vec<_>>())])
            .unwrap();
        let (table, _) = TransformEngine::new().derive(&input, "X").unwrap();

        prop_assert_eq!(table.row_count(), values.len());
        prop_assert_eq!(table.column_count(), 4);
        prop_assert_eq!(table.get(0, 1), Some(&Value::Missing));
        prop_assert_eq!(table.get(0, 3), Some(&Value::Missing));
    }

    /// Every derived number already sits on the four-decimal grid.
    #[test]
    fn derive_output_is_rounded(values in prop::collection::vec(-1.0e3..1.0e3f64, 1..50)) {
        let input = Table::from_columns([("0", values.into_iter().map(Value::Number).collect::<Vec<_>>())])
            .unwrap();
        let (table, _) = TransformEngine::new().derive(&input, "X").unwrap();

        for row in table.rows() {
            for value in row {
                if let Some(v) = value.as_f64() {
                    prop_assert_eq!(round_half_even(v, 4), v);
                }
            }
        }
    }

    /// Rounding is ties-to-even on the scaled value.
    #[test]
    fn rounding_ties_go_to_even(k in -100_000i64..100_000) {
        let tie = k as f64 + 0.5;
        let rounded = round_half_even(tie, 0);
        prop_assert_eq!(rounded.rem_euclid(2.0), 0.0);
        prop_assert!((rounded - tie).abs() == 0.5);
    }
}

// =============================================================================
// Round-trip Properties
// =============================================================================

proptest! {
    /// Writing a numeric table as TSV and reading it back gives the same table.
    #[test]
    fn tsv_round_trip(table in numeric_table()) {
        let text = Writer::with_config(WriterConfig::tsv()).to_string(&table).unwrap();
        let parser = Parser::with_config(
            ParserConfig::tsv().with_numeric(NumericPolicy::Permissive),
        );
        let parsed = parser.parse_str(&text);

        // A column of only missing values is fine; the table must come back whole
        prop_assert!(parsed.is_ok(), "parse failed: {:?}", parsed.err());
        prop_assert_eq!(parsed.unwrap(), table);
    }

    /// Text cells survive a raw round trip unchanged.
    #[test]
    fn raw_text_round_trip(cells in prop::collection::vec("v[a-z0-9.,-]{0,8}", 1..30)) {
        let table = Table::from_columns([(
            "col",
            cells.iter().map(|s| Value::Text(s.clone())).collect::<Vec<_>>(),
        )])
        .unwrap();

        let text = Writer::with_config(WriterConfig::csv()).to_string(&table).unwrap();
        let parser = Parser::with_config(
            ParserConfig::tsv().with_delimiter(fmritab::Delimiter::Byte(b',')),
        );
        prop_assert_eq!(parser.parse_str(&text).unwrap(), table);
    }
}

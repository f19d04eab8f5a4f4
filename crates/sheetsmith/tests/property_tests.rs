//! Property-based tests for sheetsmith.
//!
//! These verify invariants of the pure transformations:
//! 1. **Idempotence**: sanitizing or normalizing twice changes nothing
//! 2. **Exactness**: only the listed characters are removed
//! 3. **Precedence**: type inference follows its rule order
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p sheetsmith --test property_tests
//! ```

use proptest::prelude::*;

use sheetsmith::{
    infer_column_type, normalize_column_name, sanitize, CellValue, ColumnType,
    SanitizationRuleSet,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Strings salted with the characters the sanitizer targets.
fn noisy_string() -> impl Strategy<Value = String> {
    let noise = prop::sample::select(SanitizationRuleSet::INVISIBLE.characters().to_vec());
    prop::collection::vec(prop_oneof![any::<char>(), noise], 0..200)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Header-like names.
fn header_like() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._\\-]{0,40}"
}

// =============================================================================
// Sanitizer Properties
// =============================================================================

proptest! {
    #[test]
    fn sanitize_is_idempotent(s in noisy_string()) {
        let rules = SanitizationRuleSet::INVISIBLE;
        let once = sanitize(&s, &rules);
        prop_assert_eq!(sanitize(&once, &rules), once);
    }

    #[test]
    fn sanitize_never_grows(s in noisy_string()) {
        let clean = sanitize(&s, &SanitizationRuleSet::INVISIBLE);
        prop_assert!(clean.len() <= s.len());
    }

    #[test]
    fn sanitize_removes_exactly_the_rule_set(s in noisy_string()) {
        let rules = SanitizationRuleSet::INVISIBLE;
        let clean = sanitize(&s, &rules);

        prop_assert!(!clean.chars().any(|c| rules.contains(c)));

        let kept: String = s.chars().filter(|&c| !rules.contains(c)).collect();
        prop_assert_eq!(clean, kept);
    }
}

// =============================================================================
// Name Normalization Properties
// =============================================================================

proptest! {
    #[test]
    fn normalize_is_idempotent(name in header_like()) {
        let once = normalize_column_name(&name);
        prop_assert_eq!(normalize_column_name(&once), once);
    }

    #[test]
    fn normalize_strips_separators(name in header_like()) {
        let normalized = normalize_column_name(&name);
        prop_assert!(!normalized.contains(|c| matches!(c, '.' | ' ' | '-')));
    }
}

// =============================================================================
// Inference Properties
// =============================================================================

proptest! {
    #[test]
    fn integer_columns_infer_integer(values in prop::collection::vec(any::<i64>(), 1..50)) {
        let cells: Vec<CellValue> = values.into_iter().map(CellValue::Int).collect();
        prop_assert_eq!(infer_column_type(&cells), ColumnType::Integer);
    }

    #[test]
    fn one_text_value_demotes_to_text(
        values in prop::collection::vec(any::<i64>(), 0..50),
        position in any::<prop::sample::Index>(),
        word in "[a-z]{1,8}",
    ) {
        let mut cells: Vec<CellValue> = values.into_iter().map(CellValue::Int).collect();
        let at = position.index(cells.len() + 1);
        cells.insert(at, CellValue::Text(word));
        prop_assert_eq!(infer_column_type(&cells), ColumnType::Text);
    }

    #[test]
    fn boolean_columns_infer_boolean(values in prop::collection::vec(any::<bool>(), 1..50)) {
        let cells: Vec<CellValue> = values.into_iter().map(CellValue::Bool).collect();
        prop_assert_eq!(infer_column_type(&cells), ColumnType::Boolean);
    }
}

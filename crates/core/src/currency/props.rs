//! Property-based tests for catalog lookups.
//!
//! - Code lookups ignore case and agree with `validate`
//! - Unique-symbol lookups round-trip through code lookups
//! - Symbol lookups only ever return records carrying that symbol

use proptest::prelude::*;

use super::data::CURRENCIES;
use super::lookup::{
    CurrencyExt, find_by_code, find_by_symbol, find_unique_by_symbol, list_unique_symbols,
    validate,
};

/// Strategy picking any record of the built-in table.
fn known_currency() -> impl Strategy<Value = usize> {
    0..CURRENCIES.len()
}

/// Strategy mixing known codes with arbitrary short strings.
fn any_code() -> impl Strategy<Value = String> {
    prop_oneof![
        known_currency().prop_map(|i| CURRENCIES[i].code.to_lowercase()),
        "[A-Za-z]{0,4}",
        "\\PC{0,6}",
    ]
}

/// Strategy mixing known symbols with arbitrary short strings.
fn any_symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        known_currency().prop_map(|i| CURRENCIES[i].symbol.to_string()),
        "\\PC{0,4}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Upper, lower and mixed case spellings of a code resolve to the same record.
    #[test]
    fn prop_code_lookup_ignores_case(index in known_currency(), flips in any::<u8>()) {
        let currency = &CURRENCIES[index];
        let mixed: String = currency
            .code
            .chars()
            .enumerate()
            .map(|(i, c)| if flips & (1 << i) == 0 { c } else { c.to_ascii_lowercase() })
            .collect();

        let upper = find_by_code(currency.code).unwrap();
        prop_assert_eq!(upper, currency);
        prop_assert_eq!(find_by_code(&currency.code.to_lowercase()).unwrap(), upper);
        prop_assert_eq!(find_by_code(&mixed).unwrap(), upper);
    }

    /// `validate` succeeds exactly when `find_by_code` does.
    #[test]
    fn prop_validate_matches_find(code in any_code()) {
        prop_assert_eq!(validate(&code), find_by_code(&code).is_ok());
    }

    /// Misses report the key as supplied.
    #[test]
    fn prop_code_miss_reports_input(code in any_code()) {
        if let Err(err) = find_by_code(&code) {
            prop_assert_eq!(err.key(), code.as_str());
        }
    }

    /// Every symbol match carries the queried symbol.
    #[test]
    fn prop_symbol_matches_carry_symbol(symbol in any_symbol()) {
        for currency in find_by_symbol(&symbol) {
            prop_assert_eq!(currency.symbol, symbol.as_str());
        }
    }

    /// A unique-symbol hit is the only symbol match and round-trips by code.
    #[test]
    fn prop_unique_symbol_round_trips(symbol in any_symbol()) {
        let matches = find_by_symbol(&symbol);
        match find_unique_by_symbol(&symbol) {
            Ok(currency) => {
                prop_assert_eq!(currency.symbol, symbol.as_str());
                prop_assert_eq!(find_by_code(currency.code).unwrap(), currency);
                prop_assert_eq!(matches, vec![currency]);
            }
            Err(_) => prop_assert!(matches.len() != 1),
        }
    }

    /// `has_unique_symbol` agrees with the size of the symbol group.
    #[test]
    fn prop_has_unique_symbol_matches_group_size(index in known_currency()) {
        let currency = &CURRENCIES[index];
        let group = find_by_symbol(currency.symbol).len();
        prop_assert!(group >= 1);
        prop_assert_eq!(currency.has_unique_symbol(), group == 1);
        prop_assert_eq!(
            list_unique_symbols().contains_key(currency.symbol),
            group == 1
        );
    }
}

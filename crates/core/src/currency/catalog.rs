//! Indexed, immutable view over a currency table.
//!
//! A `Catalog` owns two indexes built once from a record slice:
//! - code to record, for every record
//! - symbol to record, only for symbols used by exactly one record
//!
//! The process-wide catalog over [`CURRENCIES`] is built lazily on first use
//! and never changes afterwards, so it can be shared across threads freely.

use std::collections::BTreeMap;

use coinage_shared::{CatalogError, CatalogResult, Currency};
use once_cell::sync::Lazy;
use tracing::{debug, trace};

use super::data::CURRENCIES;

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::from_records(CURRENCIES);
    debug!(
        currencies = catalog.len(),
        unique_symbols = catalog.unique_symbols().len(),
        "Currency catalog built"
    );
    catalog
});

/// Returns the process-wide catalog over the built-in currency table.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Currency indexes by code and by unique symbol.
#[derive(Debug, Clone)]
pub struct Catalog {
    by_code: BTreeMap<&'static str, &'static Currency>,
    by_unique_symbol: BTreeMap<&'static str, &'static Currency>,
}

impl Catalog {
    /// Builds both indexes from a record table.
    ///
    /// Codes are expected to be uppercase and unique. A symbol enters the
    /// unique-symbol index only if no other record in `records` uses it.
    #[must_use]
    pub fn from_records(records: &'static [Currency]) -> Self {
        let mut by_code = BTreeMap::new();
        let mut by_symbol: BTreeMap<&'static str, Vec<&'static Currency>> = BTreeMap::new();

        for currency in records {
            debug_assert_eq!(
                currency.code,
                normalize_code(currency.code),
                "currency codes are stored uppercase"
            );
            let previous = by_code.insert(currency.code, currency);
            debug_assert!(
                previous.is_none(),
                "duplicate currency code {}",
                currency.code
            );
            by_symbol.entry(currency.symbol).or_default().push(currency);
        }

        let by_unique_symbol = by_symbol
            .into_iter()
            .filter_map(|(symbol, group)| match group.as_slice() {
                [only] => Some((symbol, *only)),
                _ => None,
            })
            .collect();

        Self {
            by_code,
            by_unique_symbol,
        }
    }

    /// Number of currencies in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns true if the catalog holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Read-only view of every currency, keyed by code.
    #[must_use]
    pub const fn currencies(&self) -> &BTreeMap<&'static str, &'static Currency> {
        &self.by_code
    }

    /// Read-only view of currencies whose symbol is unique, keyed by symbol.
    #[must_use]
    pub const fn unique_symbols(&self) -> &BTreeMap<&'static str, &'static Currency> {
        &self.by_unique_symbol
    }

    /// Finds a currency by code, ignoring case.
    ///
    /// The error carries `code` as supplied, before normalization.
    pub fn find_by_code(&self, code: &str) -> CatalogResult<&'static Currency> {
        let normalized = normalize_code(code);
        self.by_code
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| {
                trace!(code, "Currency code not found");
                CatalogError::code_not_found(code)
            })
    }

    /// Returns true if `code` names a currency in the catalog.
    #[must_use]
    pub fn validate(&self, code: &str) -> bool {
        self.find_by_code(code).is_ok()
    }

    /// Returns every currency using exactly this symbol.
    ///
    /// Symbols are matched byte for byte. No match is an empty vector, not an
    /// error. Results come in code order, which callers should not rely on.
    #[must_use]
    pub fn find_by_symbol(&self, symbol: &str) -> Vec<&'static Currency> {
        self.by_code
            .values()
            .copied()
            .filter(|currency| currency.symbol == symbol)
            .collect()
    }

    /// Finds the currency identified by `symbol`, if it is the only one using it.
    ///
    /// A shared symbol and an unused symbol both produce the same error.
    pub fn find_unique_by_symbol(&self, symbol: &str) -> CatalogResult<&'static Currency> {
        self.by_unique_symbol.get(symbol).copied().ok_or_else(|| {
            trace!(symbol, "Unique currency symbol not found");
            CatalogError::unique_symbol_not_found(symbol)
        })
    }
}

/// Uppercases `code` one character at a time.
///
/// A character whose uppercase form is more than one character (`ß` is `SS`)
/// stays as it is, so the result has exactly as many characters as the input.
fn normalize_code(code: &str) -> String {
    code.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

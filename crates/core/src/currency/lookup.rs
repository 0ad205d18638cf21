//! Lookups over the built-in currency catalog.
//!
//! These are thin wrappers around [`catalog()`] so callers do not have to
//! hold on to the catalog themselves.
//!
//! ```
//! use coinage_core::{CurrencyExt, find_by_code, find_unique_by_symbol};
//!
//! let euro = find_by_code("eur").unwrap();
//! assert_eq!(euro.name, "Euro");
//! assert!(euro.has_unique_symbol());
//! assert_eq!(find_unique_by_symbol("€").unwrap(), euro);
//! ```

use std::collections::BTreeMap;

use coinage_shared::{CatalogResult, Currency};

use super::catalog::catalog;

/// Finds a currency by code. `"usd"`, `"Usd"` and `"USD"` are equivalent.
pub fn find_by_code(code: &str) -> CatalogResult<&'static Currency> {
    catalog().find_by_code(code)
}

/// Returns true if `code` names a known currency.
#[must_use]
pub fn validate(code: &str) -> bool {
    catalog().validate(code)
}

/// Returns every currency using `symbol`, possibly none.
#[must_use]
pub fn find_by_symbol(symbol: &str) -> Vec<&'static Currency> {
    catalog().find_by_symbol(symbol)
}

/// Finds the only currency using `symbol`.
pub fn find_unique_by_symbol(symbol: &str) -> CatalogResult<&'static Currency> {
    catalog().find_unique_by_symbol(symbol)
}

/// Every known currency, keyed by code.
#[must_use]
pub fn list_all() -> &'static BTreeMap<&'static str, &'static Currency> {
    catalog().currencies()
}

/// Currencies whose symbol identifies them alone, keyed by symbol.
#[must_use]
pub fn list_unique_symbols() -> &'static BTreeMap<&'static str, &'static Currency> {
    catalog().unique_symbols()
}

/// Catalog queries on a currency record.
pub trait CurrencyExt {
    /// Returns true if no other known currency shares this record's symbol.
    fn has_unique_symbol(&self) -> bool;
}

impl CurrencyExt for Currency {
    fn has_unique_symbol(&self) -> bool {
        find_unique_by_symbol(self.symbol).is_ok()
    }
}

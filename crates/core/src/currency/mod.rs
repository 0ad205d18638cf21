//! Currency dataset and lookups.

pub mod catalog;
pub mod data;
pub mod lookup;

#[cfg(test)]
mod props;

pub use catalog::{Catalog, catalog};
pub use data::CURRENCIES;
pub use lookup::{
    CurrencyExt, find_by_code, find_by_symbol, find_unique_by_symbol, list_all,
    list_unique_symbols, validate,
};

//! Currency catalog for Coinage.
//!
//! This crate holds a fixed table of world currencies and read-only lookups
//! over it. Nothing is fetched, persisted, or mutated: the table is compiled
//! in and indexed once on first use.
//!
//! # Modules
//!
//! - `currency` - Dataset, derived symbol index, and lookups

pub mod currency;

pub use coinage_shared::{CatalogError, CatalogResult, Currency, Lookup};
pub use currency::{
    Catalog, CurrencyExt, catalog, find_by_code, find_by_symbol, find_unique_by_symbol, list_all,
    list_unique_symbols, validate,
};

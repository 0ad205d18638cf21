//! Catalog error types.

use thiserror::Error;

/// Result type alias using `CatalogError`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Which lookup produced a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// Lookup by currency code.
    Code,
    /// Lookup by a symbol expected to identify exactly one currency.
    UniqueSymbol,
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code => write!(f, "code"),
            Self::UniqueSymbol => write!(f, "unique symbol"),
        }
    }
}

/// Catalog errors.
///
/// The catalog is static data, so the only way a lookup can fail is a miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No currency matched the key.
    #[error("currency with {lookup} {key} not found")]
    NotFound {
        /// Lookup that missed.
        lookup: Lookup,
        /// Key exactly as the caller supplied it.
        key: String,
    },
}

impl CatalogError {
    /// Creates a miss for a code lookup.
    pub fn code_not_found(code: impl Into<String>) -> Self {
        Self::NotFound {
            lookup: Lookup::Code,
            key: code.into(),
        }
    }

    /// Creates a miss for a unique-symbol lookup.
    pub fn unique_symbol_not_found(symbol: impl Into<String>) -> Self {
        Self::NotFound {
            lookup: Lookup::UniqueSymbol,
            key: symbol.into(),
        }
    }

    /// Returns the lookup that failed.
    #[must_use]
    pub const fn lookup(&self) -> Lookup {
        match self {
            Self::NotFound { lookup, .. } => *lookup,
        }
    }

    /// Returns the key that was queried.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::NotFound { key, .. } => key,
        }
    }

    /// Returns the error code for machine consumers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self.lookup() {
            Lookup::Code => "CURRENCY_NOT_FOUND",
            Lookup::UniqueSymbol => "UNIQUE_SYMBOL_NOT_FOUND",
        }
    }
}

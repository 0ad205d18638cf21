//! Currency record type.
//!
//! A `Currency` is plain reference data: every record in the catalog is a
//! compile-time constant, so the string fields borrow `'static` text and the
//! whole type is `Copy`.

use serde::Serialize;

/// One real-world currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    /// Uppercase ISO 4217 style code (e.g., "USD"). Unique across the catalog.
    pub code: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Display glyph or short string. Not unique: "$" alone covers 11 currencies.
    pub symbol: &'static str,
    /// Number of fractional digits conventionally displayed (0, 2 or 3).
    pub minor_units: u8,
}

impl Currency {
    /// Creates a new currency record.
    #[must_use]
    pub const fn new(
        code: &'static str,
        name: &'static str,
        symbol: &'static str,
        minor_units: u8,
    ) -> Self {
        Self {
            code,
            name,
            symbol,
            minor_units,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

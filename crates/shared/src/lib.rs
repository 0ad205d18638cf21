//! Shared types, errors, and configuration for Coinage.
//!
//! This crate provides the pieces every other crate agrees on:
//! - The `Currency` record shape
//! - Catalog error types
//! - Configuration for host binaries

pub mod config;
pub mod error;
pub mod types;

pub use self::config::{LookupConfig, OutputFormat};
pub use error::{CatalogError, CatalogResult, Lookup};
pub use types::Currency;

//! Error types for the catalog crate.
//!
//! Only loading a catalog from text can fail. Building products and
//! catalogs in code is infallible.

use thiserror::Error;

/// Errors that can occur while loading or parsing a product catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line in the catalog couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field held a value outside its fixed set (unknown color or size)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two products in the same catalog share a name
    #[error("Duplicate product: {name}")]
    DuplicateProduct { name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

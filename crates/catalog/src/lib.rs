//! # Catalog Crate
//!
//! In-memory product catalog: the data the specification engine filters.
//!
//! ## Main Components
//!
//! - **types**: Product, Color, Size and the ordered ProductCatalog
//! - **parser**: Parse `name::color::size` catalog files
//! - **loader**: Load and validate a catalog from disk
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::ProductCatalog;
//! use std::path::Path;
//!
//! let catalog = ProductCatalog::load_from_file(Path::new("data/products.txt"))?;
//! for product in &catalog {
//!     println!("{}", product);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Color, Product, ProductCatalog, Size};

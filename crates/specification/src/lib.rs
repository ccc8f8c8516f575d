//! Specification engine for filtering products.
//!
//! This crate provides:
//! - Specification trait and implementations for matching products
//! - Combinators (`and`, `or`, `negate`) for composing specifications
//! - Filter for selecting matching products from a catalog
//! - LegacyFilter, the hard-coded filter that specifications replace
//!
//! ## Architecture
//! Matching rules and the filter are decoupled:
//! 1. Leaf specifications match one attribute (color, size)
//! 2. Composite specifications wrap other specifications
//! 3. Filter walks the products once and keeps what the specification accepts
//!
//! Supporting a new criterion means adding a Specification, not editing Filter.
//!
//! ## Example Usage
//! ```ignore
//! use specification::{Filter, SpecificationExt};
//! use specification::specs::*;
//!
//! let spec = ColorSpecification::new(Color::Green)
//!     .and(SizeSpecification::new(Size::Large));
//!
//! for product in Filter::new().filter(catalog.products(), &spec) {
//!     println!("{}", product.name());
//! }
//! ```

pub mod traits;
pub mod specs;
pub mod filter;
pub mod legacy;

// Re-export main types
pub use traits::{Specification, SpecificationExt};
pub use filter::Filter;
pub use legacy::LegacyFilter;

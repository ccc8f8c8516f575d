//! Loading a ProductCatalog from disk.
//!
//! Parses the file, builds the catalog in file order and checks it
//! before handing it out.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;

impl ProductCatalog {
    /// Load and validate a catalog file.
    ///
    /// See [`parser`](crate::parser) for the line format.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading product catalog from {}", path.display());

        let catalog: ProductCatalog = parser::parse_catalog(path)?.into_iter().collect();
        catalog.validate()?;

        if catalog.is_empty() {
            tracing::warn!("Catalog {} contains no products", path.display());
        } else {
            tracing::info!("Loaded {} products from {}", catalog.len(), path.display());
        }
        Ok(catalog)
    }

    /// Check that product names are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.len());
        for product in self.iter() {
            if !seen.insert(product.name()) {
                return Err(CatalogError::DuplicateProduct {
                    name: product.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

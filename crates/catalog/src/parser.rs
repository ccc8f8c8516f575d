//! Parser for catalog files.
//!
//! One product per line:
//! - `name::color::size`, e.g. `Apple::green::small`
//!
//! Blank lines and lines starting with `#` are ignored. Color and size
//! names are case-insensitive.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::path::Path;
use std::str::FromStr;

/// Number of `::`-separated fields on a product line
const FIELDS_PER_LINE: usize = 3;

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            })
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            })
    }
}

/// Parse a catalog file into products, in file order
pub fn parse_catalog(path: &Path) -> Result<Vec<Product>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_catalog_str(&content, &file)
}

/// Parse catalog text. `file` is only used in error messages.
pub fn parse_catalog_str(content: &str, file: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        products.push(parse_product_line(line_trimmed, file, line_no)?);
    }

    Ok(products)
}

fn parse_product_line(line: &str, file: &str, line_no: usize) -> Result<Product> {
    let parts: Vec<&str> = line.split("::").map(str::trim).collect();
    if parts.len() != FIELDS_PER_LINE {
        return Err(CatalogError::FieldCountMismatch {
            expected: FIELDS_PER_LINE,
            found: parts.len(),
            line: line_no,
        });
    }

    let name = parts[0];
    if name.is_empty() {
        return Err(CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Missing name".to_string(),
        });
    }

    let color: Color = parts[1].parse()?;
    let size: Size = parts[2].parse()?;

    Ok(Product::new(name, color, size))
}

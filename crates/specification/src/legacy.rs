//! Hard-coded product filter.
//!
//! One method per criterion. Every new criterion, or combination of
//! criteria, means another method here. Kept for comparison with
//! [`Filter`](crate::Filter); new code should use specifications.

use catalog::{Color, Product, Size};

/// Filter with its criteria baked in.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyFilter;

impl LegacyFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn filter_by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color() == color).collect()
    }

    pub fn filter_by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size() == size).collect()
    }

    pub fn filter_by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.size() == size && p.color() == color)
            .collect()
    }
}

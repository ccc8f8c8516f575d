//! Specification matching on product size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied iff the product has the stored size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification for SizeSpecification {
    fn name(&self) -> &str {
        "SizeSpecification"
    }

    fn is_satisfied(&self, product: &Product) -> bool {
        product.size() == self.size
    }

    fn describe(&self) -> String {
        format!("size == {}", self.size)
    }
}

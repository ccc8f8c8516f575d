//! Specification matching on product color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied iff the product has the stored color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification for ColorSpecification {
    fn name(&self) -> &str {
        "ColorSpecification"
    }

    fn is_satisfied(&self, product: &Product) -> bool {
        product.color() == self.color
    }

    fn describe(&self) -> String {
        format!("color == {}", self.color)
    }
}

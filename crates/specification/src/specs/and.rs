//! Composite specification: logical AND of two specifications.
//!
//! The parts are stored by value. Pass `&spec` or an `Arc` to share a
//! specification between several composites instead of moving it.

use crate::traits::Specification;
use catalog::Product;

/// Satisfied iff both wrapped specifications are satisfied.
///
/// Evaluation short-circuits on `first`.
#[derive(Debug, Clone)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A: Specification, B: Specification> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Specification, B: Specification> Specification for AndSpecification<A, B> {
    fn name(&self) -> &str {
        "AndSpecification"
    }

    fn is_satisfied(&self, product: &Product) -> bool {
        self.first.is_satisfied(product) && self.second.is_satisfied(product)
    }

    fn describe(&self) -> String {
        format!("({} AND {})", self.first.describe(), self.second.describe())
    }
}

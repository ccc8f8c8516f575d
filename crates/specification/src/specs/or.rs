//! Composite specification: logical OR of two specifications.

use crate::traits::Specification;
use catalog::Product;

/// Satisfied iff at least one wrapped specification is satisfied.
#[derive(Debug, Clone)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A: Specification, B: Specification> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Specification, B: Specification> Specification for OrSpecification<A, B> {
    fn name(&self) -> &str {
        "OrSpecification"
    }

    fn is_satisfied(&self, product: &Product) -> bool {
        self.first.is_satisfied(product) || self.second.is_satisfied(product)
    }

    fn describe(&self) -> String {
        format!("({} OR {})", self.first.describe(), self.second.describe())
    }
}

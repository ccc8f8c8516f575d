//! Negation of a specification.

use crate::traits::Specification;
use catalog::Product;

/// Satisfied iff the wrapped specification is not.
#[derive(Debug, Clone)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S: Specification> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Specification> Specification for NotSpecification<S> {
    fn name(&self) -> &str {
        "NotSpecification"
    }

    fn is_satisfied(&self, product: &Product) -> bool {
        !self.inner.is_satisfied(product)
    }

    fn describe(&self) -> String {
        format!("NOT {}", self.inner.describe())
    }
}

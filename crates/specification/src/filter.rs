//! The Filter selects products matching a specification.
//!
//! Filter never changes when a new matching rule is needed: the rule is
//! a new `Specification` passed in by the caller.

use crate::traits::Specification;
use catalog::Product;

/// Selects the products that satisfy a specification.
///
/// ## Usage
/// ```ignore
/// let green = ColorSpecification::new(Color::Green);
/// let matches = Filter::new().filter(catalog.products(), &green);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Filter;

impl Filter {
    pub fn new() -> Self {
        Self
    }

    /// Lazily yield the products satisfying `spec`, in input order.
    ///
    /// Items borrow from `products`; nothing is copied.
    pub fn filter_iter<'a, 's, S>(
        &self,
        products: &'a [Product],
        spec: &'s S,
    ) -> impl Iterator<Item = &'a Product> + use<'a, 's, S>
    where
        S: Specification + ?Sized,
    {
        products
            .iter()
            .filter(move |product| spec.is_satisfied(product))
    }

    /// Collect the products satisfying `spec`, in input order.
    ///
    /// Empty input or no matches gives an empty Vec.
    pub fn filter<'a, S>(&self, products: &'a [Product], spec: &S) -> Vec<&'a Product>
    where
        S: Specification + ?Sized,
    {
        let matched: Vec<&'a Product> = self.filter_iter(products, spec).collect();

        tracing::debug!(
            "Applied {}: {} (input count: {}, output count: {})",
            spec.name(),
            spec.describe(),
            products.len(),
            matched.len()
        );
        matched
    }
}

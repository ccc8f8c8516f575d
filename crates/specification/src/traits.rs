//! Core traits for the specification engine.
//!
//! This module defines the Specification trait: a predicate object that
//! decides whether a single product matches one rule. New rules are added
//! by writing a new implementation, never by editing the filter.

use catalog::Product;
use std::sync::Arc;

use crate::specs::{AndSpecification, NotSpecification, OrSpecification};

/// Core trait for matching products.
///
/// Evaluation must be pure: the same specification and product always
/// give the same answer, and the product is only read.
pub trait Specification: Send + Sync {
    /// Returns the name of this specification (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `product` satisfies this rule.
    fn is_satisfied(&self, product: &Product) -> bool;

    /// Human-readable form of the rule, including any parts it wraps.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

impl<S: Specification + ?Sized> Specification for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: Specification + ?Sized> Specification for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_satisfied(&self, product: &Product) -> bool {
        (**self).is_satisfied(product)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Combinators for building composite specifications.
///
/// ```ignore
/// let spec = ColorSpecification::new(Color::Green)
///     .and(SizeSpecification::new(Size::Large));
/// ```
pub trait SpecificationExt: Specification + Sized {
    /// Both `self` and `other` must match.
    fn and<S: Specification>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }

    /// Either `self` or `other` must match.
    fn or<S: Specification>(self, other: S) -> OrSpecification<Self, S> {
        OrSpecification::new(self, other)
    }

    /// Matches exactly the products `self` rejects.
    fn negate(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }

    /// Erase the concrete type, for specifications assembled at runtime.
    fn boxed(self) -> Box<dyn Specification>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: Specification> SpecificationExt for T {}

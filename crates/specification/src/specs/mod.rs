//! Specification implementations.
//!
//! Attribute specifications match a single product field; composites
//! combine other specifications and can be nested freely.

pub mod and;
pub mod color;
pub mod not;
pub mod or;
pub mod size;

// Re-export for convenience
pub use and::AndSpecification;
pub use color::ColorSpecification;
pub use not::NotSpecification;
pub use or::OrSpecification;
pub use size::SizeSpecification;

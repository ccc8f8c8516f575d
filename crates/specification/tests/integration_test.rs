//! Integration tests for the specification engine.
//!
//! These tests verify that specifications, combinators and both filters
//! agree with each other on realistic and generated catalogs.

use catalog::{Color, Product, ProductCatalog, Size};
use proptest::prelude::*;
use specification::specs::*;
use specification::{Filter, LegacyFilter, Specification, SpecificationExt};
use std::sync::Arc;

fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|&p| p.name()).collect()
}

#[test]
fn test_sample_scenario() {
    let catalog = ProductCatalog::sample();
    let filter = Filter::new();

    let green = ColorSpecification::new(Color::Green);
    let large = SizeSpecification::new(Size::Large);

    assert_eq!(
        names(&filter.filter(catalog.products(), &green)),
        vec!["Apple", "Tree"]
    );
    assert_eq!(
        names(&filter.filter(catalog.products(), &AndSpecification::new(green, large))),
        vec!["Tree"]
    );
    assert_eq!(
        names(&filter.filter(catalog.products(), &large)),
        vec!["Tree", "Pen"]
    );
}

#[test]
fn test_legacy_and_specification_filters_agree() {
    let catalog = ProductCatalog::sample();
    let filter = Filter::new();
    let legacy = LegacyFilter::new();

    for color in Color::ALL {
        assert_eq!(
            filter.filter(catalog.products(), &ColorSpecification::new(color)),
            legacy.filter_by_color(catalog.products(), color)
        );
    }
    for size in Size::ALL {
        assert_eq!(
            filter.filter(catalog.products(), &SizeSpecification::new(size)),
            legacy.filter_by_size(catalog.products(), size)
        );
        for color in Color::ALL {
            let spec = SizeSpecification::new(size).and(ColorSpecification::new(color));
            assert_eq!(
                filter.filter(catalog.products(), &spec),
                legacy.filter_by_size_and_color(catalog.products(), size, color)
            );
        }
    }
}

#[test]
fn test_shared_specification_in_several_composites() {
    let catalog = ProductCatalog::sample();
    let green: Arc<dyn Specification> = Arc::new(ColorSpecification::new(Color::Green));

    let green_and_small = green.clone().and(SizeSpecification::new(Size::Small));
    let green_or_blue = green.clone().or(ColorSpecification::new(Color::Blue));

    let filter = Filter::new();
    assert_eq!(
        names(&filter.filter(catalog.products(), &green_and_small)),
        vec!["Apple"]
    );
    assert_eq!(
        names(&filter.filter(catalog.products(), &green_or_blue)),
        vec!["Apple", "Tree", "Pen"]
    );
}

#[test]
fn test_runtime_assembled_specification() {
    let catalog = ProductCatalog::sample();
    let parts: Vec<Box<dyn Specification>> = vec![
        ColorSpecification::new(Color::Green).boxed(),
        SizeSpecification::new(Size::Large).negate().boxed(),
    ];

    let spec = parts
        .into_iter()
        .reduce(|acc, next| acc.and(next).boxed())
        .unwrap();

    assert_eq!(spec.describe(), "(color == green AND NOT size == large)");
    assert_eq!(
        names(&Filter::new().filter(catalog.products(), &spec)),
        vec!["Apple"]
    );
}

// =============================================================================
// Property tests
// =============================================================================

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Red), Just(Color::Green), Just(Color::Blue)]
}

fn size_strategy() -> impl Strategy<Value = Size> {
    prop_oneof![Just(Size::Small), Just(Size::Medium), Just(Size::Large)]
}

fn product_strategy() -> impl Strategy<Value = Product> {
    ("[A-Za-z]{1,8}", color_strategy(), size_strategy())
        .prop_map(|(name, color, size)| Product::new(name, color, size))
}

fn products_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..32)
}

/// Positions of the matches within the input, to compare results by identity.
fn positions(products: &[Product], matched: &[&Product]) -> Vec<usize> {
    matched
        .iter()
        .map(|&m| {
            products
                .iter()
                .position(|p| std::ptr::eq(p, m))
                .expect("match must point into input")
        })
        .collect()
}

proptest! {
    #[test]
    fn single_product_matches_iff_satisfied(
        product in product_strategy(),
        color in color_strategy(),
    ) {
        let spec = ColorSpecification::new(color);
        let input = [product];
        let result = Filter::new().filter(&input, &spec);

        if spec.is_satisfied(&input[0]) {
            prop_assert_eq!(result.len(), 1);
            prop_assert!(std::ptr::eq(result[0], &input[0]));
        } else {
            prop_assert!(result.is_empty());
        }
    }

    #[test]
    fn and_is_ordered_intersection(
        products in products_strategy(),
        color in color_strategy(),
        size in size_strategy(),
    ) {
        let filter = Filter::new();
        let a = ColorSpecification::new(color);
        let b = SizeSpecification::new(size);

        let by_a = positions(&products, &filter.filter(&products, &a));
        let by_b = positions(&products, &filter.filter(&products, &b));
        let by_and = positions(&products, &filter.filter(&products, &a.and(b)));

        let expected: Vec<usize> = by_a.into_iter().filter(|i| by_b.contains(i)).collect();
        prop_assert_eq!(by_and, expected);
    }

    #[test]
    fn or_is_ordered_union(
        products in products_strategy(),
        color in color_strategy(),
        size in size_strategy(),
    ) {
        let filter = Filter::new();
        let a = ColorSpecification::new(color);
        let b = SizeSpecification::new(size);

        let by_a = positions(&products, &filter.filter(&products, &a));
        let by_b = positions(&products, &filter.filter(&products, &b));
        let by_or = positions(&products, &filter.filter(&products, &a.or(b)));

        let expected: Vec<usize> = (0..products.len())
            .filter(|i| by_a.contains(i) || by_b.contains(i))
            .collect();
        prop_assert_eq!(by_or, expected);
    }

    #[test]
    fn negation_is_complement(
        products in products_strategy(),
        color in color_strategy(),
    ) {
        let filter = Filter::new();
        let spec = ColorSpecification::new(color);

        let kept = filter.filter(&products, &spec).len();
        let rejected = filter.filter(&products, &spec.negate()).len();
        prop_assert_eq!(kept + rejected, products.len());
    }

    #[test]
    fn filtering_preserves_input_order(
        products in products_strategy(),
        size in size_strategy(),
    ) {
        let matched = Filter::new().filter(&products, &SizeSpecification::new(size));
        let idx = positions(&products, &matched);

        prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unsatisfiable_specification_yields_nothing(
        products in products_strategy(),
        color in color_strategy(),
    ) {
        let spec = ColorSpecification::new(color).and(ColorSpecification::new(color).negate());
        prop_assert!(Filter::new().filter(&products, &spec).is_empty());
    }
}

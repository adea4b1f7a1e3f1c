//! Tests for Inventory filter and sort
//!
//! These tests verify:
//! - Equality filter on every field
//! - Inapplicable keywords are rejected
//! - Ascending / descending sort on every field
//! - Stable ordering of ties

use stockpile::{Field, FieldValue, Inventory, Product, StockpileError};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_inventory(books: &[(&str, i64, f64)]) -> (Inventory, Vec<Product>) {
    let mut inventory = Inventory::new();
    let mut products = Vec::new();

    for &(name, stock, price) in books {
        let product = inventory.create(name, "Book", stock, price).unwrap();
        inventory.insert(product.clone()).unwrap();
        products.push(product);
    }

    (inventory, products)
}

/// Thinking in Java (34, 65.55), Learning Java (16, 45.99),
/// Java Concurrent Programming (24, 78.99)
fn setup_reference_books() -> (Inventory, Product, Product, Product) {
    let (inventory, products) = setup_inventory(&[
        ("Thinking in Java", 34, 65.55),
        ("Learning Java", 16, 45.99),
        ("Java Concurrent Programming", 24, 78.99),
    ]);
    let [a, b, c]: [Product; 3] = products.try_into().unwrap();
    (inventory, a, b, c)
}

fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name().to_string()).collect()
}

// =============================================================================
// Filter Tests
// =============================================================================

#[test]
fn test_filter_by_id() {
    let (inventory, _, b, _) = setup_reference_books();

    let filtered = inventory.filter(Field::Id, b.id()).unwrap();

    assert_eq!(filtered, vec![&b]);
}

#[test]
fn test_filter_by_name() {
    let (inventory, a, _, _) = setup_reference_books();

    let filtered = inventory.filter(Field::Name, "Thinking in Java").unwrap();

    assert_eq!(filtered, vec![&a]);
}

#[test]
fn test_filter_by_category() {
    let (inventory, _, _, _) = setup_reference_books();

    assert_eq!(inventory.filter(Field::Category, "Book").unwrap().len(), 3);
    assert!(inventory.filter(Field::Category, "Magazine").unwrap().is_empty());
}

#[test]
fn test_filter_by_stock() {
    let (inventory, _) = setup_inventory(&[
        ("Thinking in Java", 34, 65.55),
        ("Learning Java", 24, 45.99),
        ("Java Concurrent Programming", 24, 78.99),
    ]);

    let filtered = inventory.filter(Field::Stock, 24).unwrap();

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].stock(), filtered[1].stock());
    assert_eq!(
        names(&filtered),
        vec!["Learning Java", "Java Concurrent Programming"]
    );
}

#[test]
fn test_filter_by_price() {
    let (inventory, _, b, _) = setup_reference_books();

    let filtered = inventory.filter(Field::Price, 45.99).unwrap();

    assert_eq!(filtered, vec![&b]);
}

#[test]
fn test_filter_no_match_on_empty_inventory() {
    let inventory = Inventory::new();

    assert!(inventory.filter(Field::Name, "anything").unwrap().is_empty());
}

#[test]
fn test_filter_inapplicable_keyword() {
    let (inventory, _, _, _) = setup_reference_books();

    let result = inventory.filter(Field::Stock, "24");
    assert!(matches!(
        result,
        Err(StockpileError::FieldMismatch { field: Field::Stock, .. })
    ));

    assert!(inventory.filter(Field::Price, 45).is_err());
    assert!(inventory.filter(Field::Name, FieldValue::Quantity(1)).is_err());
    assert!(inventory.filter(Field::Id, "2").is_err());
    assert!(inventory.filter(Field::Id, -1).is_err());
}

#[test]
fn test_filter_by_id_with_plain_integer() {
    let (inventory, _, b, _) = setup_reference_books();

    assert_eq!(inventory.filter(Field::Id, 2).unwrap(), vec![&b]);
    assert_eq!(inventory.filter(Field::Id, 2i64).unwrap(), vec![&b]);
    assert!(inventory.filter(Field::Id, 99).unwrap().is_empty());
}

#[test]
fn test_filter_returns_subset_exactly() {
    let (inventory, _) = setup_inventory(&[
        ("a", 1, 1.0),
        ("b", 2, 1.0),
        ("c", 1, 2.0),
        ("d", 3, 1.0),
        ("e", 1, 1.0),
    ]);

    let filtered = inventory.filter(Field::Stock, 1).unwrap();
    let expected: Vec<&Product> = inventory.iter().filter(|p| p.stock() == 1).collect();

    assert_eq!(filtered, expected);
    assert_eq!(names(&filtered), vec!["a", "c", "e"]);
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_ascending() {
    let (inventory, a, b, c) = setup_reference_books();

    assert_eq!(inventory.sort(Field::Name, true), vec![&c, &b, &a]);
    assert_eq!(inventory.sort(Field::Stock, true), vec![&b, &c, &a]);
    assert_eq!(inventory.sort(Field::Price, true), vec![&b, &a, &c]);
    assert_eq!(inventory.sort(Field::Id, true), vec![&a, &b, &c]);
}

#[test]
fn test_sort_descending() {
    let (inventory, a, b, c) = setup_reference_books();

    assert_eq!(inventory.sort(Field::Name, false), vec![&a, &b, &c]);
    assert_eq!(inventory.sort(Field::Stock, false), vec![&a, &c, &b]);
    assert_eq!(inventory.sort(Field::Price, false), vec![&c, &a, &b]);
    assert_eq!(inventory.sort(Field::Id, false), vec![&c, &b, &a]);
}

#[test]
fn test_sort_directions_are_reversed_for_distinct_values() {
    let (inventory, _, _, _) = setup_reference_books();

    for field in [Field::Id, Field::Name, Field::Stock, Field::Price] {
        let mut ascending = inventory.sort(field, true);
        let descending = inventory.sort(field, false);
        ascending.reverse();
        assert_eq!(ascending, descending, "field {}", field);
    }
}

#[test]
fn test_sort_is_stable_for_ties() {
    let (inventory, products) = setup_inventory(&[
        ("Thinking in Java", 34, 65.55),
        ("Learning Java", 24, 45.99),
        ("Java Concurrent Programming", 24, 78.99),
    ]);
    let (a, b, c) = (&products[0], &products[1], &products[2]);

    // Equal stock keeps ascending id order in both directions
    assert_eq!(inventory.sort(Field::Stock, true), vec![b, c, a]);
    assert_eq!(inventory.sort(Field::Stock, false), vec![a, b, c]);

    // Every product shares the category
    assert_eq!(inventory.sort(Field::Category, true), vec![a, b, c]);
    assert_eq!(inventory.sort(Field::Category, false), vec![a, b, c]);
}

#[test]
fn test_sort_does_not_modify_inventory() {
    let (inventory, a, b, c) = setup_reference_books();

    let _ = inventory.sort(Field::Price, false);

    assert_eq!(inventory.all(), vec![&a, &b, &c]);
}

#[test]
fn test_sort_empty_inventory() {
    let inventory = Inventory::new();

    assert!(inventory.sort(Field::Name, true).is_empty());
}

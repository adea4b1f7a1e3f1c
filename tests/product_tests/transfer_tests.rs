//! Tests for the ProductRecord transfer representation
//!
//! These tests verify:
//! - Product → record copies every field, id included
//! - Record → product always draws a fresh id
//! - Records survive bincode encoding (the snapshot record encoding)

use stockpile::{IdSequence, Product, ProductId, ProductRecord};

#[test]
fn test_record_from_product_copies_all_fields() {
    let sequence = IdSequence::starting_at(10);
    let product = Product::new(&sequence, "Java Design Patterns", "Book", 7, 39.11).unwrap();

    let record = ProductRecord::from(&product);

    assert_eq!(
        record,
        ProductRecord {
            id: ProductId::new(10),
            name: "Java Design Patterns".to_string(),
            category: "Book".to_string(),
            stock: 7,
            price: 39.11,
        }
    );
}

#[test]
fn test_record_into_product_assigns_fresh_id() {
    let sequence = IdSequence::starting_at(100);
    let record = ProductRecord {
        id: ProductId::new(3),
        name: "Spring Boot framework".to_string(),
        category: "Book".to_string(),
        stock: 11,
        price: 112.52,
    };

    let product = record.into_product(&sequence).unwrap();

    assert_eq!(product.id(), ProductId::new(100));
    assert_eq!(product.name(), "Spring Boot framework");
    assert_eq!(product.category(), "Book");
    assert_eq!(product.stock(), 11);
    assert_eq!(product.price(), 112.52);
    assert_eq!(sequence.peek(), 101);
}

#[test]
fn test_record_round_trip_through_product_changes_only_id() {
    let sequence = IdSequence::new();
    let original = Product::new(&sequence, "Hibernate framework", "Book", 8, 42.23).unwrap();

    let copy = ProductRecord::from(&original).into_product(&sequence).unwrap();

    assert_ne!(copy.id(), original.id());
    let rebased = ProductRecord {
        id: original.id(),
        ..ProductRecord::from(&copy)
    };
    assert_eq!(rebased, ProductRecord::from(&original));
}

#[test]
fn test_default_record_is_empty() {
    let record = ProductRecord::default();

    assert_eq!(record.id, ProductId::UNASSIGNED);
    assert!(record.name.is_empty());
    assert!(record.category.is_empty());
    assert_eq!(record.stock, 0);
    assert_eq!(record.price, 0.0);
}

#[test]
fn test_record_bincode_encoding_preserves_fields() {
    let record = ProductRecord {
        id: ProductId::new(u64::MAX),
        name: "Zażółć gęślą jaźń".to_string(),
        category: "".to_string(),
        stock: i64::MIN,
        price: -0.0,
    };

    let bytes = bincode::serialize(&record).unwrap();
    let decoded: ProductRecord = bincode::deserialize(&bytes).unwrap();

    assert_eq!(decoded.id, record.id);
    assert_eq!(decoded.name, record.name);
    assert_eq!(decoded.stock, record.stock);
    assert_eq!(decoded.price.to_bits(), record.price.to_bits());
}

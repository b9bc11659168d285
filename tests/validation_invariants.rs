//! Validation Invariant Tests
//!
//! Tests for whole-class constraints:
//! - At most one primary key, reported once
//! - Primary keys are never nullable
//! - Field names are unique
//! - Backlinks are neither nullable nor primary keys
//! - Every violation in a class is accumulated

use objschema::schema::{
    BacklinkTarget, ClassifiedField, ConstraintValidator, FieldKind, ViolationKind,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn field(name: &str, kind: FieldKind) -> ClassifiedField {
    ClassifiedField::new(name, kind, kind.storage_tag())
}

fn backlink(name: &str) -> ClassifiedField {
    field(name, FieldKind::Backlink)
        .with_link_target("com.example.Person")
        .with_backlink(BacklinkTarget {
            source_class: "com.example.Person".to_string(),
            source_field: "dog".to_string(),
        })
}

// =============================================================================
// Primary Keys
// =============================================================================

/// Two primary keys yield exactly one DuplicatePrimaryKey, not two.
#[test]
fn test_two_primary_keys_reported_once() {
    let fields = vec![
        field("id", FieldKind::Integer).with_primary_key(true),
        field("code", FieldKind::String).with_primary_key(true),
    ];

    let result = ConstraintValidator::new().validate(&fields);

    assert_eq!(result.violations().len(), 1);
    assert_eq!(result.count_of(ViolationKind::DuplicatePrimaryKey), 1);
    assert_eq!(result.violations()[0].field_name, "code");
}

/// Three primary keys still yield one DuplicatePrimaryKey.
#[test]
fn test_many_primary_keys_reported_once() {
    let fields = vec![
        field("a", FieldKind::Integer).with_primary_key(true),
        field("b", FieldKind::Integer).with_primary_key(true),
        field("c", FieldKind::String).with_primary_key(true),
    ];

    let result = ConstraintValidator::new().validate(&fields);
    assert_eq!(result.count_of(ViolationKind::DuplicatePrimaryKey), 1);
}

/// A nullable primary key is rejected.
#[test]
fn test_nullable_primary_key_rejected() {
    let fields = vec![field("id", FieldKind::String)
        .with_primary_key(true)
        .with_nullable(true)];

    let result = ConstraintValidator::new().validate(&fields);
    assert_eq!(result.count_of(ViolationKind::IllegalNullableOnPrimaryKey), 1);
}

/// A class with no primary key is valid.
#[test]
fn test_no_primary_key_is_valid() {
    let fields = vec![field("name", FieldKind::String), field("age", FieldKind::Integer)];
    assert!(ConstraintValidator::new().validate(&fields).is_ok());
}

// =============================================================================
// Field Names
// =============================================================================

/// Each repeated name is reported once.
#[test]
fn test_duplicate_names_reported_once_per_name() {
    let fields = vec![
        field("a", FieldKind::String),
        field("b", FieldKind::String),
        field("a", FieldKind::Integer),
        field("b", FieldKind::Integer),
        field("a", FieldKind::Date),
    ];

    let result = ConstraintValidator::new().validate(&fields);
    assert_eq!(result.count_of(ViolationKind::DuplicateFieldName), 2);

    let names: Vec<&str> = result.violations().iter().map(|v| v.field_name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

// =============================================================================
// Backlinks
// =============================================================================

/// A backlink that slipped past the classifier with attributes is caught.
#[test]
fn test_backlink_attributes_rejected() {
    let fields = vec![
        backlink("owners").with_nullable(true),
        backlink("parents").with_primary_key(true),
        backlink("fine"),
    ];

    let result = ConstraintValidator::new().validate(&fields);
    assert_eq!(result.count_of(ViolationKind::IllegalBacklinkAttribute), 2);
    assert_eq!(result.count_of(ViolationKind::DuplicatePrimaryKey), 0);
}

/// A backlink marked primary key does not count towards the key limit.
#[test]
fn test_backlink_not_counted_as_primary_key() {
    let fields = vec![
        field("id", FieldKind::Integer).with_primary_key(true),
        backlink("owners").with_primary_key(true),
    ];

    let result = ConstraintValidator::new().validate(&fields);
    assert_eq!(result.violations().len(), 1);
    assert_eq!(result.violations()[0].kind, ViolationKind::IllegalBacklinkAttribute);
}

// =============================================================================
// Accumulation
// =============================================================================

/// Every violation is reported in one pass, in field order.
#[test]
fn test_all_violations_accumulated() {
    let fields = vec![
        field("id", FieldKind::Integer).with_primary_key(true).with_nullable(true),
        field("id", FieldKind::String).with_primary_key(true),
        backlink("owners").with_nullable(true),
    ];

    let result = ConstraintValidator::new().validate(&fields);
    let kinds: Vec<ViolationKind> = result.violations().iter().map(|v| v.kind).collect();

    assert_eq!(
        kinds,
        vec![
            ViolationKind::IllegalNullableOnPrimaryKey,
            ViolationKind::DuplicateFieldName,
            ViolationKind::DuplicatePrimaryKey,
            ViolationKind::IllegalBacklinkAttribute,
        ]
    );
}

/// Validation is deterministic.
#[test]
fn test_validation_is_deterministic() {
    let fields = vec![
        field("id", FieldKind::Integer).with_primary_key(true),
        field("id", FieldKind::Integer).with_primary_key(true),
    ];
    let validator = ConstraintValidator::new();
    let first = validator.validate(&fields);

    for _ in 0..100 {
        assert_eq!(validator.validate(&fields), first);
    }
}

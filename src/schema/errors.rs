//! Classification and validation error types
//!
//! Error codes:
//! - OBJSCHEMA_UNSUPPORTED_SCALAR_TYPE (classification)
//! - OBJSCHEMA_UNSUPPORTED_LIST_ELEMENT_TYPE (classification)
//! - OBJSCHEMA_ILLEGAL_NULLABLE_ON_PRIMITIVE (classification)
//! - OBJSCHEMA_ILLEGAL_PRIMARY_KEY_KIND (classification)
//! - OBJSCHEMA_ILLEGAL_NULLABLE_ON_PRIMARY_KEY (validation)
//! - OBJSCHEMA_DUPLICATE_PRIMARY_KEY (validation)
//! - OBJSCHEMA_DUPLICATE_FIELD_NAME (validation)
//! - OBJSCHEMA_ILLEGAL_BACKLINK_ATTRIBUTE (validation)
//!
//! Errors carry structured fields only. Wording beyond the short
//! `Display` form belongs to whatever renders compiler diagnostics.

use serde::Serialize;
use std::fmt;

/// Stage that raises a violation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Per-field classification
    Classification,
    /// Whole-class constraint validation
    Validation,
}

/// Closed taxonomy of classification and validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Declared type has no scalar mapping
    UnsupportedScalarType,
    /// Collection element type has no list mapping
    UnsupportedListElementType,
    /// Primary key declared nullable
    IllegalNullableOnPrimaryKey,
    /// Unboxed primitive declared nullable
    IllegalNullableOnPrimitive,
    /// Primary key on a kind that cannot be indexed as one
    IllegalPrimaryKeyKind,
    /// More than one primary key in a class
    DuplicatePrimaryKey,
    /// Two fields share a name
    DuplicateFieldName,
    /// Backlink field marked nullable or primary key
    IllegalBacklinkAttribute,
}

impl ViolationKind {
    /// Every violation kind, in a fixed order.
    pub const ALL: [ViolationKind; 8] = [
        ViolationKind::UnsupportedScalarType,
        ViolationKind::UnsupportedListElementType,
        ViolationKind::IllegalNullableOnPrimaryKey,
        ViolationKind::IllegalNullableOnPrimitive,
        ViolationKind::IllegalPrimaryKeyKind,
        ViolationKind::DuplicatePrimaryKey,
        ViolationKind::DuplicateFieldName,
        ViolationKind::IllegalBacklinkAttribute,
    ];

    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::UnsupportedScalarType => "OBJSCHEMA_UNSUPPORTED_SCALAR_TYPE",
            ViolationKind::UnsupportedListElementType => "OBJSCHEMA_UNSUPPORTED_LIST_ELEMENT_TYPE",
            ViolationKind::IllegalNullableOnPrimaryKey => "OBJSCHEMA_ILLEGAL_NULLABLE_ON_PRIMARY_KEY",
            ViolationKind::IllegalNullableOnPrimitive => "OBJSCHEMA_ILLEGAL_NULLABLE_ON_PRIMITIVE",
            ViolationKind::IllegalPrimaryKeyKind => "OBJSCHEMA_ILLEGAL_PRIMARY_KEY_KIND",
            ViolationKind::DuplicatePrimaryKey => "OBJSCHEMA_DUPLICATE_PRIMARY_KEY",
            ViolationKind::DuplicateFieldName => "OBJSCHEMA_DUPLICATE_FIELD_NAME",
            ViolationKind::IllegalBacklinkAttribute => "OBJSCHEMA_ILLEGAL_BACKLINK_ATTRIBUTE",
        }
    }

    /// Returns the stage that reports this kind.
    pub fn stage(&self) -> Stage {
        match self {
            ViolationKind::UnsupportedScalarType
            | ViolationKind::UnsupportedListElementType
            | ViolationKind::IllegalNullableOnPrimitive
            | ViolationKind::IllegalPrimaryKeyKind => Stage::Classification,
            ViolationKind::IllegalNullableOnPrimaryKey
            | ViolationKind::DuplicatePrimaryKey
            | ViolationKind::DuplicateFieldName
            | ViolationKind::IllegalBacklinkAttribute => Stage::Validation,
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            ViolationKind::UnsupportedScalarType => "unsupported field type",
            ViolationKind::UnsupportedListElementType => "unsupported list element type",
            ViolationKind::IllegalNullableOnPrimaryKey => "primary key cannot be nullable",
            ViolationKind::IllegalNullableOnPrimitive => "primitive type cannot be nullable",
            ViolationKind::IllegalPrimaryKeyKind => "type cannot be a primary key",
            ViolationKind::DuplicatePrimaryKey => "class already has a primary key",
            ViolationKind::DuplicateFieldName => "field name already declared",
            ViolationKind::IllegalBacklinkAttribute => "backlink cannot be nullable or a primary key",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single failure tied to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// What went wrong
    pub kind: ViolationKind,
    /// Offending field
    pub field_name: String,
    /// Source type name involved (element type for list-element failures)
    pub type_name: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, field_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            field_name: field_name.into(),
            type_name: type_name.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: field '{}' of type '{}': {}",
            self.kind.code(),
            self.field_name,
            self.type_name,
            self.kind.summary()
        )
    }
}

/// Failure to classify a single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationError {
    violation: Violation,
}

impl ClassificationError {
    /// Declared type has no scalar mapping.
    pub fn unsupported_scalar(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::of(ViolationKind::UnsupportedScalarType, field, type_name)
    }

    /// Collection element type has no list mapping.
    pub fn unsupported_list_element(field: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self::of(ViolationKind::UnsupportedListElementType, field, element_type)
    }

    /// Unboxed primitive declared nullable.
    pub fn nullable_primitive(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::of(ViolationKind::IllegalNullableOnPrimitive, field, type_name)
    }

    /// Primary key on an ineligible kind.
    pub fn primary_key_kind(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::of(ViolationKind::IllegalPrimaryKeyKind, field, type_name)
    }

    fn of(kind: ViolationKind, field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            violation: Violation::new(kind, field, type_name),
        }
    }

    pub fn kind(&self) -> ViolationKind {
        self.violation.kind
    }

    pub fn field_name(&self) -> &str {
        &self.violation.field_name
    }

    pub fn type_name(&self) -> &str {
        &self.violation.type_name
    }

    pub fn into_violation(self) -> Violation {
        self.violation
    }
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.violation)
    }
}

impl std::error::Error for ClassificationError {}

/// Result type for single-field classification
pub type ClassificationResult<T> = Result<T, ClassificationError>;

/// Outcome of whole-class constraint validation.
///
/// Violations are kept in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// True when no violation was found.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations of the given kind.
    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Converts into a `Result`, failing with every violation found.
    pub fn into_result(self) -> Result<(), Vec<Violation>> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations)
        }
    }
}

/// A class that must not proceed to code emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRejection {
    /// Fully-qualified class name
    pub class_name: String,
    /// Every failure found for the class, classification first
    pub violations: Vec<Violation>,
}

impl ClassRejection {
    pub fn new(class_name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            class_name: class_name.into(),
            violations,
        }
    }

    /// Returns whether any violation has the given kind.
    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }
}

impl fmt::Display for ClassRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class '{}' rejected with {} violation(s)",
            self.class_name,
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "\n  {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ClassRejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = ViolationKind::ALL.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), ViolationKind::ALL.len());
    }

    #[test]
    fn test_stages() {
        assert_eq!(ViolationKind::UnsupportedScalarType.stage(), Stage::Classification);
        assert_eq!(ViolationKind::IllegalPrimaryKeyKind.stage(), Stage::Classification);
        assert_eq!(ViolationKind::DuplicatePrimaryKey.stage(), Stage::Validation);
        assert_eq!(ViolationKind::IllegalBacklinkAttribute.stage(), Stage::Validation);
    }

    #[test]
    fn test_classification_error_fields() {
        let err = ClassificationError::nullable_primitive("count", "byte");
        assert_eq!(err.kind(), ViolationKind::IllegalNullableOnPrimitive);
        assert_eq!(err.field_name(), "count");
        assert_eq!(err.type_name(), "byte");

        let display = format!("{}", err);
        assert!(display.contains("OBJSCHEMA_ILLEGAL_NULLABLE_ON_PRIMITIVE"));
        assert!(display.contains("count"));
        assert!(display.contains("byte"));
    }

    #[test]
    fn test_validation_result_accumulates() {
        let mut result = ValidationResult::new();
        assert!(result.is_ok());

        result.push(Violation::new(ViolationKind::DuplicateFieldName, "a", "int"));
        result.push(Violation::new(ViolationKind::DuplicatePrimaryKey, "b", "long"));
        assert!(!result.is_ok());
        assert_eq!(result.count_of(ViolationKind::DuplicateFieldName), 1);
        assert_eq!(result.violations()[1].field_name, "b");

        let err = result.into_result().unwrap_err();
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_rejection_display_lists_violations() {
        let rejection = ClassRejection::new(
            "com.example.Person",
            vec![Violation::new(ViolationKind::DuplicateFieldName, "name", "java.lang.String")],
        );
        assert!(rejection.has(ViolationKind::DuplicateFieldName));
        let display = format!("{}", rejection);
        assert!(display.contains("com.example.Person"));
        assert!(display.contains("OBJSCHEMA_DUPLICATE_FIELD_NAME"));
    }

    #[test]
    fn test_kind_serializes_as_screaming_case() {
        let json = serde_json::to_string(&ViolationKind::IllegalBacklinkAttribute).unwrap();
        assert_eq!(json, "\"ILLEGAL_BACKLINK_ATTRIBUTE\"");
    }
}

//! Constraint validator for one class's classified fields
//!
//! Checks (all accumulated, never short-circuited):
//! - Field names are unique (case-sensitive)
//! - At most one primary key
//! - A primary key is not nullable
//! - A backlink is neither nullable nor a primary key
//!
//! Violations are reported in field order. Each duplicated name and the
//! duplicate-primary-key condition are reported once per class, however many
//! fields repeat them.

use std::collections::HashSet;

use super::errors::{ClassificationResult, ValidationResult, Violation, ViolationKind};
use super::types::{ClassifiedField, DeclaredField};

/// Whole-class constraint validator.
///
/// Needs the complete field sequence of a class; validation of different
/// classes is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstraintValidator;

impl ConstraintValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates the classified fields of one class.
    pub fn validate(&self, fields: &[ClassifiedField]) -> ValidationResult {
        self.check(
            fields
                .iter()
                .map(|f| (f.name.as_str(), f.declared_type.as_str(), Some(f))),
        )
    }

    /// Validates a class whose fields may have failed classification.
    ///
    /// `results` pairs with `declared` by position. Name uniqueness covers
    /// every declared field; the remaining checks need a kind and only see
    /// fields that classified.
    pub fn validate_declared(
        &self,
        declared: &[DeclaredField],
        results: &[ClassificationResult<ClassifiedField>],
    ) -> ValidationResult {
        self.check(
            declared
                .iter()
                .zip(results)
                .map(|(d, r)| (d.name.as_str(), d.declared_type.as_str(), r.as_ref().ok())),
        )
    }

    fn check<'f>(
        &self,
        entries: impl Iterator<Item = (&'f str, &'f str, Option<&'f ClassifiedField>)>,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();

        let mut seen_names: HashSet<&str> = HashSet::new();
        let mut reported_names: HashSet<&str> = HashSet::new();
        let mut primary_key: Option<&str> = None;
        let mut duplicate_key_reported = false;

        for (name, type_name, classified) in entries {
            if !seen_names.insert(name) && reported_names.insert(name) {
                result.push(Violation::new(ViolationKind::DuplicateFieldName, name, type_name));
            }

            let Some(field) = classified else {
                continue;
            };

            // Backlinks are never stored, so they take no part in key accounting.
            if field.kind.is_backlink() {
                if field.nullable || field.is_primary_key {
                    result.push(violation(ViolationKind::IllegalBacklinkAttribute, field));
                }
                continue;
            }

            if !field.is_primary_key {
                continue;
            }

            if field.nullable {
                result.push(violation(ViolationKind::IllegalNullableOnPrimaryKey, field));
            }

            match primary_key {
                None => primary_key = Some(field.name.as_str()),
                Some(_) if !duplicate_key_reported => {
                    duplicate_key_reported = true;
                    result.push(violation(ViolationKind::DuplicatePrimaryKey, field));
                }
                Some(_) => {}
            }
        }

        result
    }
}

fn violation(kind: ViolationKind, field: &ClassifiedField) -> Violation {
    Violation::new(kind, &field.name, &field.declared_type)
}

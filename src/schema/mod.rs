//! Schema compilation core
//!
//! Classifies every declared field of a persistent entity class into one
//! storage field kind and validates the result before code emission.
//!
//! # Pipeline
//!
//! declared class -> [`FieldClassifier`] (consults [`TypeMappingTable`] and
//! [`FieldKind`]) -> [`ConstraintValidator`] -> [`CompiledClass`] or
//! [`ClassRejection`]
//!
//! # Guarantees
//!
//! - Every field gets exactly one kind or exactly one classification error
//! - Unknown types are errors, never defaulted
//! - Validation accumulates every violation in a class
//! - Classes compile independently; a rejected class does not affect others

mod classifier;
mod compiler;
mod errors;
mod kind;
mod mapping;
pub mod naming;
mod types;
mod validator;

pub use classifier::{EntityCatalog, FieldClassifier, COLLECTION_TYPES};
pub use compiler::{BatchReport, ClassOutcome, CompilerOptions, SchemaCompiler};
pub use errors::{
    ClassRejection, ClassificationError, ClassificationResult, Stage, ValidationResult, Violation,
    ViolationKind,
};
pub use kind::{FieldKind, KindCategory, Representation, ValueType};
pub use mapping::{TypeMappingTable, PRIMITIVE_PAIRS};
pub use types::{
    BacklinkTarget, ClassifiedField, CompiledClass, DeclaredClass, DeclaredField,
    BACKLINK_CONTAINER_TYPE, DEFAULT_LIST_TYPE,
};
pub use validator::ConstraintValidator;

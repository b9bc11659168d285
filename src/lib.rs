//! objschema - schema compilation core for persisted object models
//!
//! Classifies every declared field of a model class into a storage field
//! kind and validates the class-level constraints before any code is
//! emitted.

pub mod cli;
pub mod model;
pub mod observability;
pub mod schema;

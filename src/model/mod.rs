//! Class model input
//!
//! Loads declared classes from JSON model files and checks that every name
//! in them is well formed before anything is classified.

mod errors;
pub mod grammar;
mod loader;

pub use errors::{ModelError, ModelResult};
pub use loader::{check_names, ModelLoader};

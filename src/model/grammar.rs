//! Declared-name grammar
//!
//! - identifier: `[A-Za-z_$][A-Za-z0-9_$]*`
//! - qualified name: identifiers joined by `.`
//! - type name: qualified name with an optional `[]` array suffix

use std::sync::OnceLock;

use regex::Regex;

static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
static QUALIFIED_NAME: OnceLock<Regex> = OnceLock::new();
static TYPE_NAME: OnceLock<Regex> = OnceLock::new();

const IDENT: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).expect("declared-name pattern is a valid regex")
}

/// True for a single source identifier (field names).
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER
        .get_or_init(|| compile(format!("^{IDENT}$")))
        .is_match(name)
}

/// True for a dotted class name.
pub fn is_qualified_name(name: &str) -> bool {
    QUALIFIED_NAME
        .get_or_init(|| compile(format!(r"^{IDENT}(\.{IDENT})*$")))
        .is_match(name)
}

/// True for a declared type name (class name or array of one).
pub fn is_type_name(name: &str) -> bool {
    TYPE_NAME
        .get_or_init(|| compile(format!(r"^{IDENT}(\.{IDENT})*(\[\])?$")))
        .is_match(name)
}

//! Type mapping table
//!
//! Two immutable lookups from source type names to field kinds:
//! - scalar map: primitive, boxed, string, date, binary and counter types
//! - list-element map: element types allowed inside a primitive list
//!
//! The maps are independent. A name present in one is not implied to be
//! present in the other, and a name absent from both is never defaulted.
//! The table is built once on first use and shared read-only afterwards.
//!
//! Reference types are keyed by fully-qualified name only: `java.lang.String`
//! resolves, a bare `String` does not. Unboxed primitives and `byte[]` have
//! no package.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::kind::FieldKind;

/// Unboxed primitives paired with their boxed counterparts.
pub const PRIMITIVE_PAIRS: [(&str, &str, FieldKind); 7] = [
    ("byte", "java.lang.Byte", FieldKind::Integer),
    ("short", "java.lang.Short", FieldKind::Integer),
    ("int", "java.lang.Integer", FieldKind::Integer),
    ("long", "java.lang.Long", FieldKind::Integer),
    ("float", "java.lang.Float", FieldKind::Float),
    ("double", "java.lang.Double", FieldKind::Double),
    ("boolean", "java.lang.Boolean", FieldKind::Boolean),
];

/// Reference scalar types with no unboxed form.
const REFERENCE_SCALARS: [(&str, FieldKind); 4] = [
    ("java.lang.String", FieldKind::String),
    ("java.util.Date", FieldKind::Date),
    ("byte[]", FieldKind::Binary),
    ("io.realm.MutableRealmInteger", FieldKind::MutableInteger),
];

const LIST_ELEMENTS: [(&str, FieldKind); 10] = [
    ("java.lang.Byte", FieldKind::IntegerList),
    ("java.lang.Short", FieldKind::IntegerList),
    ("java.lang.Integer", FieldKind::IntegerList),
    ("java.lang.Long", FieldKind::IntegerList),
    ("java.lang.Float", FieldKind::FloatList),
    ("java.lang.Double", FieldKind::DoubleList),
    ("java.lang.Boolean", FieldKind::BooleanList),
    ("java.lang.String", FieldKind::StringList),
    ("java.util.Date", FieldKind::DateList),
    ("byte[]", FieldKind::BinaryList),
];

static GLOBAL_TABLE: OnceLock<TypeMappingTable> = OnceLock::new();

/// Immutable source-type to field-kind lookup.
#[derive(Debug)]
pub struct TypeMappingTable {
    scalars: HashMap<&'static str, FieldKind>,
    list_elements: HashMap<&'static str, FieldKind>,
}

impl TypeMappingTable {
    /// Returns the process-wide table, building it on first access.
    pub fn global() -> &'static TypeMappingTable {
        GLOBAL_TABLE.get_or_init(TypeMappingTable::build)
    }

    fn build() -> Self {
        let mut scalars = HashMap::with_capacity(PRIMITIVE_PAIRS.len() * 2 + REFERENCE_SCALARS.len());
        for (primitive, boxed, kind) in PRIMITIVE_PAIRS {
            scalars.insert(primitive, kind);
            scalars.insert(boxed, kind);
        }
        for (name, kind) in REFERENCE_SCALARS {
            scalars.insert(name, kind);
        }

        let list_elements = LIST_ELEMENTS.iter().copied().collect();

        Self {
            scalars,
            list_elements,
        }
    }

    /// Resolves a declared scalar type name to its kind.
    ///
    /// The name must match exactly as declared; boxing does not change the
    /// result.
    pub fn resolve_scalar(&self, type_name: &str) -> Option<FieldKind> {
        self.scalars.get(type_name).copied()
    }

    /// Resolves a primitive-list element type name to its list kind.
    ///
    /// Entity element types are not in this table.
    pub fn resolve_list_element(&self, element_type_name: &str) -> Option<FieldKind> {
        self.list_elements.get(element_type_name).copied()
    }

    /// True if the name is an unboxed primitive (cannot hold null).
    pub fn is_primitive(&self, type_name: &str) -> bool {
        PRIMITIVE_PAIRS.iter().any(|(p, _, _)| *p == type_name)
    }

    /// Returns the boxed counterpart of an unboxed primitive.
    pub fn boxed_of(&self, primitive: &str) -> Option<&'static str> {
        PRIMITIVE_PAIRS
            .iter()
            .find(|(p, _, _)| *p == primitive)
            .map(|(_, boxed, _)| *boxed)
    }

    /// Registered scalar type names, sorted.
    pub fn scalar_type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.scalars.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered list-element type names, sorted.
    pub fn list_element_type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.list_elements.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

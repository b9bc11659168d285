//! Field classifier
//!
//! Maps one declared field to exactly one storage field kind, in priority
//! order (first match wins):
//!
//! 1. backlink annotation -> `BACKLINK`
//! 2. collection of a declared entity class -> `LIST`
//! 3. collection of anything else -> list-element table
//! 4. declared entity class -> `OBJECT`
//! 5. anything else -> scalar table
//!
//! Entity element types are checked before the list-element table, so a
//! declared entity always wins over a same-named table entry.
//!
//! Classification depends only on the field itself and the entity catalog;
//! it never looks at sibling fields.

use std::collections::HashSet;

use super::errors::{ClassificationError, ClassificationResult};
use super::kind::FieldKind;
use super::mapping::TypeMappingTable;
use super::types::{ClassifiedField, DeclaredClass, DeclaredField};

/// Container type names recognized as homogeneous collections.
pub const COLLECTION_TYPES: [&str; 4] = ["io.realm.RealmList", "RealmList", "java.util.List", "List"];

/// Declared entity classes and recognized collection containers.
///
/// Built once per compilation batch and read-only while classifying.
#[derive(Debug, Clone)]
pub struct EntityCatalog {
    entities: HashSet<String>,
    collection_types: HashSet<String>,
}

impl Default for EntityCatalog {
    fn default() -> Self {
        Self {
            entities: HashSet::new(),
            collection_types: COLLECTION_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EntityCatalog {
    /// Creates a catalog with no entities and the default collection types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog naming every class in the batch as an entity.
    pub fn from_classes(classes: &[DeclaredClass]) -> Self {
        let mut catalog = Self::new();
        for class in classes {
            catalog.add_entity(&class.name);
        }
        catalog
    }

    pub fn with_entity(mut self, name: impl Into<String>) -> Self {
        self.entities.insert(name.into());
        self
    }

    pub fn with_collection_type(mut self, name: impl Into<String>) -> Self {
        self.collection_types.insert(name.into());
        self
    }

    pub fn add_entity(&mut self, name: impl Into<String>) {
        self.entities.insert(name.into());
    }

    pub fn add_collection_type(&mut self, name: impl Into<String>) {
        self.collection_types.insert(name.into());
    }

    pub fn is_entity(&self, type_name: &str) -> bool {
        self.entities.contains(type_name)
    }

    pub fn is_collection(&self, type_name: &str) -> bool {
        self.collection_types.contains(type_name)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

/// Classifies declared fields against the global mapping table.
pub struct FieldClassifier<'a> {
    table: &'static TypeMappingTable,
    catalog: &'a EntityCatalog,
}

impl<'a> FieldClassifier<'a> {
    pub fn new(catalog: &'a EntityCatalog) -> Self {
        Self {
            table: TypeMappingTable::global(),
            catalog,
        }
    }

    /// Classifies one declared field.
    ///
    /// # Errors
    ///
    /// - `UnsupportedListElementType` if a collection element is neither an
    ///   entity nor a registered list element (or is missing)
    /// - `UnsupportedScalarType` if the type has no scalar mapping
    /// - `IllegalNullableOnPrimitive` if an unboxed primitive is nullable
    /// - `IllegalPrimaryKeyKind` if a primary key resolves to an ineligible kind
    pub fn classify(&self, field: &DeclaredField) -> ClassificationResult<ClassifiedField> {
        // Backlinks are derived, so storage annotations do not apply.
        if let Some(target) = &field.backlink {
            return Ok(
                ClassifiedField::new(&field.name, FieldKind::Backlink, &field.declared_type)
                    .with_link_target(target.source_class.clone())
                    .with_backlink(target.clone()),
            );
        }

        let classified = self.resolve_kind(field)?;

        if field.nullable && self.table.is_primitive(&field.declared_type) {
            return Err(ClassificationError::nullable_primitive(
                &field.name,
                &field.declared_type,
            ));
        }

        if field.primary_key && !classified.kind.is_primary_key_eligible() {
            return Err(ClassificationError::primary_key_kind(
                &field.name,
                field.display_type(),
            ));
        }

        Ok(classified
            .with_nullable(field.nullable)
            .with_primary_key(field.primary_key))
    }

    /// Classifies every field, keeping declaration order.
    pub fn classify_all(&self, fields: &[DeclaredField]) -> Vec<ClassificationResult<ClassifiedField>> {
        fields.iter().map(|f| self.classify(f)).collect()
    }

    /// Steps 2-5: pick the kind for a non-backlink field.
    fn resolve_kind(&self, field: &DeclaredField) -> ClassificationResult<ClassifiedField> {
        let declared = field.declared_type.as_str();

        if self.catalog.is_collection(declared) {
            let element = match field.element_type.as_deref() {
                Some(element) => element,
                None => {
                    return Err(ClassificationError::unsupported_list_element(&field.name, declared));
                }
            };

            if self.catalog.is_entity(element) {
                return Ok(ClassifiedField::new(&field.name, FieldKind::List, declared)
                    .with_link_target(element));
            }

            return match self.table.resolve_list_element(element) {
                Some(kind) => Ok(ClassifiedField::new(&field.name, kind, declared)
                    .with_element_nullable(field.element_nullable)),
                None => Err(ClassificationError::unsupported_list_element(&field.name, element)),
            };
        }

        // A generic argument on anything other than a known collection.
        if field.element_type.is_some() {
            return Err(ClassificationError::unsupported_scalar(
                &field.name,
                field.display_type(),
            ));
        }

        if self.catalog.is_entity(declared) {
            return Ok(ClassifiedField::new(&field.name, FieldKind::Object, declared)
                .with_link_target(declared));
        }

        self.table
            .resolve_scalar(declared)
            .map(|kind| ClassifiedField::new(&field.name, kind, declared))
            .ok_or_else(|| ClassificationError::unsupported_scalar(&field.name, declared))
    }
}

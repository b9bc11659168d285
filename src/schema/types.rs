//! Declared and classified model types
//!
//! `DeclaredField` / `DeclaredClass` are the input boundary: what the
//! class-model collaborator resolved from source declarations.
//! `ClassifiedField` / `CompiledClass` are the output boundary handed to
//! code emission.

use serde::{Deserialize, Serialize};

use super::kind::FieldKind;

/// Collection container used by the builders below.
pub const DEFAULT_LIST_TYPE: &str = "io.realm.RealmList";

/// Container type declared for backlink fields.
pub const BACKLINK_CONTAINER_TYPE: &str = "io.realm.RealmResults";

/// Origin of an inverse relation: the class and field holding the forward link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BacklinkTarget {
    /// Class declaring the forward link
    pub source_class: String,
    /// Forward link field on `source_class`
    pub source_field: String,
}

/// A field as declared in source, with annotations already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredField {
    /// Field name
    pub name: String,
    /// Declared type exactly as written (erased for generics)
    #[serde(rename = "type")]
    pub declared_type: String,
    /// Generic element type for collections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    /// Whether collection elements may be null
    #[serde(default)]
    pub element_nullable: bool,
    /// Backlink annotation and its target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlink: Option<BacklinkTarget>,
    /// Nullable annotation present
    #[serde(default)]
    pub nullable: bool,
    /// Primary-key annotation present
    #[serde(default)]
    pub primary_key: bool,
}

impl DeclaredField {
    /// Create a plain, non-null field
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            element_type: None,
            element_nullable: false,
            backlink: None,
            nullable: false,
            primary_key: false,
        }
    }

    /// Create a list field with the default container type
    pub fn list(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self::collection(name, DEFAULT_LIST_TYPE, element_type)
    }

    /// Create a collection field with an explicit container type
    pub fn collection(
        name: impl Into<String>,
        container: impl Into<String>,
        element_type: impl Into<String>,
    ) -> Self {
        Self {
            element_type: Some(element_type.into()),
            ..Self::new(name, container)
        }
    }

    /// Create a backlink field computed from `source_class.source_field`
    pub fn linking_objects(
        name: impl Into<String>,
        source_class: impl Into<String>,
        source_field: impl Into<String>,
    ) -> Self {
        let source_class = source_class.into();
        Self {
            element_type: Some(source_class.clone()),
            backlink: Some(BacklinkTarget {
                source_class,
                source_field: source_field.into(),
            }),
            ..Self::new(name, BACKLINK_CONTAINER_TYPE)
        }
    }

    /// Mark the field nullable
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark the field as primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Allow null list elements
    pub fn nullable_elements(mut self) -> Self {
        self.element_nullable = true;
        self
    }

    /// Type name reported in diagnostics: `Container<Element>` for collections.
    pub fn display_type(&self) -> String {
        match &self.element_type {
            Some(element) => format!("{}<{}>", self.declared_type, element),
            None => self.declared_type.clone(),
        }
    }
}

/// A persistent entity class as declared in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredClass {
    /// Fully-qualified class name
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<DeclaredField>,
}

impl DeclaredClass {
    pub fn new(name: impl Into<String>, fields: Vec<DeclaredField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Class name without its package.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Package portion of the name, empty for the default package.
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }
}

/// Classification of one declared field.
///
/// Produced once per field by the classifier and never modified after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedField {
    pub name: String,
    pub kind: FieldKind,
    pub nullable: bool,
    pub is_primary_key: bool,
    /// Declared source type (container type for collections)
    pub declared_type: String,
    /// Referenced entity class for `OBJECT` and `LIST` kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
    /// Origin of the relation for `BACKLINK` kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlink: Option<BacklinkTarget>,
    /// Whether primitive-list elements may be null
    pub element_nullable: bool,
}

impl ClassifiedField {
    /// Create a non-null, non-key classification with no link data.
    pub fn new(name: impl Into<String>, kind: FieldKind, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
            is_primary_key: false,
            declared_type: declared_type.into(),
            link_target: None,
            backlink: None,
            element_nullable: false,
        }
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_primary_key(mut self, is_primary_key: bool) -> Self {
        self.is_primary_key = is_primary_key;
        self
    }

    pub fn with_link_target(mut self, target: impl Into<String>) -> Self {
        self.link_target = Some(target.into());
        self
    }

    pub fn with_backlink(mut self, backlink: BacklinkTarget) -> Self {
        self.backlink = Some(backlink);
        self
    }

    pub fn with_element_nullable(mut self, element_nullable: bool) -> Self {
        self.element_nullable = element_nullable;
        self
    }
}

/// A class that passed classification and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledClass {
    /// Fully-qualified class name
    pub class_name: String,
    /// Generated proxy class name
    pub proxy_class_name: String,
    /// Generated proxy interface name
    pub proxy_interface_name: String,
    /// Classified fields in declaration order
    pub fields: Vec<ClassifiedField>,
}

impl CompiledClass {
    /// Returns the primary-key field, if any.
    pub fn primary_key(&self) -> Option<&ClassifiedField> {
        self.fields.iter().find(|f| f.is_primary_key)
    }

    pub fn field(&self, name: &str) -> Option<&ClassifiedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that are actually stored (everything but backlinks).
    pub fn persisted_fields(&self) -> impl Iterator<Item = &ClassifiedField> {
        self.fields.iter().filter(|f| !f.kind.is_backlink())
    }

    /// Fields computed from the opposite side of a relation.
    pub fn computed_fields(&self) -> impl Iterator<Item = &ClassifiedField> {
        self.fields.iter().filter(|f| f.kind.is_backlink())
    }
}

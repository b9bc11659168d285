//! Field-kind registry
//!
//! The closed set of storage field kinds understood by the storage engine.
//! Every kind carries:
//! - the storage tag the engine uses to identify it
//! - the in-memory representation required to hold a value of the kind
//! - its category (scalar, list, object reference, backlink)
//!
//! The registry is a plain `enum` plus a static listing, so it is complete
//! before `main` runs and can never be mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value types a stored field may be held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// 64-bit signed integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Boolean
    Boolean,
    /// UTF-8 string
    String,
    /// Timestamp
    Date,
    /// Opaque byte sequence
    Binary,
    /// Reference to another entity
    Object,
}

impl ValueType {
    /// Returns the value type name used by generated accessors.
    pub fn binding_type_name(&self) -> &'static str {
        match self {
            ValueType::Long => "Long",
            ValueType::Float => "Float",
            ValueType::Double => "Double",
            ValueType::Boolean => "Boolean",
            ValueType::String => "String",
            ValueType::Date => "Date",
            ValueType::Binary => "BinaryByteArray",
            ValueType::Object => "Object",
        }
    }
}

/// In-memory representation of a stored field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum Representation {
    /// A single value
    Value(ValueType),
    /// Ordered sequence of values of one element type
    Sequence(ValueType),
}

impl Representation {
    /// Returns the type name used by generated accessors.
    pub fn binding_type_name(&self) -> &'static str {
        match self {
            Representation::Value(v) => v.binding_type_name(),
            Representation::Sequence(_) => "List",
        }
    }

    /// Returns the element value type for sequences.
    pub fn element(&self) -> Option<ValueType> {
        match self {
            Representation::Value(_) => None,
            Representation::Sequence(v) => Some(*v),
        }
    }
}

/// Broad category of a field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindCategory {
    /// Single stored value
    Scalar,
    /// Forward reference to one entity
    ObjectRef,
    /// Homogeneous ordered list
    List,
    /// Inverse reference computed from the opposite side of a relation
    Backlink,
}

/// Storage field kinds.
///
/// Variant order is the registry order: it is what [`FieldKind::all`]
/// returns and what tag lookup scans, so the canonical kind for a shared
/// tag must come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKind {
    Integer,
    Float,
    Double,
    Boolean,
    String,
    Date,
    Binary,
    /// Mutable integer counter; shares the `INTEGER` storage tag
    MutableInteger,
    Object,
    /// List of entity references
    List,
    Backlink,
    IntegerList,
    BooleanList,
    StringList,
    BinaryList,
    DateList,
    FloatList,
    DoubleList,
}

const ALL_KINDS: [FieldKind; 18] = [
    FieldKind::Integer,
    FieldKind::Float,
    FieldKind::Double,
    FieldKind::Boolean,
    FieldKind::String,
    FieldKind::Date,
    FieldKind::Binary,
    FieldKind::MutableInteger,
    FieldKind::Object,
    FieldKind::List,
    FieldKind::Backlink,
    FieldKind::IntegerList,
    FieldKind::BooleanList,
    FieldKind::StringList,
    FieldKind::BinaryList,
    FieldKind::DateList,
    FieldKind::FloatList,
    FieldKind::DoubleList,
];

impl FieldKind {
    /// Returns every kind in registry order.
    ///
    /// The order is fixed at compile time and identical across runs.
    pub fn all() -> &'static [FieldKind] {
        &ALL_KINDS
    }

    /// Looks up the canonical kind for a storage tag.
    ///
    /// Tags shared by several kinds (`INTEGER`) resolve to the first kind in
    /// registry order.
    pub fn kind_of(tag: &str) -> Option<FieldKind> {
        ALL_KINDS.iter().copied().find(|k| k.storage_tag() == tag)
    }

    /// Returns every distinct storage tag in registry order.
    pub fn storage_tags() -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = Vec::with_capacity(ALL_KINDS.len());
        for kind in ALL_KINDS {
            if !tags.contains(&kind.storage_tag()) {
                tags.push(kind.storage_tag());
            }
        }
        tags
    }

    /// Returns the identifier the storage engine uses for this kind.
    pub fn storage_tag(&self) -> &'static str {
        match self {
            FieldKind::Integer | FieldKind::MutableInteger => "INTEGER",
            FieldKind::Float => "FLOAT",
            FieldKind::Double => "DOUBLE",
            FieldKind::Boolean => "BOOLEAN",
            FieldKind::String => "STRING",
            FieldKind::Date => "DATE",
            FieldKind::Binary => "BINARY",
            FieldKind::Object => "OBJECT",
            FieldKind::List => "LIST",
            FieldKind::Backlink => "LINKING_OBJECTS",
            FieldKind::IntegerList => "INTEGER_LIST",
            FieldKind::BooleanList => "BOOLEAN_LIST",
            FieldKind::StringList => "STRING_LIST",
            FieldKind::BinaryList => "BINARY_LIST",
            FieldKind::DateList => "DATE_LIST",
            FieldKind::FloatList => "FLOAT_LIST",
            FieldKind::DoubleList => "DOUBLE_LIST",
        }
    }

    /// Returns the kind name (unique per variant, unlike the storage tag).
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::MutableInteger => "MUTABLE_INTEGER",
            FieldKind::Backlink => "BACKLINK",
            other => other.storage_tag(),
        }
    }

    /// Returns the enum constant referenced by generated bindings.
    pub fn binding_name(&self) -> String {
        format!("RealmFieldType.{}", self.storage_tag())
    }

    /// Returns the in-memory representation of this kind.
    ///
    /// `None` only for [`FieldKind::Backlink`], which is derived from the
    /// opposite side of a relation and never stored.
    pub fn representation(&self) -> Option<Representation> {
        use Representation::{Sequence, Value};

        let repr = match self {
            FieldKind::Integer | FieldKind::MutableInteger => Value(ValueType::Long),
            FieldKind::Float => Value(ValueType::Float),
            FieldKind::Double => Value(ValueType::Double),
            FieldKind::Boolean => Value(ValueType::Boolean),
            FieldKind::String => Value(ValueType::String),
            FieldKind::Date => Value(ValueType::Date),
            FieldKind::Binary => Value(ValueType::Binary),
            FieldKind::Object => Value(ValueType::Object),
            FieldKind::List => Sequence(ValueType::Object),
            FieldKind::Backlink => return None,
            FieldKind::IntegerList => Sequence(ValueType::Long),
            FieldKind::BooleanList => Sequence(ValueType::Boolean),
            FieldKind::StringList => Sequence(ValueType::String),
            FieldKind::BinaryList => Sequence(ValueType::Binary),
            FieldKind::DateList => Sequence(ValueType::Date),
            FieldKind::FloatList => Sequence(ValueType::Float),
            FieldKind::DoubleList => Sequence(ValueType::Double),
        };
        Some(repr)
    }

    pub fn category(&self) -> KindCategory {
        match self {
            FieldKind::Object => KindCategory::ObjectRef,
            FieldKind::Backlink => KindCategory::Backlink,
            k if k.is_list() => KindCategory::List,
            _ => KindCategory::Scalar,
        }
    }

    /// True for the object list and the seven primitive lists.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            FieldKind::List
                | FieldKind::IntegerList
                | FieldKind::BooleanList
                | FieldKind::StringList
                | FieldKind::BinaryList
                | FieldKind::DateList
                | FieldKind::FloatList
                | FieldKind::DoubleList
        )
    }

    pub fn is_backlink(&self) -> bool {
        matches!(self, FieldKind::Backlink)
    }

    /// Whether a field of this kind may be marked primary key.
    pub fn is_primary_key_eligible(&self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::String)
    }

    /// Returns the list kind holding elements of this scalar kind.
    pub fn list_of(&self) -> Option<FieldKind> {
        match self {
            FieldKind::Integer => Some(FieldKind::IntegerList),
            FieldKind::Boolean => Some(FieldKind::BooleanList),
            FieldKind::String => Some(FieldKind::StringList),
            FieldKind::Binary => Some(FieldKind::BinaryList),
            FieldKind::Date => Some(FieldKind::DateList),
            FieldKind::Float => Some(FieldKind::FloatList),
            FieldKind::Double => Some(FieldKind::DoubleList),
            FieldKind::Object => Some(FieldKind::List),
            _ => None,
        }
    }

    /// Returns the element kind of a list kind.
    pub fn element_kind(&self) -> Option<FieldKind> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.list_of() == Some(*self))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

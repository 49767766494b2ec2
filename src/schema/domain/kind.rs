//! Field kinds: the structural shape a schema assigns to each field.

use super::FieldList;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Primitive value types a scalar field may declare.
///
/// The model itself stores any JSON scalar in a scalar slot; the declared
/// type is enforced by codecs when content crosses the byte boundary.
///
/// # Examples
///
/// ```
/// use clay::schema::ScalarType;
/// use serde_json::json;
///
/// let int = ScalarType::from_name("int").expect("primitive");
/// assert!(int.accepts(&json!(42)));
/// assert!(!int.accepts(&json!("42")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Only `null`.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A 32-bit signed integer.
    Int,
    /// A 64-bit signed integer.
    Long,
    /// A single-precision float.
    Float,
    /// A double-precision float.
    Double,
    /// Raw bytes, carried as a string in content.
    Bytes,
    /// A UTF-8 string.
    String,
}

impl ScalarType {
    /// Resolves a primitive type name.
    ///
    /// Returns `None` for names that are not primitives.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Null),
            "boolean" => Some(Self::Boolean),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "bytes" => Some(Self::Bytes),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns the primitive type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bytes => "bytes",
            Self::String => "string",
        }
    }

    /// Returns `true` if `value` is a valid instance of this type.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Null => value.is_null(),
            Self::Boolean => value.is_boolean(),
            Self::Int => value
                .as_i64()
                .is_some_and(|number| i32::try_from(number).is_ok()),
            Self::Long => value.as_i64().is_some(),
            Self::Float | Self::Double => value.is_number(),
            Self::Bytes | Self::String => value.is_string(),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural kind of a field.
///
/// Kinds nest: an array element or a matrix cell is itself described by an
/// [`ItemKind`], and a record carries its own ordered field list.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A single primitive value.
    Scalar(ScalarType),
    /// A nested record with its own named fields.
    Record(Arc<FieldList>),
    /// An ordered sequence of elements of the inner kind.
    Array(Box<ItemKind>),
    /// A sequence of rows, each row an array of the inner kind.
    Matrix(Box<ItemKind>),
}

impl FieldKind {
    /// Builds an array of non-nullable `element`s.
    #[must_use]
    pub fn array_of(element: Self) -> Self {
        Self::Array(Box::new(ItemKind::new(element)))
    }

    /// Builds a matrix of non-nullable `cell`s.
    #[must_use]
    pub fn matrix_of(cell: Self) -> Self {
        Self::Matrix(Box::new(ItemKind::new(cell)))
    }

    /// Returns a short label naming the kind, used in error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Record(_) => "record",
            Self::Array(_) => "array",
            Self::Matrix(_) => "matrix",
        }
    }

    /// Returns `true` for records, arrays and matrices.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        !matches!(self, Self::Scalar(_))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            Self::Record(fields) => write!(f, "record({} fields)", fields.len()),
            Self::Array(item) => write!(f, "array<{item}>"),
            Self::Matrix(item) => write!(f, "matrix<{item}>"),
        }
    }
}

/// The kind of an array element or matrix cell.
///
/// Items declared as `["null", T]` keep that nullability here, since an
/// item has no [`FieldSpec`](super::FieldSpec) of its own to carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemKind {
    kind: FieldKind,
    nullable: bool,
}

impl ItemKind {
    /// Creates a non-nullable item of `kind`.
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    /// Marks the item as accepting `null`.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Returns the item kind.
    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Returns `true` if the item accepts `null`.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "null|{}", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

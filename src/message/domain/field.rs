//! Runtime field instances built from field kinds.

use super::{ArrayField, MatrixField, RecordField};
use crate::message::error::ModelError;
use crate::schema::domain::{FieldKind, FieldSpec};
use serde_json::Value;
use std::sync::Arc;

/// A field slot owned by a message, a record, or a container element.
///
/// Scalars hold their value inline. Containers carry an explicit
/// unset/set state, so an absent container and an empty one are different
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A primitive value, `Value::Null` when unassigned.
    Scalar(Value),
    /// A nested record.
    Record(RecordField),
    /// A sequence of elements.
    Array(ArrayField),
    /// A sequence of array rows.
    Matrix(MatrixField),
}

impl Field {
    /// Instantiates a field from its declaration, applying any default.
    #[must_use]
    pub fn from_spec(spec: &FieldSpec) -> Self {
        Self::from_kind(spec.kind(), spec.default())
    }

    /// Instantiates a field of `kind`.
    ///
    /// Scalars start at `default` (or `null`); containers always start
    /// unset.
    #[must_use]
    pub fn from_kind(kind: &FieldKind, default: Option<&Value>) -> Self {
        match kind {
            FieldKind::Scalar(_) => Self::Scalar(default.cloned().unwrap_or(Value::Null)),
            FieldKind::Record(fields) => Self::Record(RecordField::new(Arc::clone(fields))),
            FieldKind::Array(item) => Self::Array(ArrayField::new(item.kind().clone())),
            FieldKind::Matrix(item) => Self::Matrix(MatrixField::new(item.kind().clone())),
        }
    }

    /// Instantiates a field of `kind` and fills it with `content`.
    ///
    /// # Errors
    ///
    /// Returns the error [`Field::set_content`] reports for `content`.
    pub fn with_content(kind: &FieldKind, content: &Value) -> Result<Self, ModelError> {
        let mut field = Self::from_kind(kind, None);
        field.set_content(content)?;
        Ok(field)
    }

    /// Returns the field's content as plain JSON.
    #[must_use]
    pub fn content(&self) -> Value {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::Record(record) => record.content(),
            Self::Array(array) => array.content(),
            Self::Matrix(matrix) => matrix.content(),
        }
    }

    /// Replaces the field's content.
    ///
    /// Scalars accept any JSON scalar. Containers apply their own content
    /// rules and are left untouched when the value is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidContent`] when a scalar is given an
    /// array or object, or whatever the container's own `set_content`
    /// reports.
    pub fn set_content(&mut self, content: &Value) -> Result<(), ModelError> {
        match self {
            Self::Scalar(value) => {
                ensure_scalar(content)?;
                value.clone_from(content);
                Ok(())
            }
            Self::Record(record) => record.set_content(content),
            Self::Array(array) => array.set_content(content),
            Self::Matrix(matrix) => matrix.set_content(content),
        }
    }

    /// Returns the kind label of this field.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Record(_) => "record",
            Self::Array(_) => "array",
            Self::Matrix(_) => "matrix",
        }
    }

    /// Returns `true` for records, arrays and matrices.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        !matches!(self, Self::Scalar(_))
    }

    /// Returns the scalar value, if this is a scalar.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the record, if this is a record.
    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordField> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the record mutably, if this is a record.
    pub const fn as_record_mut(&mut self) -> Option<&mut RecordField> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the array, if this is an array.
    #[must_use]
    pub const fn as_array(&self) -> Option<&ArrayField> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the array mutably, if this is an array.
    pub const fn as_array_mut(&mut self) -> Option<&mut ArrayField> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the matrix, if this is a matrix.
    #[must_use]
    pub const fn as_matrix(&self) -> Option<&MatrixField> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    /// Returns the matrix mutably, if this is a matrix.
    pub const fn as_matrix_mut(&mut self) -> Option<&mut MatrixField> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }
}

/// Rejects arrays and objects where a scalar is required.
pub(crate) fn ensure_scalar(value: &Value) -> Result<(), ModelError> {
    if value.is_array() || value.is_object() {
        return Err(ModelError::invalid_content("scalar", value));
    }
    Ok(())
}

//! Matrix fields: sequences of array rows.

use super::ArrayField;
use crate::message::error::ModelError;
use crate::schema::domain::FieldKind;
use serde_json::Value;
use std::slice;

/// A sequence of rows, each row an [`ArrayField`] of the cell kind.
///
/// The matrix and each of its rows carry their own unset state. A row added
/// with [`MatrixField::add`] starts unset, exactly like a freshly created
/// array; [`MatrixField::add_with`] appends a row that is already populated.
///
/// # Examples
///
/// ```
/// use clay::message::domain::MatrixField;
/// use clay::schema::{FieldKind, ScalarType};
/// use serde_json::{Value, json};
///
/// let mut grid = MatrixField::new(FieldKind::Scalar(ScalarType::String));
/// grid.add();
/// assert_eq!(grid.row(0).expect("row").content(), Value::Null);
///
/// grid.row_mut(0).expect("row").add_with(&json!("test1")).expect("scalar");
/// grid.add_with(&json!(["test_3", "test_4"])).expect("row");
/// assert_eq!(grid.content(), json!([["test1"], ["test_3", "test_4"]]));
///
/// assert!(grid.set_content(&json!(["flat", "list"])).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MatrixField {
    element: FieldKind,
    rows: Option<Vec<ArrayField>>,
}

impl MatrixField {
    /// Creates an unset matrix whose cells are `element`s.
    #[must_use]
    pub const fn new(element: FieldKind) -> Self {
        Self {
            element,
            rows: None,
        }
    }

    /// Returns the cell kind.
    #[must_use]
    pub const fn element_kind(&self) -> &FieldKind {
        &self.element
    }

    /// Returns `true` once the matrix holds a sequence of rows.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.rows.is_some()
    }

    /// Returns the content: `null` when unset, otherwise one entry per row.
    #[must_use]
    pub fn content(&self) -> Value {
        self.rows.as_ref().map_or(Value::Null, |rows| {
            Value::Array(rows.iter().map(ArrayField::content).collect())
        })
    }

    /// Replaces the matrix content.
    ///
    /// `null` unsets the matrix. A sequence sets it; every entry must itself
    /// be a sequence (or `null` for an unset row).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidContent`] if the value, or any row, is
    /// neither `null` nor a sequence, or any error a cell reports. The
    /// matrix is unchanged on error.
    pub fn set_content(&mut self, content: &Value) -> Result<(), ModelError> {
        match content {
            Value::Null => {
                self.rows = None;
                Ok(())
            }
            Value::Array(values) => {
                let rows = values
                    .iter()
                    .map(|value| self.row_from(value))
                    .collect::<Result<Vec<_>, _>>()?;
                self.rows = Some(rows);
                Ok(())
            }
            other => Err(ModelError::invalid_content("array of arrays", other)),
        }
    }

    /// Unsets the matrix.
    pub fn clear(&mut self) {
        self.rows = None;
    }

    /// Appends an unset row. An unset matrix becomes an empty one first.
    pub fn add(&mut self) {
        let row = ArrayField::new(self.element.clone());
        self.rows.get_or_insert_with(Vec::new).push(row);
    }

    /// Appends a row populated from `content`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidContent`] unless `content` is a sequence
    /// (or `null`), or any error a cell reports. Nothing is appended on
    /// error.
    pub fn add_with(&mut self, content: &Value) -> Result<(), ModelError> {
        let row = self.row_from(content)?;
        self.rows.get_or_insert_with(Vec::new).push(row);
        Ok(())
    }

    /// Returns the number of rows.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ContainerNotInitialized`] while unset.
    pub fn len(&self) -> Result<usize, ModelError> {
        Ok(self.rows("measure")?.len())
    }

    /// Returns `true` if the set matrix has no rows.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ContainerNotInitialized`] while unset.
    pub fn is_empty(&self) -> Result<bool, ModelError> {
        Ok(self.rows("measure")?.is_empty())
    }

    /// Returns the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ContainerNotInitialized`] while unset and
    /// [`ModelError::IndexOutOfRange`] past the end.
    pub fn row(&self, index: usize) -> Result<&ArrayField, ModelError> {
        let rows = self.rows("index")?;
        rows.get(index).ok_or(ModelError::IndexOutOfRange {
            index,
            len: rows.len(),
        })
    }

    /// Returns the row at `index` mutably.
    ///
    /// # Errors
    ///
    /// As [`MatrixField::row`].
    pub fn row_mut(&mut self, index: usize) -> Result<&mut ArrayField, ModelError> {
        let rows = self.rows_mut("index")?;
        let len = rows.len();
        rows.get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })
    }

    /// Replaces the row at `index` with one built from `content`.
    ///
    /// # Errors
    ///
    /// As [`MatrixField::row`], or the error [`MatrixField::add_with`]
    /// would report for `content`.
    pub fn set(&mut self, index: usize, content: &Value) -> Result<(), ModelError> {
        self.row(index)?;
        let row = self.row_from(content)?;
        *self.row_mut(index)? = row;
        Ok(())
    }

    /// Removes and returns the row at `index`.
    ///
    /// # Errors
    ///
    /// As [`MatrixField::row`].
    pub fn remove(&mut self, index: usize) -> Result<ArrayField, ModelError> {
        let rows = self.rows_mut("delete from")?;
        if index >= rows.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: rows.len(),
            });
        }
        Ok(rows.remove(index))
    }

    /// Iterates over the rows.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ContainerNotInitialized`] while unset.
    pub fn iter(&self) -> Result<slice::Iter<'_, ArrayField>, ModelError> {
        Ok(self.rows("iterate")?.iter())
    }

    fn row_from(&self, content: &Value) -> Result<ArrayField, ModelError> {
        if !(content.is_array() || content.is_null()) {
            return Err(ModelError::invalid_content("array of arrays", content));
        }
        let mut row = ArrayField::new(self.element.clone());
        row.set_content(content)?;
        Ok(row)
    }

    fn rows(&self, operation: &'static str) -> Result<&Vec<ArrayField>, ModelError> {
        self.rows
            .as_ref()
            .ok_or(ModelError::not_initialized(operation))
    }

    fn rows_mut(&mut self, operation: &'static str) -> Result<&mut Vec<ArrayField>, ModelError> {
        self.rows
            .as_mut()
            .ok_or(ModelError::not_initialized(operation))
    }
}

impl PartialEq for MatrixField {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

//! Record fields: nested named fields with an explicit unset state.

use super::field::ensure_scalar;
use super::table::FieldTable;
use super::{ArrayField, Field, MatrixField};
use crate::message::error::ModelError;
use crate::schema::domain::FieldList;
use serde_json::Value;
use std::sync::Arc;

/// A nested record.
///
/// A record is either unset (its content is `null`) or set, in which case
/// every declared sub-field is present. Reading a sub-field of an unset
/// record fails with [`ModelError::AttributeNotAvailable`]; writing one, or
/// asking for mutable access, first sets the record with every sub-field at
/// its default.
///
/// # Examples
///
/// ```
/// use clay::message::domain::RecordField;
/// use clay::message::error::ModelError;
/// use clay::schema::{FieldKind, FieldList, FieldSpec, ScalarType};
/// use serde_json::{Value, json};
/// use std::sync::Arc;
///
/// let layout = FieldList::new(vec![
///     FieldSpec::new("field_1", FieldKind::Scalar(ScalarType::String)),
///     FieldSpec::new("field_2", FieldKind::Scalar(ScalarType::String)),
/// ])
/// .expect("unique names");
/// let mut record = RecordField::new(Arc::new(layout));
///
/// assert_eq!(record.content(), Value::Null);
/// assert!(matches!(record.get("field_1"), Err(ModelError::AttributeNotAvailable(_))));
///
/// record.set("field_1", "ddd").expect("declared field");
/// assert_eq!(record.content(), json!({"field_1": "ddd", "field_2": null}));
/// ```
#[derive(Debug, Clone)]
pub struct RecordField {
    layout: Arc<FieldList>,
    content: Option<FieldTable>,
}

impl RecordField {
    /// Creates an unset record with the given sub-fields.
    #[must_use]
    pub const fn new(layout: Arc<FieldList>) -> Self {
        Self {
            layout,
            content: None,
        }
    }

    /// Iterates over the declared sub-field names in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.layout.names()
    }

    /// Returns `true` once the record holds content.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.content.is_some()
    }

    /// Returns the record content: `null` when unset, otherwise an object
    /// with every sub-field.
    #[must_use]
    pub fn content(&self) -> Value {
        self.content
            .as_ref()
            .map_or(Value::Null, |table| Value::Object(table.content()))
    }

    /// Replaces the record content.
    ///
    /// `null` unsets the record. An object sets it: sub-fields named in the
    /// object take its values and the rest take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] if the object names an
    /// undeclared sub-field, [`ModelError::InvalidContent`] if the value is
    /// neither `null` nor an object, or any error a nested field reports.
    /// The record is unchanged on error.
    pub fn set_content(&mut self, content: &Value) -> Result<(), ModelError> {
        match content {
            Value::Null => {
                self.content = None;
                Ok(())
            }
            Value::Object(values) => {
                let mut table = FieldTable::new(Arc::clone(&self.layout));
                table.set_content(values)?;
                self.content = Some(table);
                Ok(())
            }
            other => Err(ModelError::invalid_content("object", other)),
        }
    }

    /// Unsets the record.
    pub fn clear(&mut self) {
        self.content = None;
    }

    /// Returns a sub-field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] for an undeclared name and
    /// [`ModelError::AttributeNotAvailable`] while the record is unset.
    pub fn field(&self, name: &str) -> Result<&Field, ModelError> {
        self.table(name)?.field(name)
    }

    /// Returns a sub-field mutably, setting the record first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] for an undeclared name.
    pub fn field_mut(&mut self, name: &str) -> Result<&mut Field, ModelError> {
        self.table_mut(name)?.field_mut(name)
    }

    /// Reads a scalar sub-field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AttributeNotAvailable`] while unset,
    /// [`ModelError::UnknownField`] for an undeclared name, and
    /// [`ModelError::KindMismatch`] for a composite sub-field.
    pub fn get(&self, name: &str) -> Result<&Value, ModelError> {
        self.table(name)?.scalar(name)
    }

    /// Writes a scalar sub-field, setting the record first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] for an undeclared name,
    /// [`ModelError::CompositeAssignment`] for a composite sub-field, and
    /// [`ModelError::InvalidContent`] for a structured value. The record is
    /// unchanged on error.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ModelError> {
        let content = value.into();
        let spec = self
            .layout
            .get(name)
            .ok_or_else(|| ModelError::UnknownField(name.to_owned()))?;
        if spec.kind().is_container() {
            return Err(ModelError::CompositeAssignment(name.to_owned()));
        }
        ensure_scalar(&content)?;
        self.table_mut(name)?.assign(name, content)
    }

    /// Returns a nested record sub-field.
    ///
    /// # Errors
    ///
    /// As [`RecordField::field`], plus [`ModelError::KindMismatch`].
    pub fn record(&self, name: &str) -> Result<&Self, ModelError> {
        self.table(name)?.record(name)
    }

    /// Returns a nested record sub-field mutably.
    ///
    /// # Errors
    ///
    /// As [`RecordField::field_mut`], plus [`ModelError::KindMismatch`].
    pub fn record_mut(&mut self, name: &str) -> Result<&mut Self, ModelError> {
        self.ensure_kind(name, "record")?;
        self.table_mut(name)?.record_mut(name)
    }

    /// Returns an array sub-field.
    ///
    /// # Errors
    ///
    /// As [`RecordField::field`], plus [`ModelError::KindMismatch`].
    pub fn array(&self, name: &str) -> Result<&ArrayField, ModelError> {
        self.table(name)?.array(name)
    }

    /// Returns an array sub-field mutably.
    ///
    /// # Errors
    ///
    /// As [`RecordField::field_mut`], plus [`ModelError::KindMismatch`].
    pub fn array_mut(&mut self, name: &str) -> Result<&mut ArrayField, ModelError> {
        self.ensure_kind(name, "array")?;
        self.table_mut(name)?.array_mut(name)
    }

    /// Returns a matrix sub-field.
    ///
    /// # Errors
    ///
    /// As [`RecordField::field`], plus [`ModelError::KindMismatch`].
    pub fn matrix(&self, name: &str) -> Result<&MatrixField, ModelError> {
        self.table(name)?.matrix(name)
    }

    /// Returns a matrix sub-field mutably.
    ///
    /// # Errors
    ///
    /// As [`RecordField::field_mut`], plus [`ModelError::KindMismatch`].
    pub fn matrix_mut(&mut self, name: &str) -> Result<&mut MatrixField, ModelError> {
        self.ensure_kind(name, "matrix")?;
        self.table_mut(name)?.matrix_mut(name)
    }

    fn table(&self, name: &str) -> Result<&FieldTable, ModelError> {
        if !self.layout.contains(name) {
            return Err(ModelError::UnknownField(name.to_owned()));
        }
        self.content
            .as_ref()
            .ok_or_else(|| ModelError::AttributeNotAvailable(name.to_owned()))
    }

    /// Checks a sub-field's declared kind without touching the content.
    fn ensure_kind(&self, name: &str, expected: &'static str) -> Result<(), ModelError> {
        let spec = self
            .layout
            .get(name)
            .ok_or_else(|| ModelError::UnknownField(name.to_owned()))?;
        let actual = spec.kind().label();
        if actual == expected {
            Ok(())
        } else {
            Err(ModelError::kind_mismatch(name, expected, actual))
        }
    }

    /// Unset records become set, with defaults, on first write.
    fn table_mut(&mut self, name: &str) -> Result<&mut FieldTable, ModelError> {
        if !self.layout.contains(name) {
            return Err(ModelError::UnknownField(name.to_owned()));
        }
        let layout = &self.layout;
        Ok(self
            .content
            .get_or_insert_with(|| FieldTable::new(Arc::clone(layout))))
    }
}

impl PartialEq for RecordField {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

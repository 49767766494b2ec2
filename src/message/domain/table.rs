//! Named field slots shared by messages and records.

use super::field::ensure_scalar;
use super::{ArrayField, Field, MatrixField, RecordField};
use crate::message::error::ModelError;
use crate::schema::domain::{FieldList, FieldSpec};
use serde_json::{Map, Value};
use std::sync::Arc;

/// One slot per declared field, in declaration order.
///
/// The layout is fixed at construction: slots are never added or removed,
/// only replaced. Equality compares slot contents only.
#[derive(Debug, Clone)]
pub(crate) struct FieldTable {
    layout: Arc<FieldList>,
    slots: Vec<Field>,
}

impl FieldTable {
    /// Creates a table with every field at its default.
    pub(crate) fn new(layout: Arc<FieldList>) -> Self {
        let slots = layout.iter().map(Field::from_spec).collect();
        Self { layout, slots }
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.layout.names()
    }

    pub(crate) fn field(&self, name: &str) -> Result<&Field, ModelError> {
        let (position, _) = self.locate(name)?;
        self.slots
            .get(position)
            .ok_or_else(|| ModelError::UnknownField(name.to_owned()))
    }

    pub(crate) fn field_mut(&mut self, name: &str) -> Result<&mut Field, ModelError> {
        let (position, _) = self.locate(name)?;
        self.slots
            .get_mut(position)
            .ok_or_else(|| ModelError::UnknownField(name.to_owned()))
    }

    pub(crate) fn scalar(&self, name: &str) -> Result<&Value, ModelError> {
        let field = self.field(name)?;
        field
            .as_scalar()
            .ok_or_else(|| ModelError::kind_mismatch(name, "scalar", field.kind_label()))
    }

    /// Assigns a scalar field. Composite fields are rejected.
    pub(crate) fn assign(&mut self, name: &str, value: Value) -> Result<(), ModelError> {
        Self::check_assignable(self.field(name)?, name, &value)?;
        *self.field_mut(name)? = Field::Scalar(value);
        Ok(())
    }

    /// Checks an assignment without performing it.
    pub(crate) fn check_assignable(
        field: &Field,
        name: &str,
        value: &Value,
    ) -> Result<(), ModelError> {
        if field.is_composite() {
            return Err(ModelError::CompositeAssignment(name.to_owned()));
        }
        ensure_scalar(value)
    }

    pub(crate) fn record(&self, name: &str) -> Result<&RecordField, ModelError> {
        let field = self.field(name)?;
        field
            .as_record()
            .ok_or_else(|| ModelError::kind_mismatch(name, "record", field.kind_label()))
    }

    pub(crate) fn record_mut(&mut self, name: &str) -> Result<&mut RecordField, ModelError> {
        let field = self.field_mut(name)?;
        let actual = field.kind_label();
        field
            .as_record_mut()
            .ok_or_else(|| ModelError::kind_mismatch(name, "record", actual))
    }

    pub(crate) fn array(&self, name: &str) -> Result<&ArrayField, ModelError> {
        let field = self.field(name)?;
        field
            .as_array()
            .ok_or_else(|| ModelError::kind_mismatch(name, "array", field.kind_label()))
    }

    pub(crate) fn array_mut(&mut self, name: &str) -> Result<&mut ArrayField, ModelError> {
        let field = self.field_mut(name)?;
        let actual = field.kind_label();
        field
            .as_array_mut()
            .ok_or_else(|| ModelError::kind_mismatch(name, "array", actual))
    }

    pub(crate) fn matrix(&self, name: &str) -> Result<&MatrixField, ModelError> {
        let field = self.field(name)?;
        field
            .as_matrix()
            .ok_or_else(|| ModelError::kind_mismatch(name, "matrix", field.kind_label()))
    }

    pub(crate) fn matrix_mut(&mut self, name: &str) -> Result<&mut MatrixField, ModelError> {
        let field = self.field_mut(name)?;
        let actual = field.kind_label();
        field
            .as_matrix_mut()
            .ok_or_else(|| ModelError::kind_mismatch(name, "matrix", actual))
    }

    /// Returns every field's content keyed by name, in declaration order.
    pub(crate) fn content(&self) -> Map<String, Value> {
        self.names()
            .zip(&self.slots)
            .map(|(name, field)| (name.to_owned(), field.content()))
            .collect()
    }

    /// Replaces the fields named in `content`, leaving the others as they
    /// are.
    ///
    /// Every key is checked, and every replacement built, before any slot
    /// changes, so a rejected call leaves the table untouched.
    pub(crate) fn set_content(&mut self, content: &Map<String, Value>) -> Result<(), ModelError> {
        for key in content.keys() {
            self.locate(key)?;
        }

        let mut staged = Vec::with_capacity(content.len());
        for (key, value) in content {
            let (position, spec) = self.locate(key)?;
            staged.push((position, Field::with_content(spec.kind(), value)?));
        }

        for (position, field) in staged {
            if let Some(slot) = self.slots.get_mut(position) {
                *slot = field;
            }
        }
        Ok(())
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.layout.contains(name)
    }

    fn locate(&self, name: &str) -> Result<(usize, &FieldSpec), ModelError> {
        self.layout
            .lookup(name)
            .ok_or_else(|| ModelError::UnknownField(name.to_owned()))
    }
}

impl PartialEq for FieldTable {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

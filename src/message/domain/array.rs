//! Array fields: ordered element sequences with an explicit unset state.

use super::Field;
use crate::message::error::ModelError;
use crate::schema::domain::FieldKind;
use serde_json::Value;
use std::slice;

/// A sequence of elements of one kind.
///
/// An array is either unset (content `null`) or set to a possibly empty
/// sequence. Length, index and delete operations on an unset array fail
/// with [`ModelError::ContainerNotInitialized`]; they never pretend the
/// array is empty. Elements are appended only through [`ArrayField::add`]
/// and [`ArrayField::add_with`], which set an unset array first.
///
/// # Examples
///
/// ```
/// use clay::message::domain::ArrayField;
/// use clay::schema::{FieldKind, ScalarType};
/// use serde_json::{Value, json};
///
/// let mut tags = ArrayField::new(FieldKind::Scalar(ScalarType::String));
/// assert!(tags.len().is_err());
///
/// tags.add();
/// tags.set(0, &json!("ccc")).expect("index in range");
/// tags.add_with(&json!("ddd")).expect("scalar element");
/// assert_eq!(tags.content(), json!(["ccc", "ddd"]));
///
/// tags.remove(1).expect("index in range");
/// assert_eq!(tags.len().expect("set"), 1);
///
/// tags.set_content(&Value::Null).expect("null unsets");
/// assert!(tags.len().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ArrayField {
    element: FieldKind,
    items: Option<Vec<Field>>,
}

impl ArrayField {
    /// Creates an unset array of `element`s.
    #[must_use]
    pub const fn new(element: FieldKind) -> Self {
        Self {
            element,
            items: None,
        }
    }

    /// Returns the element kind.
    #[must_use]
    pub const fn element_kind(&self) -> &FieldKind {
        &self.element
    }

    /// Returns `true` once the array holds a sequence.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.items.is_some()
    }

    /// Returns the content: `null` when unset, otherwise the elements'
    /// content in order.
    #[must_use]
    pub fn content(&self) -> Value {
        self.items.as_ref().map_or(Value::Null, |items| {
            Value::Array(items.iter().map(Field::content).collect())
        })
    }

    /// Replaces the array content.
    ///
    /// `null` unsets the array. A sequence sets it, each element validated
    /// against the element kind.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidContent`] if the value is neither `null`
    /// nor a sequence, or any error an element reports (for example
    /// [`ModelError::UnknownField`] for a record element with an undeclared
    /// key). The array is unchanged on error.
    pub fn set_content(&mut self, content: &Value) -> Result<(), ModelError> {
        match content {
            Value::Null => {
                self.items = None;
                Ok(())
            }
            Value::Array(values) => {
                let items = values
                    .iter()
                    .map(|value| self.element_from(value))
                    .collect::<Result<Vec<_>, _>>()?;
                self.items = Some(items);
                Ok(())
            }
            other => Err(ModelError::invalid_content("array", other)),
        }
    }

    /// Unsets the array.
    pub fn clear(&mut self) {
        self.items = None;
    }

    /// Appends a default element: `null` for scalars, an unset container
    /// otherwise. An unset array becomes an empty one first.
    pub fn add(&mut self) {
        let element = Field::from_kind(&self.element, None);
        self.items.get_or_insert_with(Vec::new).push(element);
    }

    /// Appends an element built from `content`.
    ///
    /// # Errors
    ///
    /// Returns the error the element kind reports for `content`; nothing is
    /// appended on error.
    pub fn add_with(&mut self, content: &Value) -> Result<(), ModelError> {
        let element = self.element_from(content)?;
        self.items.get_or_insert_with(Vec::new).push(element);
        Ok(())
    }

    /// Returns the number of elements.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ContainerNotInitialized`] while unset.
    pub fn len(&self) -> Result<usize, ModelError> {
        Ok(self.items("measure")?.len())
    }

    /// Returns `true` if the set array has no elements.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ContainerNotInitialized`] while unset.
    pub fn is_empty(&self) -> Result<bool, ModelError> {
        Ok(self.items("measure")?.is_empty())
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ContainerNotInitialized`] while unset and
    /// [`ModelError::IndexOutOfRange`] past the end.
    pub fn get(&self, index: usize) -> Result<&Field, ModelError> {
        let items = self.items("index")?;
        items.get(index).ok_or(ModelError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// As [`ArrayField::get`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Field, ModelError> {
        let items = self.items_mut("index")?;
        let len = items.len();
        items
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index` with one built from `content`.
    ///
    /// # Errors
    ///
    /// As [`ArrayField::get`], or the error the element kind reports for
    /// `content`.
    pub fn set(&mut self, index: usize, content: &Value) -> Result<(), ModelError> {
        self.get(index)?;
        let element = self.element_from(content)?;
        *self.get_mut(index)? = element;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one.
    ///
    /// # Errors
    ///
    /// As [`ArrayField::get`].
    pub fn remove(&mut self, index: usize) -> Result<Field, ModelError> {
        let items = self.items_mut("delete from")?;
        if index >= items.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        Ok(items.remove(index))
    }

    /// Iterates over the elements.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ContainerNotInitialized`] while unset.
    pub fn iter(&self) -> Result<slice::Iter<'_, Field>, ModelError> {
        Ok(self.items("iterate")?.iter())
    }

    fn element_from(&self, content: &Value) -> Result<Field, ModelError> {
        Field::with_content(&self.element, content)
    }

    fn items(&self, operation: &'static str) -> Result<&Vec<Field>, ModelError> {
        self.items
            .as_ref()
            .ok_or(ModelError::not_initialized(operation))
    }

    fn items_mut(&mut self, operation: &'static str) -> Result<&mut Vec<Field>, ModelError> {
        self.items
            .as_mut()
            .ok_or(ModelError::not_initialized(operation))
    }
}

impl PartialEq for ArrayField {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

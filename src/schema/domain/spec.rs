//! Field specifications and ordered field lists.

use super::FieldKind;
use crate::schema::error::SchemaError;
use serde_json::Value;
use std::collections::HashMap;
use std::slice;

/// Declaration of one named field.
///
/// # Examples
///
/// ```
/// use clay::schema::{FieldKind, FieldSpec, ScalarType};
/// use serde_json::json;
///
/// let spec = FieldSpec::new("valid", FieldKind::Scalar(ScalarType::Boolean))
///     .with_default(json!(true));
/// assert_eq!(spec.name(), "valid");
/// assert_eq!(spec.default(), Some(&json!(true)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    nullable: bool,
    default: Option<Value>,
}

impl FieldSpec {
    /// Creates a non-nullable field without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
            default: None,
        }
    }

    /// Marks the field as accepting `null` in addition to its kind.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Sets the value a freshly created field starts with.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field kind.
    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Returns `true` if the field accepts `null`.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the declared default, if any.
    #[must_use]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// An ordered list of uniquely named fields.
///
/// Both message schemas and nested records are described by a field list.
/// Declaration order is preserved and a name index is built once at
/// construction so lookups do not scan the list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldList {
    specs: Vec<FieldSpec>,
    positions: HashMap<String, usize>,
}

impl FieldList {
    /// Builds a field list, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] if two specs share a name.
    pub fn new(specs: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let mut positions = HashMap::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            if positions.insert(spec.name().to_owned(), position).is_some() {
                return Err(SchemaError::DuplicateField(spec.name().to_owned()));
            }
        }
        Ok(Self { specs, positions })
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if the list declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterates over the specs in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, FieldSpec> {
        self.specs.iter()
    }

    /// Iterates over the field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(FieldSpec::name)
    }

    /// Returns `true` if a field with this name is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Looks up a spec by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.lookup(name).map(|(_, spec)| spec)
    }

    /// Looks up a spec and its declaration position by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<(usize, &FieldSpec)> {
        let position = *self.positions.get(name)?;
        self.specs.get(position).map(|spec| (position, spec))
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FieldSpec;
    type IntoIter = slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

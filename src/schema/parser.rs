//! Parser for Avro-like schema descriptions.
//!
//! A description is a JSON record schema:
//!
//! ```json
//! {
//!   "type": "record",
//!   "name": "TEST",
//!   "namespace": "TEST_DOMAIN",
//!   "fields": [
//!     {"name": "id", "type": ["null", "int"]},
//!     {"name": "tags", "type": {"type": "array", "items": "string"}}
//!   ]
//! }
//! ```
//!
//! Primitive names map to scalar kinds, nested `record` types to record
//! kinds, and `array` types to array kinds. An array whose items are
//! themselves an array (optionally nullable) is a matrix. The only union
//! understood is a nullable one, `["null", T]`, in either order; on array
//! items and matrix cells it marks the item as accepting `null`.

use crate::schema::{
    domain::{
        FieldKind, FieldList, FieldSpec, ItemKind, ScalarType, SchemaDefinition,
        SchemaFingerprint,
    },
    error::SchemaError,
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Parses one schema description into a definition.
///
/// # Errors
///
/// Returns a [`SchemaError`] describing the first structural problem found:
/// a missing name, a malformed field list, or a field kind the engine does
/// not recognise.
///
/// # Examples
///
/// ```
/// use clay::schema::{FieldKind, parser::parse_definition};
/// use serde_json::json;
///
/// let definition = parse_definition(&json!({
///     "name": "GRID",
///     "fields": [{
///         "name": "cells",
///         "type": {"type": "array", "items": {"type": "array", "items": "int"}}
///     }]
/// }))
/// .expect("valid schema");
///
/// let cells = definition.fields().get("cells").expect("declared");
/// assert!(matches!(cells.kind(), FieldKind::Matrix(_)));
/// ```
pub fn parse_definition(description: &Value) -> Result<SchemaDefinition, SchemaError> {
    let object = description.as_object().ok_or(SchemaError::NotAnObject)?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or(SchemaError::MissingName)?;

    if let Some(declared) = object.get("type")
        && declared.as_str() != Some("record")
    {
        return Err(SchemaError::NotARecord(name.to_owned()));
    }

    let domain = match object.get("namespace") {
        None => "",
        Some(Value::String(namespace)) => namespace.as_str(),
        Some(_) => return Err(SchemaError::InvalidNamespace(name.to_owned())),
    };

    let fields = parse_field_list(name, object.get("fields"))?;
    Ok(SchemaDefinition::new(
        name,
        domain,
        fields,
        SchemaFingerprint::of(description),
    ))
}

fn parse_field_list(owner: &str, fields: Option<&Value>) -> Result<FieldList, SchemaError> {
    let entries = fields
        .and_then(Value::as_array)
        .ok_or_else(|| SchemaError::malformed_fields(owner))?;
    let specs = entries
        .iter()
        .map(|entry| parse_field(owner, entry))
        .collect::<Result<Vec<_>, _>>()?;
    FieldList::new(specs)
}

fn parse_field(owner: &str, entry: &Value) -> Result<FieldSpec, SchemaError> {
    let object = entry
        .as_object()
        .ok_or_else(|| SchemaError::malformed_fields(owner))?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaError::MissingFieldName {
            owner: owner.to_owned(),
        })?;
    let declared = object
        .get("type")
        .ok_or_else(|| SchemaError::unsupported_type(name, "<missing>"))?;

    let (kind, nullable) = parse_type(name, declared)?;
    let default = scalar_default(name, &kind, object)?;

    let mut spec = FieldSpec::new(name, kind);
    if nullable {
        spec = spec.nullable();
    }
    if let Some(value) = default {
        spec = spec.with_default(value);
    }
    Ok(spec)
}

/// Containers always start unset, so only scalar defaults are kept.
fn scalar_default(
    field: &str,
    kind: &FieldKind,
    object: &Map<String, Value>,
) -> Result<Option<Value>, SchemaError> {
    match (kind, object.get("default")) {
        (FieldKind::Scalar(_), Some(value)) if value.is_array() || value.is_object() => {
            Err(SchemaError::InvalidDefault(field.to_owned()))
        }
        (FieldKind::Scalar(_), Some(value)) => Ok(Some(value.clone())),
        _ => Ok(None),
    }
}

/// Resolves a declared type to a kind and whether it admits `null`.
fn parse_type(field: &str, declared: &Value) -> Result<(FieldKind, bool), SchemaError> {
    match declared {
        Value::String(name) => primitive(field, name).map(|scalar| (FieldKind::Scalar(scalar), false)),
        Value::Array(branches) => parse_union(field, branches),
        Value::Object(object) => parse_complex(field, object).map(|kind| (kind, false)),
        other => Err(SchemaError::unsupported_type(field, other.to_string())),
    }
}

fn primitive(field: &str, name: &str) -> Result<ScalarType, SchemaError> {
    ScalarType::from_name(name).ok_or_else(|| SchemaError::unsupported_type(field, name))
}

fn parse_union(field: &str, branches: &[Value]) -> Result<(FieldKind, bool), SchemaError> {
    let (nulls, others): (Vec<&Value>, Vec<&Value>) = branches
        .iter()
        .partition(|branch| branch.as_str() == Some("null"));

    match (nulls.len(), others.as_slice()) {
        (1, []) => Ok((FieldKind::Scalar(ScalarType::Null), true)),
        (1, [single]) => parse_type(field, single).map(|(kind, _)| (kind, true)),
        (0, [single]) => parse_type(field, single),
        _ => Err(SchemaError::UnsupportedUnion(field.to_owned())),
    }
}

fn parse_complex(field: &str, object: &Map<String, Value>) -> Result<FieldKind, SchemaError> {
    let declared = object.get("type").ok_or_else(|| {
        SchemaError::unsupported_type(field, Value::Object(object.clone()).to_string())
    })?;
    let Some(type_name) = declared.as_str() else {
        // `{"type": ["null", "string"]}` and similar wrappers.
        return parse_type(field, declared).map(|(kind, _)| kind);
    };

    match type_name {
        "record" => {
            let nested = parse_field_list(field, object.get("fields"))?;
            Ok(FieldKind::Record(Arc::new(nested)))
        }
        "array" => {
            let items = object
                .get("items")
                .ok_or_else(|| SchemaError::MissingItems(field.to_owned()))?;
            parse_array(field, items)
        }
        other => primitive(field, other).map(FieldKind::Scalar),
    }
}

fn parse_array(field: &str, items: &Value) -> Result<FieldKind, SchemaError> {
    match nested_array_items(field, items)? {
        Some(cells) => Ok(FieldKind::Matrix(Box::new(parse_item(field, cells)?))),
        None => Ok(FieldKind::Array(Box::new(parse_item(field, items)?))),
    }
}

fn parse_item(field: &str, declared: &Value) -> Result<ItemKind, SchemaError> {
    let (kind, nullable) = parse_type(field, declared)?;
    let item = ItemKind::new(kind);
    Ok(if nullable { item.nullable() } else { item })
}

/// Returns the inner `items` when `items` is itself an array type, bare or
/// inside a nullable union.
fn nested_array_items<'a>(field: &str, items: &'a Value) -> Result<Option<&'a Value>, SchemaError> {
    let Some(object) = without_null_branch(items).as_object() else {
        return Ok(None);
    };
    if object.get("type").and_then(Value::as_str) != Some("array") {
        return Ok(None);
    }
    object
        .get("items")
        .map(Some)
        .ok_or_else(|| SchemaError::MissingItems(field.to_owned()))
}

/// Unwraps `["null", T]` (either order) to `T`; anything else is returned
/// as is.
fn without_null_branch(declared: &Value) -> &Value {
    match declared.as_array().map(Vec::as_slice) {
        Some([Value::String(null), other] | [other, Value::String(null)]) if null == "null" => {
            other
        }
        _ => declared,
    }
}

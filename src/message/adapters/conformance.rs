//! Schema conformance checks shared by the codecs.
//!
//! The message model accepts any JSON scalar in a scalar slot. Codecs are
//! the boundary where content meets a wire format, so they check that every
//! value matches its declared type before encoding and after decoding.

use crate::message::ports::codec::{CodecError, CodecResult};
use crate::schema::domain::{FieldKind, FieldList, ItemKind, SchemaDefinition};
use serde_json::{Map, Value};

/// Checks a content mapping against a schema.
///
/// Keys absent from `content` are not required; present keys must be
/// declared and their values must match the declared kind. Containers and
/// nullable scalars accept `null`.
///
/// # Errors
///
/// Returns [`CodecError::Nonconforming`] naming the first offending path,
/// e.g. `record_field.field_1` or `matrix_field[1][0]`.
///
/// # Examples
///
/// ```
/// use clay::message::adapters::check_content;
/// use clay::schema::SchemaCatalog;
/// use serde_json::json;
///
/// let catalog = SchemaCatalog::from_json(&json!({
///     "PING": {"name": "PING", "fields": [{"name": "seq", "type": "int"}]}
/// }))
/// .expect("valid catalog");
/// let schema = catalog.get("PING").expect("known type");
///
/// let good = json!({"seq": 7});
/// assert!(check_content(schema, good.as_object().expect("object")).is_ok());
///
/// let bad = json!({"seq": "seven"});
/// assert!(check_content(schema, bad.as_object().expect("object")).is_err());
/// ```
pub fn check_content(schema: &SchemaDefinition, content: &Map<String, Value>) -> CodecResult<()> {
    check_fields(schema.fields(), content, "")
}

fn check_fields(fields: &FieldList, content: &Map<String, Value>, prefix: &str) -> CodecResult<()> {
    for (key, value) in content {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let spec = fields
            .get(key)
            .ok_or_else(|| CodecError::nonconforming(&path, "a declared field"))?;
        check_value(spec.kind(), spec.is_nullable(), value, &path)?;
    }
    Ok(())
}

fn check_value(kind: &FieldKind, nullable: bool, value: &Value, path: &str) -> CodecResult<()> {
    match kind {
        FieldKind::Scalar(scalar) => {
            if (nullable && value.is_null()) || scalar.accepts(value) {
                Ok(())
            } else {
                Err(CodecError::nonconforming(path, scalar.as_str()))
            }
        }
        FieldKind::Record(fields) => match value {
            Value::Null => Ok(()),
            Value::Object(entries) => check_fields(fields, entries, path),
            _ => Err(CodecError::nonconforming(path, "record")),
        },
        FieldKind::Array(item) => check_sequence(item, value, path),
        FieldKind::Matrix(cell) => match value {
            Value::Null => Ok(()),
            Value::Array(rows) => rows
                .iter()
                .enumerate()
                .try_for_each(|(index, row)| check_sequence(cell, row, &format!("{path}[{index}]"))),
            _ => Err(CodecError::nonconforming(path, "array of arrays")),
        },
    }
}

fn check_sequence(item: &ItemKind, value: &Value, path: &str) -> CodecResult<()> {
    match value {
        Value::Null => Ok(()),
        Value::Array(entries) => entries.iter().enumerate().try_for_each(|(index, entry)| {
            check_value(item.kind(), item.is_nullable(), entry, &format!("{path}[{index}]"))
        }),
        _ => Err(CodecError::nonconforming(path, "array")),
    }
}

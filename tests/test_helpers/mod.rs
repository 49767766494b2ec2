//! Shared catalog and factory builders for integration tests.

use std::sync::Arc;

use clay::message::{ports::Codec, services::MessageFactory};
use clay::schema::SchemaCatalog;
use serde_json::{Value, json};

fn nullable_string(name: &str) -> Value {
    json!({"name": name, "type": ["null", "string"]})
}

fn sub_record(name: &str) -> Value {
    json!({
        "type": "record",
        "name": name,
        "fields": [nullable_string("field_1"), nullable_string("field_2")]
    })
}

/// Raw descriptions of `TEST` and `TEST_COMPLEX`, keyed by message type.
pub fn catalog_document() -> Value {
    json!({
        "TEST": {
            "type": "record",
            "name": "TEST",
            "namespace": "TEST",
            "fields": [{"name": "id", "type": ["null", "int"]}, nullable_string("name")]
        },
        "TEST_COMPLEX": {
            "type": "record",
            "name": "TEST_COMPLEX",
            "namespace": "TEST",
            "fields": [
                {"name": "valid", "type": "boolean", "default": true},
                {"name": "id", "type": ["null", "int"]},
                {"name": "long_id", "type": ["null", "long"]},
                {"name": "float_id", "type": ["null", "float"]},
                {"name": "double_id", "type": ["null", "double"]},
                nullable_string("name"),
                {"name": "array_complex_field", "type": ["null", {
                    "type": "array", "items": sub_record("array_complex_item")
                }]},
                {"name": "matrix_field", "type": ["null", {
                    "type": "array", "items": {"type": "array", "items": "string"}
                }]},
                {"name": "array_simple_field", "type": ["null", {
                    "type": "array", "items": "string"
                }]},
                {"name": "record_field", "type": ["null", sub_record("record_field_type")]}
            ]
        }
    })
}

/// Parses [`catalog_document`].
pub fn test_catalog() -> Result<Arc<SchemaCatalog>, eyre::Report> {
    Ok(Arc::new(SchemaCatalog::from_json(&catalog_document())?))
}

/// Builds a factory over the test catalog with the given codec.
pub fn test_factory(codec: Arc<dyn Codec>) -> Result<MessageFactory, eyre::Report> {
    Ok(MessageFactory::new(test_catalog()?, codec))
}

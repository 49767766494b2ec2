//! Error types for schema parsing and catalog lookups.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use thiserror::Error;

/// Errors raised while parsing a schema description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The description is not a JSON object.
    #[error("schema description must be a JSON object")]
    NotAnObject,

    /// The description has no string `name`.
    #[error("schema description has no name")]
    MissingName,

    /// The top-level `type` is present but is not `record`.
    #[error("schema '{0}' is not a record")]
    NotARecord(String),

    /// The `namespace` is present but is not a string.
    #[error("schema '{0}' has a non-string namespace")]
    InvalidNamespace(String),

    /// A `fields` entry is missing or is not a list of objects.
    #[error("malformed field list in '{owner}'")]
    MalformedFields {
        /// The schema or record field that owns the list.
        owner: String,
    },

    /// A field entry has no string `name`.
    #[error("a field in '{owner}' has no name")]
    MissingFieldName {
        /// The schema or record field that owns the entry.
        owner: String,
    },

    /// Two fields in one list share a name.
    #[error("duplicate field '{0}'")]
    DuplicateField(String),

    /// A field declares a type the engine does not model.
    #[error("field '{field}' declares unsupported type {type_name}")]
    UnsupportedType {
        /// The offending field.
        field: String,
        /// The declared type, rendered as JSON.
        type_name: String,
    },

    /// A union other than `["null", T]` was declared.
    #[error("field '{0}' declares an unsupported union")]
    UnsupportedUnion(String),

    /// An array type has no `items`.
    #[error("array field '{0}' has no items")]
    MissingItems(String),

    /// A scalar field declares a structured default.
    #[error("field '{0}' declares a non-scalar default")]
    InvalidDefault(String),
}

impl SchemaError {
    /// Creates a malformed field list error.
    #[must_use]
    pub fn malformed_fields(owner: impl Into<String>) -> Self {
        Self::MalformedFields {
            owner: owner.into(),
        }
    }

    /// Creates an unsupported type error.
    #[must_use]
    pub fn unsupported_type(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            field: field.into(),
            type_name: type_name.into(),
        }
    }
}

/// Errors raised by the schema catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A description failed to parse during load.
    #[error("invalid schema for message type '{message_type}': {source}")]
    Schema {
        /// The catalog key whose description was rejected.
        message_type: String,
        /// The underlying parse failure.
        #[source]
        source: SchemaError,
    },

    /// The requested message type is not in the catalog.
    #[error("unknown message type '{0}'")]
    UnknownType(String),

    /// The catalog document itself is not a mapping of descriptions.
    #[error("catalog must be a JSON object keyed by message type")]
    NotAMapping,

    /// A schema file could not be read.
    #[error("failed to read schema source: {0}")]
    Io(#[from] std::io::Error),

    /// A schema file is not valid JSON.
    #[error("schema file '{file}' is not valid JSON: {source}")]
    Parse {
        /// The file name within the schema directory.
        file: String,
        /// The JSON syntax error.
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Wraps a parse failure with the message type it belongs to.
    #[must_use]
    pub fn schema(message_type: impl Into<String>, source: SchemaError) -> Self {
        Self::Schema {
            message_type: message_type.into(),
            source,
        }
    }

    /// Returns `true` if this error reports an unknown message type.
    #[must_use]
    pub const fn is_unknown_type(&self) -> bool {
        matches!(self, Self::UnknownType(_))
    }
}

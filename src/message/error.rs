//! Error types for the message model and its factory.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use crate::message::ports::codec::CodecError;
use crate::schema::error::CatalogError;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading or mutating message content.
///
/// Every variant is raised at the point of access; nothing is coerced or
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A content mapping or accessor named a field the schema does not
    /// declare.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A value is not shaped like the container it was given to.
    #[error("invalid content: expected {expected}, found {found}")]
    InvalidContent {
        /// The shape the container accepts.
        expected: &'static str,
        /// The JSON type that was supplied.
        found: &'static str,
    },

    /// A sub-field of an unset record was read.
    #[error("field '{0}' is not available while its record is unset")]
    AttributeNotAvailable(String),

    /// An index, length or delete operation hit an unset array or matrix.
    #[error("cannot {operation} an uninitialised container")]
    ContainerNotInitialized {
        /// The attempted operation.
        operation: &'static str,
    },

    /// A composite field was assigned a whole value directly.
    #[error("field '{0}' is composite and cannot be assigned directly")]
    CompositeAssignment(String),

    /// A typed accessor was used on a field of another kind.
    #[error("field '{field}' is a {actual}, not a {expected}")]
    KindMismatch {
        /// The field that was accessed.
        field: String,
        /// The kind the accessor expects.
        expected: &'static str,
        /// The kind the schema declares.
        actual: &'static str,
    },

    /// An index lies beyond the end of a set container.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The container length.
        len: usize,
    },
}

impl ModelError {
    /// Creates an invalid content error for the supplied value.
    #[must_use]
    pub fn invalid_content(expected: &'static str, found: &Value) -> Self {
        Self::InvalidContent {
            expected,
            found: json_type(found),
        }
    }

    /// Creates a kind mismatch error.
    #[must_use]
    pub fn kind_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::KindMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an uninitialised container error.
    #[must_use]
    pub const fn not_initialized(operation: &'static str) -> Self {
        Self::ContainerNotInitialized { operation }
    }
}

/// Names the JSON type of a value.
pub(crate) const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Errors raised by the message factory.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The requested message type cannot be instantiated.
    #[error("invalid message type '{message_type}': {source}")]
    InvalidMessage {
        /// The requested type name.
        message_type: String,
        /// The catalog lookup failure.
        #[source]
        source: CatalogError,
    },

    /// The codec rejected a payload.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Decoded content did not fit the message.
    #[error(transparent)]
    Content(#[from] ModelError),
}

impl FactoryError {
    /// Returns `true` if the requested type was not in the catalog.
    #[must_use]
    pub const fn is_unknown_type(&self) -> bool {
        matches!(
            self,
            Self::InvalidMessage {
                source: CatalogError::UnknownType(_),
                ..
            }
        )
    }
}

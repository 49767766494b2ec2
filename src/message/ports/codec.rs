//! Codec port: turning validated content into bytes and back.
//!
//! The message model never inspects byte-level encoding. A codec is bound to
//! every message at construction and is polymorphic over the
//! serialize/deserialize capability defined here.

use crate::schema::domain::SchemaDefinition;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Port for content encoding.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Reject content that does not conform to `schema` rather than encode it
/// - Return a plain mapping from `deserialize`, never container objects
/// - Be stateless and thread-safe
#[cfg_attr(test, mockall::automock)]
pub trait Codec: Send + Sync + fmt::Debug {
    /// Returns a short codec name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Encodes a message's content.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the content does not conform to the schema or
    /// cannot be encoded.
    fn serialize(&self, schema: &SchemaDefinition, content: &Map<String, Value>)
    -> CodecResult<Vec<u8>>;

    /// Decodes a payload into a content mapping.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the payload is malformed or its content does
    /// not conform to the schema.
    fn deserialize(&self, schema: &SchemaDefinition, payload: &[u8])
    -> CodecResult<Map<String, Value>>;
}

/// Errors that can occur while encoding or decoding content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The encoder failed.
    #[error("{codec} encoding failed: {reason}")]
    Encode {
        /// The codec name.
        codec: &'static str,
        /// Description of the failure.
        reason: String,
    },

    /// The payload could not be decoded.
    #[error("{codec} decoding failed: {reason}")]
    Decode {
        /// The codec name.
        codec: &'static str,
        /// Description of the failure.
        reason: String,
    },

    /// The decoded payload is not a mapping of field names.
    #[error("decoded payload is not a mapping")]
    NotAMapping,

    /// Content does not match the schema.
    #[error("content at '{path}' does not conform to the schema: expected {expected}")]
    Nonconforming {
        /// Dotted and indexed path to the offending value.
        path: String,
        /// What the schema expects at that path.
        expected: String,
    },
}

impl CodecError {
    /// Creates an encoding error from any displayable cause.
    #[must_use]
    pub fn encode(codec: &'static str, reason: impl fmt::Display) -> Self {
        Self::Encode {
            codec,
            reason: reason.to_string(),
        }
    }

    /// Creates a decoding error from any displayable cause.
    #[must_use]
    pub fn decode(codec: &'static str, reason: impl fmt::Display) -> Self {
        Self::Decode {
            codec,
            reason: reason.to_string(),
        }
    }

    /// Creates a conformance error.
    #[must_use]
    pub fn nonconforming(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Nonconforming {
            path: path.into(),
            expected: expected.into(),
        }
    }
}

//! Parsed message-type schemas and their fingerprints.

use super::FieldList;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

/// SHA-256 digest of a schema description's canonical JSON form.
///
/// Object keys are sorted before hashing, so two descriptions that differ
/// only in key order share a fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaFingerprint([u8; 32]);

impl SchemaFingerprint {
    /// Computes the fingerprint of a raw schema description.
    #[must_use]
    pub fn of(description: &Value) -> Self {
        let canonical = canonicalize(description).to_string();
        Self(Sha256::digest(canonical.as_bytes()).into())
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for SchemaFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut entries: Vec<_> = object.iter().collect();
            entries.sort_by(|(left, _), (right, _)| left.cmp(right));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, inner)| (key.clone(), canonicalize(inner)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// A parsed, immutable message-type schema.
///
/// # Invariants
///
/// - The field list and its order never change after parsing
/// - `domain` is the description's `namespace` (empty when absent)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefinition {
    name: String,
    domain: String,
    fields: Arc<FieldList>,
    fingerprint: SchemaFingerprint,
}

impl SchemaDefinition {
    /// Creates a definition from already validated parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        fields: FieldList,
        fingerprint: SchemaFingerprint,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            fields: Arc::new(fields),
            fingerprint,
        }
    }

    /// Returns the record name declared by the description.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the domain messages of this type are routed under.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the ordered top-level fields.
    #[must_use]
    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    /// Returns a shared handle to the top-level field list.
    #[must_use]
    pub fn shared_fields(&self) -> Arc<FieldList> {
        Arc::clone(&self.fields)
    }

    /// Returns the description fingerprint.
    #[must_use]
    pub const fn fingerprint(&self) -> SchemaFingerprint {
        self.fingerprint
    }
}

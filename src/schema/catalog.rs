//! The catalog of known message-type schemas.

use crate::schema::{domain::SchemaDefinition, error::CatalogError, parser::parse_definition};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Immutable collection of schemas keyed by message type.
///
/// The catalog is built once by [`SchemaCatalog::load`] and only read
/// afterwards, so a shared reference (or an `Arc`) may be handed to any
/// number of concurrent readers without locking.
///
/// # Examples
///
/// ```
/// use clay::schema::SchemaCatalog;
/// use serde_json::json;
///
/// let catalog = SchemaCatalog::from_json(&json!({
///     "PING": {"name": "PING", "namespace": "HEALTH", "fields": []}
/// }))
/// .expect("valid catalog");
///
/// assert!(catalog.contains("PING"));
/// assert!(catalog.get("PONG").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    definitions: HashMap<String, Arc<SchemaDefinition>>,
}

impl SchemaCatalog {
    /// Parses every description and builds the catalog.
    ///
    /// Each key is the message type name; the value is its raw description.
    /// A later entry with the same key replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Schema`] naming the first message type whose
    /// description fails to parse. No partial catalog is returned.
    pub fn load<I, K>(definitions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut catalog = Self::default();
        for (key, description) in definitions {
            let message_type = key.into();
            let definition = parse_definition(&description)
                .map_err(|source| CatalogError::schema(message_type.as_str(), source))?;
            debug!(
                message_type = %message_type,
                domain = definition.domain(),
                fingerprint = %definition.fingerprint(),
                "loaded schema"
            );
            catalog
                .definitions
                .insert(message_type, Arc::new(definition));
        }
        Ok(catalog)
    }

    /// Builds the catalog from a JSON object keyed by message type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotAMapping`] if `document` is not an object,
    /// or any error [`SchemaCatalog::load`] returns.
    pub fn from_json(document: &Value) -> Result<Self, CatalogError> {
        let entries = document.as_object().ok_or(CatalogError::NotAMapping)?;
        Self::load(
            entries
                .iter()
                .map(|(message_type, description)| (message_type.as_str(), description.clone())),
        )
    }

    /// Returns the schema for a message type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownType`] if the type is not present.
    pub fn get(&self, message_type: &str) -> Result<&Arc<SchemaDefinition>, CatalogError> {
        self.definitions
            .get(message_type)
            .ok_or_else(|| CatalogError::UnknownType(message_type.to_owned()))
    }

    /// Returns `true` if the message type is present.
    #[must_use]
    pub fn contains(&self, message_type: &str) -> bool {
        self.definitions.contains_key(message_type)
    }

    /// Returns the number of message types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the catalog holds no schemas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns the known message types, sorted.
    #[must_use]
    pub fn message_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

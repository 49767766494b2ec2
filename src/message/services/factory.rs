//! Message construction from catalogued schemas.

use crate::message::{domain::Message, error::FactoryError, ports::codec::Codec};
use crate::schema::SchemaCatalog;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Builds messages for the types held in a [`SchemaCatalog`].
///
/// Every message created by one factory shares its codec.
///
/// # Examples
///
/// ```
/// use clay::message::adapters::JsonCodec;
/// use clay::message::services::MessageFactory;
/// use clay::schema::SchemaCatalog;
/// use serde_json::{Value, json};
/// use std::sync::Arc;
///
/// let catalog = SchemaCatalog::from_json(&json!({
///     "TEST": {
///         "name": "TEST",
///         "namespace": "TEST",
///         "fields": [
///             {"name": "id", "type": ["null", "int"]},
///             {"name": "name", "type": ["null", "string"]}
///         ]
///     }
/// }))
/// .expect("valid catalog");
/// let factory = MessageFactory::new(Arc::new(catalog), Arc::new(JsonCodec));
///
/// let message = factory.create("TEST").expect("known type");
/// assert_eq!(message.fields().collect::<Vec<_>>(), ["id", "name"]);
/// assert_eq!(message.get("id").expect("scalar"), &Value::Null);
///
/// assert!(factory.create("MISSING").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MessageFactory {
    catalog: Arc<SchemaCatalog>,
    codec: Arc<dyn Codec>,
}

impl MessageFactory {
    /// Creates a factory over `catalog` binding `codec` to every message.
    #[must_use]
    pub fn new(catalog: Arc<SchemaCatalog>, codec: Arc<dyn Codec>) -> Self {
        Self { catalog, codec }
    }

    /// Returns the catalog messages are built from.
    #[must_use]
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Creates a message of `message_type` with every field at its default.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::InvalidMessage`] if the catalog has no such
    /// type.
    pub fn create(&self, message_type: &str) -> Result<Message, FactoryError> {
        let schema =
            self.catalog
                .get(message_type)
                .map_err(|source| FactoryError::InvalidMessage {
                    message_type: message_type.to_owned(),
                    source,
                })?;
        debug!(
            message_type,
            domain = schema.domain(),
            codec = self.codec.name(),
            "creating message"
        );
        Ok(Message::new(
            message_type,
            Arc::clone(schema),
            Arc::clone(&self.codec),
        ))
    }

    /// Rebuilds a message of `message_type` from an encoded payload.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::InvalidMessage`] for an unknown type,
    /// [`FactoryError::Codec`] if the payload cannot be decoded, and
    /// [`FactoryError::Content`] if the decoded content does not fit.
    pub fn decode(&self, message_type: &str, payload: &[u8]) -> Result<Message, FactoryError> {
        let mut message = self.create(message_type)?;
        let content = self.codec.deserialize(message.schema(), payload)?;
        debug!(
            message_type,
            bytes = payload.len(),
            fields = content.len(),
            "decoded message"
        );
        message.set_content(&Value::Object(content))?;
        Ok(message)
    }
}

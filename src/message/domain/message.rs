//! The Message aggregate: one instance of a catalogued message type.

use super::table::FieldTable;
use super::{ArrayField, Field, MatrixField, RecordField};
use crate::message::{
    error::ModelError,
    ports::codec::{Codec, CodecResult},
};
use crate::schema::domain::SchemaDefinition;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A mutable, schema-checked message.
///
/// Messages are created fully formed by
/// [`MessageFactory::create`](crate::message::services::MessageFactory::create):
/// every declared field is present from the start, scalars at their
/// defaults and containers unset. Callers then mutate fields in place
/// through the typed accessors or in bulk with [`Message::set_content`].
///
/// # Invariants
///
/// - The field names and their order are fixed by the schema for the
///   message's whole lifetime
/// - Composite fields are never replaced wholesale by [`Message::set`]
/// - Equality compares `domain`, `message_type` and content; the schema
///   handle and the codec are ignored
///
/// # Examples
///
/// ```
/// use clay::message::adapters::JsonCodec;
/// use clay::message::services::MessageFactory;
/// use clay::schema::SchemaCatalog;
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let catalog = SchemaCatalog::from_json(&json!({
///     "DEPOSIT": {
///         "name": "DEPOSIT",
///         "namespace": "EXAMPLES",
///         "fields": [
///             {"name": "client_id", "type": "string"},
///             {"name": "amount", "type": "int"}
///         ]
///     }
/// }))
/// .expect("valid catalog");
/// let factory = MessageFactory::new(Arc::new(catalog), Arc::new(JsonCodec));
///
/// let mut message = factory.create("DEPOSIT").expect("known type");
/// message.set("client_id", "John Doe").expect("scalar field");
/// message.set("amount", 100).expect("scalar field");
///
/// assert_eq!(message.routing_key(), "EXAMPLES/DEPOSIT");
/// assert_eq!(message.get("amount").expect("scalar"), &json!(100));
/// ```
#[derive(Clone)]
pub struct Message {
    domain: String,
    message_type: String,
    schema: Arc<SchemaDefinition>,
    table: FieldTable,
    codec: Arc<dyn Codec>,
}

impl Message {
    /// Creates a message with every field at its default.
    #[must_use]
    pub fn new(
        message_type: impl Into<String>,
        schema: Arc<SchemaDefinition>,
        codec: Arc<dyn Codec>,
    ) -> Self {
        Self {
            domain: schema.domain().to_owned(),
            message_type: message_type.into(),
            table: FieldTable::new(schema.shared_fields()),
            schema,
            codec,
        }
    }

    /// Returns the domain the message is routed under.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the message type.
    #[must_use]
    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// Returns the schema the message was built from.
    #[must_use]
    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    /// Returns the `{domain}/{message_type}` routing key used by
    /// transports.
    #[must_use]
    pub fn routing_key(&self) -> String {
        format!("{}/{}", self.domain, self.message_type)
    }

    /// Iterates over the field names in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.table.names()
    }

    /// Returns `true` if the schema declares `name`.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// Returns a field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] for an undeclared name.
    pub fn field(&self, name: &str) -> Result<&Field, ModelError> {
        self.table.field(name)
    }

    /// Returns a field mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] for an undeclared name.
    pub fn field_mut(&mut self, name: &str) -> Result<&mut Field, ModelError> {
        self.table.field_mut(name)
    }

    /// Reads a scalar field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] for an undeclared name and
    /// [`ModelError::KindMismatch`] for a composite field.
    pub fn get(&self, name: &str) -> Result<&Value, ModelError> {
        self.table.scalar(name)
    }

    /// Writes a scalar field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] for an undeclared name,
    /// [`ModelError::CompositeAssignment`] for a record, array or matrix,
    /// and [`ModelError::InvalidContent`] for a structured value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ModelError> {
        self.table.assign(name, value.into())
    }

    /// Returns a record field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] or [`ModelError::KindMismatch`].
    pub fn record(&self, name: &str) -> Result<&RecordField, ModelError> {
        self.table.record(name)
    }

    /// Returns a record field mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] or [`ModelError::KindMismatch`].
    pub fn record_mut(&mut self, name: &str) -> Result<&mut RecordField, ModelError> {
        self.table.record_mut(name)
    }

    /// Returns an array field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] or [`ModelError::KindMismatch`].
    pub fn array(&self, name: &str) -> Result<&ArrayField, ModelError> {
        self.table.array(name)
    }

    /// Returns an array field mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] or [`ModelError::KindMismatch`].
    pub fn array_mut(&mut self, name: &str) -> Result<&mut ArrayField, ModelError> {
        self.table.array_mut(name)
    }

    /// Returns a matrix field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] or [`ModelError::KindMismatch`].
    pub fn matrix(&self, name: &str) -> Result<&MatrixField, ModelError> {
        self.table.matrix(name)
    }

    /// Returns a matrix field mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownField`] or [`ModelError::KindMismatch`].
    pub fn matrix_mut(&mut self, name: &str) -> Result<&mut MatrixField, ModelError> {
        self.table.matrix_mut(name)
    }

    /// Assigns content to the fields named in `content`.
    ///
    /// Scalar fields take the value directly; composite fields apply their
    /// own content rules. Fields not named keep their current content.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidContent`] if `content` is not an object,
    /// [`ModelError::UnknownField`] if it names an undeclared field, or any
    /// error a field reports. The message is unchanged on error.
    pub fn set_content(&mut self, content: &Value) -> Result<(), ModelError> {
        let values = content
            .as_object()
            .ok_or_else(|| ModelError::invalid_content("object", content))?;
        self.table.set_content(values)
    }

    /// Returns every field's content keyed by name, in schema order.
    #[must_use]
    pub fn content(&self) -> Map<String, Value> {
        self.table.content()
    }

    /// Encodes the content with the codec bound at construction.
    ///
    /// # Errors
    ///
    /// Returns whatever the codec reports.
    pub fn serialize(&self) -> CodecResult<Vec<u8>> {
        self.codec.serialize(&self.schema, &self.content())
    }

    /// Returns the codec bound to this message.
    #[must_use]
    pub fn codec(&self) -> &dyn Codec {
        self.codec.as_ref()
    }

    #[doc(hidden)]
    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = domain.into();
    }

    #[doc(hidden)]
    pub fn set_message_type(&mut self, message_type: impl Into<String>) {
        self.message_type = message_type.into();
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.message_type == other.message_type
            && self.table == other.table
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("domain", &self.domain)
            .field("message_type", &self.message_type)
            .field("content", &self.content())
            .field("codec", &self.codec.name())
            .finish_non_exhaustive()
    }
}

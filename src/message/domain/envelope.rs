//! Transport envelopes wrapping encoded messages.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an envelope handed to a transport.
///
/// # Examples
///
/// ```
/// use clay::message::domain::EnvelopeId;
///
/// let id = EnvelopeId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvelopeId(Uuid);

impl EnvelopeId {
    /// Creates a new random envelope identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an envelope identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for EnvelopeId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for EnvelopeId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EnvelopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An encoded message addressed by routing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Identifier assigned when the envelope was built.
    pub id: EnvelopeId,
    /// `{domain}/{message_type}` of the wrapped message.
    pub routing_key: String,
    /// Codec output.
    pub payload: Vec<u8>,
    /// When the envelope was built.
    pub created_at: DateTime<Utc>,
}

impl Envelope {
    /// Builds an envelope stamped with the clock's current time.
    #[must_use]
    pub fn new(routing_key: impl Into<String>, payload: Vec<u8>, clock: &impl Clock) -> Self {
        Self {
            id: EnvelopeId::new(),
            routing_key: routing_key.into(),
            payload,
            created_at: clock.utc(),
        }
    }

    /// Returns the domain part of the routing key.
    ///
    /// The message type is the last segment, so a domain may itself contain
    /// `/`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.routing_key
            .rsplit_once('/')
            .map_or(self.routing_key.as_str(), |(domain, _)| domain)
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.payload.len()
    }
}

//! Port for handing messages to a transport.
//!
//! A messenger turns a [`Message`] into an
//! [`Envelope`](crate::message::domain::Envelope) routed by
//! `{domain}/{message_type}` and either delivers it straight away or holds
//! it until the broker is reachable again.

use crate::message::domain::{EnvelopeId, Message};
use crate::message::ports::codec::CodecError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for messenger operations.
pub type MessengerResult<T> = Result<T, MessengerError>;

/// What happened to a sent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The envelope reached its queue.
    Delivered(EnvelopeId),
    /// The broker was unreachable; the envelope waits in the spool.
    Spooled {
        /// Spool length after this envelope was added.
        queued: usize,
    },
}

impl SendOutcome {
    /// Returns `true` for [`SendOutcome::Delivered`].
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// Port for sending messages.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Encodes and sends a message to the queue registered for its domain.
    ///
    /// # Errors
    ///
    /// Returns [`MessengerError::NoQueue`] when the message's domain has no
    /// queue, [`MessengerError::Codec`] when encoding fails, and
    /// [`MessengerError::PayloadTooLarge`] or [`MessengerError::SpoolFull`]
    /// when a configured limit is exceeded.
    async fn send(&self, message: &Message) -> MessengerResult<SendOutcome>;
}

/// Errors raised while sending messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessengerError {
    /// No queue is registered for the message's domain.
    #[error("no queue specified for domain '{0}'")]
    NoQueue(String),

    /// The message could not be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The encoded payload exceeds the configured limit.
    #[error("payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge {
        /// Encoded size.
        size: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The spool already holds as many envelopes as it may.
    #[error("spool is full ({capacity} envelopes)")]
    SpoolFull {
        /// Configured capacity.
        capacity: usize,
    },

    /// Broker state became unusable after a panic elsewhere.
    #[error("messenger state poisoned: {0}")]
    Poisoned(String),
}

impl MessengerError {
    /// Creates a poisoned-state error from any displayable lock error.
    #[must_use]
    pub fn poisoned(err: impl std::fmt::Display) -> Self {
        Self::Poisoned(err.to_string())
    }
}

/// Limits applied by messengers.
///
/// # Examples
///
/// ```
/// use clay::message::ports::messenger::MessengerConfig;
///
/// let config = MessengerConfig::default();
/// assert_eq!(config.spool_capacity, Some(1024));
///
/// let unbounded = MessengerConfig::unbounded();
/// assert!(unbounded.max_payload_bytes.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessengerConfig {
    /// Largest payload accepted, in bytes. `None` disables the check.
    pub max_payload_bytes: Option<usize>,
    /// Most envelopes held while offline. `None` disables the check.
    pub spool_capacity: Option<usize>,
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: Some(1024 * 1024), // 1 MiB
            spool_capacity: Some(1024),
        }
    }
}

impl MessengerConfig {
    /// Creates a configuration without limits.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_payload_bytes: None,
            spool_capacity: None,
        }
    }

    /// Creates a configuration with tight limits.
    ///
    /// Useful for resource-constrained environments and for exercising the
    /// limit paths in tests.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_payload_bytes: Some(64 * 1024), // 64 KiB
            spool_capacity: Some(16),
        }
    }
}

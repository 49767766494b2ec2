//! In-memory implementation of the `Messenger` port.
//!
//! Stands in for a broker connection: queues are registered per domain,
//! delivered envelopes are kept for inspection, and envelopes sent while the
//! broker is marked offline wait in a FIFO spool until flushed.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::message::{
    domain::{Envelope, Message},
    ports::messenger::{Messenger, MessengerConfig, MessengerError, MessengerResult, SendOutcome},
};

/// A queue registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueBinding {
    /// Queue name; messages whose domain matches are routed here.
    pub name: String,
    /// Whether the broker should persist the queue.
    pub durable: bool,
    /// Whether consumers reply on this queue.
    pub response: bool,
}

#[derive(Debug)]
struct BrokerState {
    queues: HashMap<String, QueueBinding>,
    online: bool,
    delivered: Vec<Envelope>,
    spool: VecDeque<Envelope>,
}

impl Default for BrokerState {
    fn default() -> Self {
        Self {
            queues: HashMap::new(),
            online: true,
            delivered: Vec::new(),
            spool: VecDeque::new(),
        }
    }
}

/// In-memory implementation of [`Messenger`].
///
/// Thread-safe via internal [`RwLock`]. Clones share the same broker state.
///
/// # Example
///
/// ```
/// use clay::message::adapters::memory::InMemoryMessenger;
/// use mockable::DefaultClock;
///
/// let messenger = InMemoryMessenger::new(DefaultClock);
/// messenger.add_queue("BANK", true, false).expect("fresh state");
/// assert!(messenger.has_queue("BANK"));
/// assert_eq!(messenger.spooled_len(), 0);
/// ```
#[derive(Debug)]
pub struct InMemoryMessenger<C: Clock + Send + Sync> {
    state: Arc<RwLock<BrokerState>>,
    config: MessengerConfig,
    clock: Arc<C>,
}

impl<C: Clock + Send + Sync> Clone for InMemoryMessenger<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            config: self.config.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: Clock + Send + Sync> InMemoryMessenger<C> {
    /// Creates an online messenger with the default limits.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, MessengerConfig::default())
    }

    /// Creates an online messenger with the given limits.
    #[must_use]
    pub fn with_config(clock: C, config: MessengerConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(BrokerState::default())),
            config,
            clock: Arc::new(clock),
        }
    }

    /// Returns the limits in force.
    #[must_use]
    pub const fn config(&self) -> &MessengerConfig {
        &self.config
    }

    /// Registers a queue. Messages whose domain equals `name` are routed to
    /// it. Registering the same name again replaces the binding.
    ///
    /// # Errors
    ///
    /// Returns [`MessengerError::Poisoned`] if the broker state is poisoned.
    pub fn add_queue(
        &self,
        name: impl Into<String>,
        durable: bool,
        response: bool,
    ) -> MessengerResult<()> {
        let binding = QueueBinding {
            name: name.into(),
            durable,
            response,
        };
        let mut guard = self.state.write().map_err(MessengerError::poisoned)?;
        debug!(queue = %binding.name, durable, response, "queue registered");
        guard.queues.insert(binding.name.clone(), binding);
        Ok(())
    }

    /// Returns `true` if a queue named `name` is registered.
    #[must_use]
    pub fn has_queue(&self, name: &str) -> bool {
        self.state
            .read()
            .map(|guard| guard.queues.contains_key(name))
            .unwrap_or(false)
    }

    /// Returns the binding for `name`, if registered.
    #[must_use]
    pub fn queue(&self, name: &str) -> Option<QueueBinding> {
        self.state
            .read()
            .ok()
            .and_then(|guard| guard.queues.get(name).cloned())
    }

    /// Marks the broker reachable or unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`MessengerError::Poisoned`] if the broker state is poisoned.
    pub fn set_online(&self, online: bool) -> MessengerResult<()> {
        let mut guard = self.state.write().map_err(MessengerError::poisoned)?;
        guard.online = online;
        Ok(())
    }

    /// Returns `true` while the broker is reachable.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.state.read().map(|guard| guard.online).unwrap_or(false)
    }

    /// Delivers every spooled envelope, oldest first.
    ///
    /// Does nothing while the broker is offline.
    ///
    /// # Errors
    ///
    /// Returns [`MessengerError::Poisoned`] if the broker state is poisoned.
    pub fn flush_spool(&self) -> MessengerResult<usize> {
        let mut guard = self.state.write().map_err(MessengerError::poisoned)?;
        if !guard.online {
            return Ok(0);
        }
        let BrokerState {
            spool, delivered, ..
        } = &mut *guard;
        let flushed = spool.len();
        delivered.extend(spool.drain(..));
        if flushed > 0 {
            info!(flushed, "spool flushed");
        }
        Ok(flushed)
    }

    /// Returns a copy of every delivered envelope, in delivery order.
    #[must_use]
    pub fn delivered(&self) -> Vec<Envelope> {
        self.state
            .read()
            .map(|guard| guard.delivered.clone())
            .unwrap_or_default()
    }

    /// Returns the number of envelopes waiting in the spool.
    #[must_use]
    pub fn spooled_len(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.spool.len())
            .unwrap_or(0)
    }

    /// Panics a thread while it holds the state lock, leaving it poisoned.
    #[cfg(test)]
    pub(crate) fn poison_state(&self) {
        let state = Arc::clone(&self.state);
        let outcome = std::thread::spawn(move || {
            let _guard = state.write();
            panic!("broker state poisoned on purpose");
        })
        .join();
        assert!(outcome.is_err(), "the locking thread should have panicked");
    }

    fn build_envelope(&self, message: &Message) -> MessengerResult<Envelope> {
        let payload = message.serialize()?;
        if let Some(limit) = self.config.max_payload_bytes
            && payload.len() > limit
        {
            return Err(MessengerError::PayloadTooLarge {
                size: payload.len(),
                limit,
            });
        }
        Ok(Envelope::new(message.routing_key(), payload, &*self.clock))
    }

    fn spool(&self, state: &mut BrokerState, envelope: Envelope) -> MessengerResult<SendOutcome> {
        if let Some(capacity) = self.config.spool_capacity
            && state.spool.len() >= capacity
        {
            warn!(routing_key = %envelope.routing_key, capacity, "spool full, dropping message");
            return Err(MessengerError::SpoolFull { capacity });
        }
        state.spool.push_back(envelope);
        let queued = state.spool.len();
        warn!(queued, "no connection, message spooled");
        Ok(SendOutcome::Spooled { queued })
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> Messenger for InMemoryMessenger<C> {
    async fn send(&self, message: &Message) -> MessengerResult<SendOutcome> {
        let bound = self
            .state
            .read()
            .map_err(MessengerError::poisoned)?
            .queues
            .contains_key(message.domain());
        if !bound {
            return Err(MessengerError::NoQueue(message.domain().to_owned()));
        }
        let envelope = self.build_envelope(message)?;

        let mut guard = self.state.write().map_err(MessengerError::poisoned)?;
        if !guard.online {
            return self.spool(&mut *guard, envelope);
        }
        let id = envelope.id;
        debug!(routing_key = %envelope.routing_key, envelope_id = %id, "message delivered");
        guard.delivered.push(envelope);
        Ok(SendOutcome::Delivered(id))
    }
}

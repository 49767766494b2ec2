//! Shared world state for message model BDD scenarios.

use std::sync::Arc;

use clay::message::{
    adapters::{JsonCodec, MsgPackCodec, memory::InMemoryMessenger},
    domain::Message,
    error::{FactoryError, ModelError},
    ports::{Codec, MessengerResult, SendOutcome},
    services::MessageFactory,
};
use mockable::DefaultClock;
use rstest::fixture;

use crate::test_helpers::test_factory;

/// Scenario world for message model behaviour tests.
pub struct ModelWorld {
    /// Factory over the shared test catalog.
    pub factory: MessageFactory,
    /// Messages created so far; the first is "the message".
    pub messages: Vec<Message>,
    /// Result of the last bulk content update.
    pub last_update: Option<Result<(), ModelError>>,
    /// Result of the last explicit creation request.
    pub last_request: Option<Result<Message, FactoryError>>,
    /// Message produced by the last encode/decode cycle.
    pub decoded: Option<Message>,
    /// In-memory messenger used by sending scenarios.
    pub messenger: InMemoryMessenger<DefaultClock>,
    /// Result of the last send.
    pub last_send: Option<MessengerResult<SendOutcome>>,
}

impl ModelWorld {
    /// Creates a world with a JSON factory and an empty messenger.
    ///
    /// # Panics
    ///
    /// Panics if the shared test catalog fails to parse.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factory: test_factory(Arc::new(JsonCodec)).expect("test catalog should parse"),
            messages: Vec::new(),
            last_update: None,
            last_request: None,
            decoded: None,
            messenger: InMemoryMessenger::new(DefaultClock),
            last_send: None,
        }
    }

    /// Returns the first message created in the scenario.
    pub fn message(&self) -> Result<&Message, eyre::Report> {
        self.messages
            .first()
            .ok_or_else(|| eyre::eyre!("no message in scenario world"))
    }

    /// Returns the first message created in the scenario mutably.
    pub fn message_mut(&mut self) -> Result<&mut Message, eyre::Report> {
        self.messages
            .first_mut()
            .ok_or_else(|| eyre::eyre!("no message in scenario world"))
    }
}

impl Default for ModelWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ModelWorld {
    ModelWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Resolves a codec by the name used in feature files.
pub fn codec_named(name: &str) -> Result<Arc<dyn Codec>, eyre::Report> {
    match name {
        "json" => Ok(Arc::new(JsonCodec)),
        "msgpack" => Ok(Arc::new(MsgPackCodec)),
        other => Err(eyre::eyre!("unknown codec '{other}'")),
    }
}

/// Parses a JSON literal quoted in a step.
pub fn parse_json(text: &str) -> Result<serde_json::Value, eyre::Report> {
    serde_json::from_str(text).map_err(|err| eyre::eyre!("invalid JSON '{text}' in step: {err}"))
}

//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without a broker.

mod messenger;

pub use messenger::{InMemoryMessenger, QueueBinding};

//! Concrete implementations of the message ports.
//!
//! # Available Adapters
//!
//! - [`JsonCodec`]: JSON encoding via `serde_json`
//! - [`MsgPackCodec`]: `MessagePack` encoding via `rmp-serde`
//! - [`memory::InMemoryMessenger`]: queue registration and spooling without
//!   a broker, for tests
//!
//! Both codecs run [`check_content`] before encoding and after decoding.

mod conformance;
mod json;
pub mod memory;
mod msgpack;

pub use conformance::check_content;
pub use json::JsonCodec;
pub use msgpack::MsgPackCodec;

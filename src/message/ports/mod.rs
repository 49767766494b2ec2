//! Port trait definitions for the message subsystem.
//!
//! Ports define the capabilities the model needs from the outside world:
//! turning content into bytes and handing bytes to a transport. Adapters
//! implement them.

pub mod codec;
pub mod messenger;

pub use codec::{Codec, CodecError, CodecResult};
pub use messenger::{Messenger, MessengerConfig, MessengerError, MessengerResult, SendOutcome};

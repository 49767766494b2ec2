//! Application services for the message subsystem.

mod factory;

pub use factory::MessageFactory;

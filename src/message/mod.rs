//! Schema-driven messages and their codecs.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: the message tree ([`domain::Message`], [`domain::Field`],
//!   [`domain::RecordField`], [`domain::ArrayField`],
//!   [`domain::MatrixField`]) and transport envelopes
//! - **Ports**: [`ports::Codec`] and [`ports::Messenger`]
//! - **Adapters**: [`adapters::JsonCodec`], [`adapters::MsgPackCodec`],
//!   [`adapters::memory::InMemoryMessenger`]
//! - **Services**: [`services::MessageFactory`]
//!
//! # Example
//!
//! ```
//! use clay::message::adapters::JsonCodec;
//! use clay::message::services::MessageFactory;
//! use clay::schema::SchemaCatalog;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let catalog = SchemaCatalog::from_json(&json!({
//!     "ORDER": {
//!         "name": "ORDER",
//!         "namespace": "SHOP",
//!         "fields": [
//!             {"name": "lines", "type": {"type": "array", "items": {
//!                 "type": "record", "name": "line",
//!                 "fields": [{"name": "sku", "type": ["null", "string"]}]
//!             }}}
//!         ]
//!     }
//! }))
//! .expect("valid catalog");
//! let factory = MessageFactory::new(Arc::new(catalog), Arc::new(JsonCodec));
//!
//! let mut order = factory.create("ORDER").expect("known type");
//! let lines = order.array_mut("lines").expect("array field");
//! lines.add();
//! lines
//!     .get_mut(0)
//!     .expect("first line")
//!     .as_record_mut()
//!     .expect("record element")
//!     .set("sku", "A-1")
//!     .expect("declared field");
//!
//! let bytes = order.serialize().expect("conforming content");
//! let decoded = factory.decode("ORDER", &bytes).expect("well formed");
//! assert_eq!(decoded, order);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

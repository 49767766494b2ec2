//! Clay: schema-driven message modelling.
//!
//! This crate turns a catalog of Avro-like record schemas into mutable,
//! schema-checked message objects that can be encoded by pluggable codecs
//! and handed to a transport.
//!
//! # Architecture
//!
//! Clay follows hexagonal architecture principles:
//!
//! - **Domain**: pure schema and message types with no infrastructure
//!   dependencies
//! - **Ports**: abstract capabilities for encoding and sending
//! - **Adapters**: concrete codecs, a directory schema loader and an
//!   in-memory messenger
//!
//! # Modules
//!
//! - [`schema`]: schema parsing and the message-type catalog
//! - [`message`]: the message model, its factory, codecs and transport port

pub mod message;
pub mod schema;

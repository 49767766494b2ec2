//! Message-type schemas and the catalog that holds them.
//!
//! A schema declares, in order, the fields of one message type and the kind
//! of each field. Schemas are described in an Avro-like JSON dialect, parsed
//! once when the catalog is loaded, and shared read-only afterwards.
//!
//! # Architecture
//!
//! - **Domain**: [`domain::FieldKind`], [`domain::FieldSpec`],
//!   [`domain::FieldList`] and [`domain::SchemaDefinition`]
//! - **Parser**: [`parser::parse_definition`] turns a JSON description into a
//!   definition, rejecting shapes the engine does not understand
//! - **Catalog**: [`catalog::SchemaCatalog`] maps message type names to
//!   definitions
//! - **Adapters**: [`adapters::directory`] loads a catalog from schema files
//!
//! # Example
//!
//! ```
//! use clay::schema::SchemaCatalog;
//! use serde_json::json;
//!
//! let catalog = SchemaCatalog::load([(
//!     "DEPOSIT",
//!     json!({
//!         "type": "record",
//!         "name": "DEPOSIT",
//!         "namespace": "EXAMPLES",
//!         "fields": [
//!             {"name": "client_id", "type": "string"},
//!             {"name": "amount", "type": "int"}
//!         ]
//!     }),
//! )])
//! .expect("valid catalog");
//!
//! let schema = catalog.get("DEPOSIT").expect("known type");
//! assert_eq!(schema.domain(), "EXAMPLES");
//! assert_eq!(schema.fields().names().collect::<Vec<_>>(), ["client_id", "amount"]);
//! ```

pub mod adapters;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod parser;

#[cfg(test)]
mod tests;

pub use catalog::SchemaCatalog;
pub use domain::{
    FieldKind, FieldList, FieldSpec, ItemKind, ScalarType, SchemaDefinition, SchemaFingerprint,
};
pub use error::{CatalogError, SchemaError};

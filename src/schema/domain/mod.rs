//! Domain types describing the shape of message schemas.
//!
//! These types are immutable once built and are shared between the catalog
//! and every message instantiated from it.

mod definition;
mod kind;
mod spec;

pub use definition::{SchemaDefinition, SchemaFingerprint};
pub use kind::{FieldKind, ItemKind, ScalarType};
pub use spec::{FieldList, FieldSpec};

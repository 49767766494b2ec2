//! Unit tests for the schema module.
//!
//! Tests are organised by component: the description parser, the catalog,
//! and the directory loader.

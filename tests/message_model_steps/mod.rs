//! Step definitions for message model BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;

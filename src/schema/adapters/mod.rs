//! Sources a catalog can be loaded from.
//!
//! - [`directory::load_directory`]: one schema file per message type

pub mod directory;

pub use directory::load_directory;

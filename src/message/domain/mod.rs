//! Domain types for the message subsystem.
//!
//! A [`Message`] owns one [`Field`] per declared schema field. Scalar
//! fields hold plain JSON values; records, arrays and matrices are explicit
//! containers that track whether they are set at all, so an absent
//! container and an empty one are different values.

mod array;
mod envelope;
mod field;
mod matrix;
mod message;
mod record;
mod table;

pub use array::ArrayField;
pub use envelope::{Envelope, EnvelopeId};
pub use field::Field;
pub use matrix::MatrixField;
pub use message::Message;
pub use record::RecordField;

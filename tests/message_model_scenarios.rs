//! Behaviour tests for building, mutating, encoding and sending messages.

mod message_model_steps;
mod test_helpers;

use message_model_steps::world::{ModelWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Record sub-fields appear after the first write"
)]
#[tokio::test(flavor = "multi_thread")]
async fn record_sub_fields_appear_after_first_write(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Elements of an array of records are added and deleted"
)]
#[tokio::test(flavor = "multi_thread")]
async fn array_elements_are_added_and_deleted(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Matrix rows are added and filled"
)]
#[tokio::test(flavor = "multi_thread")]
async fn matrix_rows_are_added_and_filled(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Messages with the same content are equal until one changes"
)]
#[tokio::test(flavor = "multi_thread")]
async fn equal_content_means_equal_messages(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Undeclared fields are rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn undeclared_fields_are_rejected(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Arrays refuse scalar content"
)]
#[tokio::test(flavor = "multi_thread")]
async fn arrays_refuse_scalar_content(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Unknown message types cannot be created"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_types_cannot_be_created(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Messages survive JSON encoding"
)]
#[tokio::test(flavor = "multi_thread")]
async fn messages_survive_json_encoding(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Messages survive MessagePack encoding"
)]
#[tokio::test(flavor = "multi_thread")]
async fn messages_survive_msgpack_encoding(world: ModelWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/message_model.feature",
    name = "Sent messages are delivered under their routing key"
)]
#[tokio::test(flavor = "multi_thread")]
async fn sent_messages_are_delivered(world: ModelWorld) {
    let _ = world;
}

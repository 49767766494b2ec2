//! Then steps for message model BDD scenarios.

use super::world::{ModelWorld, parse_json};
use clay::message::{
    domain::Message,
    error::{FactoryError, ModelError},
    ports::SendOutcome,
};
use eyre::eyre;
use rstest_bdd_macros::then;
use serde_json::Value;

#[then(r#"reading "{field}" of record "{record}" fails because the record is unset"#)]
fn reading_fails_while_unset(
    world: &mut ModelWorld,
    field: String,
    record: String,
) -> Result<(), eyre::Report> {
    match world.message()?.record(&record)?.get(&field) {
        Err(ModelError::AttributeNotAvailable(name)) if name == field => Ok(()),
        other => Err(eyre!("expected an unavailable attribute, got {other:?}")),
    }
}

#[then(r#""{field}" of record "{record}" is null"#)]
fn record_field_is_null(
    world: &mut ModelWorld,
    field: String,
    record: String,
) -> Result<(), eyre::Report> {
    let value = world.message()?.record(&record)?.get(&field)?;
    if !value.is_null() {
        return Err(eyre!("expected '{record}.{field}' to be null, found {value}"));
    }
    Ok(())
}

#[then(r#"field "{field}" has the content '{expected}'"#)]
fn field_has_content(
    world: &mut ModelWorld,
    field: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let wanted = parse_json(&expected)?;
    let actual = world.message()?.field(&field)?.content();
    if actual != wanted {
        return Err(eyre!("expected '{field}' to hold {wanted}, found {actual}"));
    }
    Ok(())
}

#[then(r#"array "{array}" has {count:usize} elements"#)]
fn array_has_elements(
    world: &mut ModelWorld,
    array: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let len = world.message()?.array(&array)?.len()?;
    if len != count {
        return Err(eyre!("expected {count} elements in '{array}', found {len}"));
    }
    Ok(())
}

fn first_two(world: &ModelWorld) -> Result<(&Message, &Message), eyre::Report> {
    match world.messages.as_slice() {
        [first, second, ..] => Ok((first, second)),
        _ => Err(eyre!("expected two messages, found {}", world.messages.len())),
    }
}

#[then("the messages are equal")]
fn messages_are_equal(world: &mut ModelWorld) -> Result<(), eyre::Report> {
    let (first, second) = first_two(world)?;
    if first != second {
        return Err(eyre!("expected equal messages: {first:?} vs {second:?}"));
    }
    Ok(())
}

#[then("the messages are not equal")]
fn messages_are_not_equal(world: &mut ModelWorld) -> Result<(), eyre::Report> {
    let (first, second) = first_two(world)?;
    if first == second {
        return Err(eyre!("expected the messages to differ"));
    }
    Ok(())
}

#[then("the update fails with an unknown field error")]
fn update_fails_with_unknown_field(world: &mut ModelWorld) -> Result<(), eyre::Report> {
    match world.last_update.as_ref() {
        Some(Err(ModelError::UnknownField(_))) => Ok(()),
        other => Err(eyre!("expected an unknown field error, got {other:?}")),
    }
}

#[then("the update fails with an invalid content error")]
fn update_fails_with_invalid_content(world: &mut ModelWorld) -> Result<(), eyre::Report> {
    match world.last_update.as_ref() {
        Some(Err(ModelError::InvalidContent { .. })) => Ok(()),
        other => Err(eyre!("expected an invalid content error, got {other:?}")),
    }
}

#[then("the request fails with an invalid message error")]
fn request_fails_with_invalid_message(world: &mut ModelWorld) -> Result<(), eyre::Report> {
    match world.last_request.as_ref() {
        Some(Err(err @ FactoryError::InvalidMessage { .. })) if err.is_unknown_type() => Ok(()),
        other => Err(eyre!("expected an invalid message error, got {other:?}")),
    }
}

#[then("the decoded message equals the original")]
fn decoded_equals_original(world: &mut ModelWorld) -> Result<(), eyre::Report> {
    let decoded = world
        .decoded
        .as_ref()
        .ok_or_else(|| eyre!("no decoded message in scenario world"))?;
    let original = world.message()?;
    if decoded != original {
        return Err(eyre!(
            "decoded {} differs from original {}",
            Value::Object(decoded.content()),
            Value::Object(original.content())
        ));
    }
    Ok(())
}

#[then(r#"the message is delivered with routing key "{key}""#)]
fn message_is_delivered(world: &mut ModelWorld, key: String) -> Result<(), eyre::Report> {
    let Some(Ok(SendOutcome::Delivered(id))) = world.last_send.as_ref() else {
        return Err(eyre!("expected a delivery, got {:?}", world.last_send));
    };
    let delivered = world.messenger.delivered();
    let envelope = delivered
        .iter()
        .find(|envelope| envelope.id == *id)
        .ok_or_else(|| eyre!("envelope {id} was not recorded"))?;
    if envelope.routing_key != key {
        return Err(eyre!(
            "expected routing key '{key}', found '{}'",
            envelope.routing_key
        ));
    }
    Ok(())
}

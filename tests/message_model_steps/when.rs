//! When steps for message model BDD scenarios.

use super::world::{ModelWorld, parse_json, run_async};
use clay::message::ports::Messenger;
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::when;
use serde_json::Value;

#[when(r#""{field}" of record "{record}" is set to "{value}""#)]
fn record_field_is_set(
    world: &mut ModelWorld,
    field: String,
    record: String,
    value: String,
) -> Result<(), eyre::Report> {
    world
        .message_mut()?
        .record_mut(&record)?
        .set(&field, value)
        .wrap_err("set record sub-field")?;
    Ok(())
}

#[when(r#"an element is added to array "{array}""#)]
fn element_is_added(world: &mut ModelWorld, array: String) -> Result<(), eyre::Report> {
    world.message_mut()?.array_mut(&array)?.add();
    Ok(())
}

#[when(r#""{field}" of element {index:usize} in array "{array}" is set to "{value}""#)]
fn element_field_is_set(
    world: &mut ModelWorld,
    field: String,
    index: usize,
    array: String,
    value: String,
) -> Result<(), eyre::Report> {
    world
        .message_mut()?
        .array_mut(&array)?
        .get_mut(index)?
        .as_record_mut()
        .ok_or_else(|| eyre!("element {index} of '{array}' is not a record"))?
        .set(&field, value)?;
    Ok(())
}

#[when(r#"element {index:usize} of array "{array}" is deleted"#)]
fn element_is_deleted(
    world: &mut ModelWorld,
    index: usize,
    array: String,
) -> Result<(), eyre::Report> {
    world.message_mut()?.array_mut(&array)?.remove(index)?;
    Ok(())
}

#[when(r#"a row is added to matrix "{matrix}""#)]
fn row_is_added(world: &mut ModelWorld, matrix: String) -> Result<(), eyre::Report> {
    world.message_mut()?.matrix_mut(&matrix)?.add();
    Ok(())
}

#[when(r#"the value "{value}" is appended to row {row:usize} of matrix "{matrix}""#)]
fn value_is_appended_to_row(
    world: &mut ModelWorld,
    value: String,
    row: usize,
    matrix: String,
) -> Result<(), eyre::Report> {
    world
        .message_mut()?
        .matrix_mut(&matrix)?
        .row_mut(row)?
        .add_with(&Value::from(value))?;
    Ok(())
}

#[when(r#"cell {cell:usize} of row {row:usize} in matrix "{matrix}" is set to "{value}""#)]
fn cell_is_set(
    world: &mut ModelWorld,
    cell: usize,
    row: usize,
    matrix: String,
    value: String,
) -> Result<(), eyre::Report> {
    world
        .message_mut()?
        .matrix_mut(&matrix)?
        .row_mut(row)?
        .set(cell, &Value::from(value))?;
    Ok(())
}

#[when(r#"the row '{row}' is appended to matrix "{matrix}""#)]
fn row_is_appended(world: &mut ModelWorld, row: String, matrix: String) -> Result<(), eyre::Report> {
    let content = parse_json(&row)?;
    world.message_mut()?.matrix_mut(&matrix)?.add_with(&content)?;
    Ok(())
}

#[when("both messages receive the content '{content}'")]
fn both_messages_receive(world: &mut ModelWorld, content: String) -> Result<(), eyre::Report> {
    let value = parse_json(&content)?;
    if world.messages.len() < 2 {
        return Err(eyre!("expected two messages, found {}", world.messages.len()));
    }
    for message in &mut world.messages {
        message.set_content(&value).wrap_err("apply shared content")?;
    }
    Ok(())
}

#[when("the content '{content}' is applied")]
fn content_is_applied(world: &mut ModelWorld, content: String) -> Result<(), eyre::Report> {
    let value = parse_json(&content)?;
    let result = world.message_mut()?.set_content(&value);
    world.last_update = Some(result);
    Ok(())
}

#[when(r#"array "{array}" is given the content '{content}'"#)]
fn array_is_given_content(
    world: &mut ModelWorld,
    array: String,
    content: String,
) -> Result<(), eyre::Report> {
    let value = parse_json(&content)?;
    let result = world.message_mut()?.array_mut(&array)?.set_content(&value);
    world.last_update = Some(result);
    Ok(())
}

#[when(r#"a "{message_type}" message is requested"#)]
fn message_is_requested(world: &mut ModelWorld, message_type: String) {
    world.last_request = Some(world.factory.create(&message_type));
}

#[when("the message is encoded and decoded")]
fn message_is_encoded_and_decoded(world: &mut ModelWorld) -> Result<(), eyre::Report> {
    let message = world.message()?;
    let payload = message.serialize().wrap_err("encode message")?;
    let decoded = world
        .factory
        .decode(message.message_type(), &payload)
        .wrap_err("decode message")?;
    world.decoded = Some(decoded);
    Ok(())
}

#[when("the message is sent")]
fn message_is_sent(world: &mut ModelWorld) -> Result<(), eyre::Report> {
    let result = run_async(world.messenger.send(world.message()?));
    world.last_send = Some(result);
    Ok(())
}

//! Given steps for message model BDD scenarios.

use super::world::{ModelWorld, codec_named};
use crate::test_helpers::test_factory;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a message factory using the "{codec}" codec"#)]
fn a_factory_using_codec(world: &mut ModelWorld, codec: String) -> Result<(), eyre::Report> {
    world.factory = test_factory(codec_named(&codec)?)?;
    Ok(())
}

#[given(r#"a new "{message_type}" message"#)]
fn a_new_message(world: &mut ModelWorld, message_type: String) -> Result<(), eyre::Report> {
    let message = world
        .factory
        .create(&message_type)
        .wrap_err("create message for scenario")?;
    world.messages.push(message);
    Ok(())
}

#[given(r#"a messenger with a queue for domain "{domain}""#)]
fn a_messenger_with_queue(world: &mut ModelWorld, domain: String) -> Result<(), eyre::Report> {
    world
        .messenger
        .add_queue(domain, true, false)
        .wrap_err("register queue for scenario")?;
    Ok(())
}

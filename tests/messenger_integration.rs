//! Integration tests for handing messages to the in-memory messenger.
//!
//! The messenger is driven through the `Messenger` trait object, the way a
//! transport-agnostic caller would hold it.

mod test_helpers;

use std::sync::Arc;

use clay::message::{
    adapters::{JsonCodec, memory::InMemoryMessenger},
    ports::{Messenger, MessengerConfig, MessengerError, SendOutcome},
    services::MessageFactory,
};
use eyre::{Result, eyre};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use test_helpers::test_factory;

#[fixture]
fn factory() -> MessageFactory {
    test_factory(Arc::new(JsonCodec)).expect("test catalog is valid")
}

#[fixture]
fn messenger() -> Arc<InMemoryMessenger<DefaultClock>> {
    let messenger = InMemoryMessenger::new(DefaultClock);
    messenger
        .add_queue("TEST", true, false)
        .expect("queue registration should succeed");
    Arc::new(messenger)
}

#[rstest]
#[tokio::test]
async fn delivered_envelopes_carry_the_encoded_message(
    factory: MessageFactory,
    messenger: Arc<InMemoryMessenger<DefaultClock>>,
) -> Result<()> {
    let port: Arc<dyn Messenger> = messenger.clone();
    let mut message = factory.create("TEST")?;
    message.set("id", 42)?;

    let outcome = port.send(&message).await?;

    let SendOutcome::Delivered(id) = outcome else {
        return Err(eyre!("expected delivery, got {outcome:?}"));
    };
    let delivered = messenger.delivered();
    let [envelope] = delivered.as_slice() else {
        return Err(eyre!("expected one envelope, got {}", delivered.len()));
    };
    assert_eq!(envelope.id, id);
    assert_eq!(envelope.routing_key, "TEST/TEST");
    assert_eq!(envelope.domain(), "TEST");
    let decoded = factory.decode("TEST", &envelope.payload)?;
    assert_eq!(decoded, message);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn unbound_domains_are_rejected(factory: MessageFactory) -> Result<()> {
    let messenger = InMemoryMessenger::new(DefaultClock);
    let message = factory.create("TEST_COMPLEX")?;

    let result = messenger.send(&message).await;

    assert_eq!(result, Err(MessengerError::NoQueue("TEST".to_owned())));
    assert!(messenger.delivered().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn offline_sends_are_delivered_in_order_after_reconnecting(
    factory: MessageFactory,
    messenger: Arc<InMemoryMessenger<DefaultClock>>,
) -> Result<()> {
    messenger.set_online(false)?;
    for id in 1_usize..=3 {
        let mut message = factory.create("TEST")?;
        message.set("id", id)?;
        let outcome = messenger.send(&message).await?;
        assert_eq!(outcome, SendOutcome::Spooled { queued: id });
    }
    assert!(messenger.delivered().is_empty());

    messenger.set_online(true)?;
    let flushed = messenger.flush_spool()?;

    assert_eq!(flushed, 3);
    assert_eq!(messenger.spooled_len(), 0);
    let ids = messenger
        .delivered()
        .iter()
        .map(|envelope| serde_json::from_slice::<Value>(&envelope.payload))
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(
        ids,
        vec![
            json!({"id": 1, "name": null}),
            json!({"id": 2, "name": null}),
            json!({"id": 3, "name": null}),
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn oversized_payloads_are_refused(factory: MessageFactory) -> Result<()> {
    let config = MessengerConfig {
        max_payload_bytes: Some(16),
        ..MessengerConfig::default()
    };
    let messenger = InMemoryMessenger::with_config(DefaultClock, config);
    messenger.add_queue("TEST", false, false)?;
    let mut message = factory.create("TEST")?;
    message.set("name", "a name long enough to overflow the limit")?;

    let result = messenger.send(&message).await;

    assert!(matches!(
        result,
        Err(MessengerError::PayloadTooLarge { limit: 16, .. })
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_senders_share_one_broker(
    factory: MessageFactory,
    messenger: Arc<InMemoryMessenger<DefaultClock>>,
) -> Result<()> {
    let mut handles = Vec::new();
    for id in 0..8 {
        let mut message = factory.create("TEST")?;
        message.set("id", id)?;
        let sender = Arc::clone(&messenger);
        handles.push(tokio::spawn(async move { sender.send(&message).await }));
    }

    for handle in handles {
        assert!(handle.await??.is_delivered());
    }

    assert_eq!(messenger.delivered().len(), 8);
    Ok(())
}

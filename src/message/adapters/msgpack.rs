//! `MessagePack` codec backed by `rmp-serde`.

use super::conformance::check_content;
use crate::message::ports::codec::{Codec, CodecError, CodecResult};
use crate::schema::domain::SchemaDefinition;
use serde_json::{Map, Value};

const NAME: &str = "msgpack";

/// Encodes content as a `MessagePack` map keyed by field name.
///
/// # Examples
///
/// ```
/// use clay::message::adapters::MsgPackCodec;
/// use clay::message::ports::Codec;
/// use clay::schema::SchemaCatalog;
/// use serde_json::json;
///
/// let catalog = SchemaCatalog::from_json(&json!({
///     "PING": {"name": "PING", "fields": [{"name": "seq", "type": "long"}]}
/// }))
/// .expect("valid catalog");
/// let schema = catalog.get("PING").expect("known type");
/// let content = json!({"seq": 42});
/// let content = content.as_object().expect("object");
///
/// let bytes = MsgPackCodec.serialize(schema, content).expect("conforming");
/// let decoded = MsgPackCodec.deserialize(schema, &bytes).expect("well formed");
/// assert_eq!(&decoded, content);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackCodec;

impl Codec for MsgPackCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn serialize(
        &self,
        schema: &SchemaDefinition,
        content: &Map<String, Value>,
    ) -> CodecResult<Vec<u8>> {
        check_content(schema, content)?;
        rmp_serde::to_vec_named(content).map_err(|err| CodecError::encode(NAME, err))
    }

    fn deserialize(
        &self,
        schema: &SchemaDefinition,
        payload: &[u8],
    ) -> CodecResult<Map<String, Value>> {
        let decoded: Value =
            rmp_serde::from_slice(payload).map_err(|err| CodecError::decode(NAME, err))?;
        let Value::Object(content) = decoded else {
            return Err(CodecError::NotAMapping);
        };
        check_content(schema, &content)?;
        Ok(content)
    }
}

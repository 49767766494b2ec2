//! JSON codec backed by `serde_json`.

use super::conformance::check_content;
use crate::message::ports::codec::{Codec, CodecError, CodecResult};
use crate::schema::domain::SchemaDefinition;
use serde_json::{Map, Value};

const NAME: &str = "json";

/// Encodes content as a JSON object, fields in schema order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn serialize(
        &self,
        schema: &SchemaDefinition,
        content: &Map<String, Value>,
    ) -> CodecResult<Vec<u8>> {
        check_content(schema, content)?;
        serde_json::to_vec(content).map_err(|err| CodecError::encode(NAME, err))
    }

    fn deserialize(
        &self,
        schema: &SchemaDefinition,
        payload: &[u8],
    ) -> CodecResult<Map<String, Value>> {
        let decoded: Value =
            serde_json::from_slice(payload).map_err(|err| CodecError::decode(NAME, err))?;
        let Value::Object(content) = decoded else {
            return Err(CodecError::NotAMapping);
        };
        check_content(schema, &content)?;
        Ok(content)
    }
}

//! The `{kind, payload}` envelope shared by every expression family.
//!
//! Field 1 carries the kind code and field 2 the payload bytes. The payload
//! is always written, even when empty, so an envelope is never zero-length.

use bytes::Bytes;

use crate::error::{CodecError, CodecResult};
use crate::wire::{WireEnum, WireMapped, WireReader, WireWriter};

const KIND_FIELD: u32 = 1;
const PAYLOAD_FIELD: u32 = 2;

/// Frame `payload` behind `kind`.
#[must_use]
pub fn encode_envelope<K: WireMapped>(kind: K, payload: &[u8]) -> Bytes {
    let mut writer = WireWriter::new();
    writer.put_mapped(KIND_FIELD, kind);
    writer.put_bytes(PAYLOAD_FIELD, payload);
    writer.finish()
}

/// Split an envelope into its kind and payload.
///
/// `family` names the envelope in errors. A missing kind reads as code 0,
/// which no family assigns, and fails with `UnsupportedVariant` like any
/// other foreign code. A missing payload reads as empty.
pub fn decode_envelope<K: WireMapped>(
    family: &'static str,
    bytes: Bytes,
) -> CodecResult<(K, Bytes)> {
    let mut reader = WireReader::new(family, bytes);
    let mut code = 0;
    let mut payload = Bytes::new();

    while let Some(field) = reader.next_field()? {
        match field.number() {
            KIND_FIELD => code = field.into_i32()?,
            PAYLOAD_FIELD => payload = field.into_bytes()?,
            _ => return Err(field.unexpected()),
        }
    }

    let wire = K::Wire::from_code(code).ok_or(CodecError::UnsupportedVariant {
        kind_enum: K::Wire::NAME,
        code,
    })?;
    Ok((K::from_wire(wire), payload))
}

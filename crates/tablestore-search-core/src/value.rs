//! Column value blobs.
//!
//! Column values travel inside `bytes` fields as a one-byte type tag
//! followed by little-endian data:
//!
//! | Tag | Type | Data |
//! |-----|------|------|
//! | `0x00` | integer | 8 bytes |
//! | `0x01` | double | 8 bytes |
//! | `0x02` | boolean | 1 byte, `0` or `1` |
//! | `0x03` | string | `u32` length + UTF-8 |
//! | `0x07` | binary | `u32` length + bytes |

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tablestore_search_model::ColumnValue;

use crate::error::{CodecError, CodecResult};

const MESSAGE: &str = "ColumnValue";

const TAG_INTEGER: u8 = 0x00;
const TAG_DOUBLE: u8 = 0x01;
const TAG_BOOLEAN: u8 = 0x02;
const TAG_STRING: u8 = 0x03;
const TAG_BINARY: u8 = 0x07;

/// Encode a column value blob.
pub fn encode_column_value(value: &ColumnValue) -> CodecResult<Bytes> {
    let mut buf = BytesMut::new();
    match value {
        ColumnValue::Integer(v) => {
            buf.put_u8(TAG_INTEGER);
            buf.put_i64_le(*v);
        }
        ColumnValue::Double(v) => {
            buf.put_u8(TAG_DOUBLE);
            buf.put_f64_le(*v);
        }
        ColumnValue::Boolean(v) => {
            buf.put_u8(TAG_BOOLEAN);
            buf.put_u8(u8::from(*v));
        }
        ColumnValue::String(v) => {
            buf.put_u8(TAG_STRING);
            put_length_prefixed(&mut buf, v.as_bytes())?;
        }
        ColumnValue::Binary(v) => {
            buf.put_u8(TAG_BINARY);
            put_length_prefixed(&mut buf, v)?;
        }
    }
    Ok(buf.freeze())
}

/// Decode a column value blob.
pub fn decode_column_value(mut buf: &[u8]) -> CodecResult<ColumnValue> {
    if !buf.has_remaining() {
        return Err(CodecError::malformed(MESSAGE, "empty value"));
    }
    let tag = buf.get_u8();
    let value = match tag {
        TAG_INTEGER => {
            ensure(buf, 8)?;
            ColumnValue::Integer(buf.get_i64_le())
        }
        TAG_DOUBLE => {
            ensure(buf, 8)?;
            ColumnValue::Double(buf.get_f64_le())
        }
        TAG_BOOLEAN => {
            ensure(buf, 1)?;
            match buf.get_u8() {
                0 => ColumnValue::Boolean(false),
                1 => ColumnValue::Boolean(true),
                other => {
                    return Err(CodecError::malformed(
                        MESSAGE,
                        format!("invalid boolean byte {other:#04x}"),
                    ));
                }
            }
        }
        TAG_STRING => {
            let raw = get_length_prefixed(&mut buf)?;
            let s = String::from_utf8(raw.to_vec())
                .map_err(|_| CodecError::malformed(MESSAGE, "string is not valid UTF-8"))?;
            ColumnValue::String(s)
        }
        TAG_BINARY => ColumnValue::Binary(Bytes::copy_from_slice(get_length_prefixed(&mut buf)?)),
        other => {
            return Err(CodecError::UnknownEnumValue {
                enum_name: "VariantType",
                raw: i64::from(other),
            });
        }
    };
    if buf.has_remaining() {
        return Err(CodecError::malformed(
            MESSAGE,
            format!("{} trailing bytes", buf.remaining()),
        ));
    }
    Ok(value)
}

fn put_length_prefixed(buf: &mut BytesMut, data: &[u8]) -> CodecResult<()> {
    let len = u32::try_from(data.len()).map_err(|_| CodecError::MessageTooLarge {
        size: data.len(),
        limit: u32::MAX as usize,
    })?;
    buf.put_u32_le(len);
    buf.put_slice(data);
    Ok(())
}

fn get_length_prefixed<'a>(buf: &mut &'a [u8]) -> CodecResult<&'a [u8]> {
    ensure(buf, 4)?;
    let len = buf.get_u32_le() as usize;
    ensure(buf, len)?;
    let slice: &'a [u8] = *buf;
    let (data, rest) = slice.split_at(len);
    *buf = rest;
    Ok(data)
}

fn ensure(buf: &[u8], len: usize) -> CodecResult<()> {
    if buf.len() < len {
        return Err(CodecError::malformed(
            MESSAGE,
            format!("needs {len} bytes but only {} remain", buf.len()),
        ));
    }
    Ok(())
}

//! Message reader.

use std::collections::HashMap;

use bytes::{Buf, Bytes};
use prost::encoding::{self, DecodeContext, WireType};
use prost::DecodeError;
use tablestore_search_model::ColumnValue;

use super::enums::{WireEnum, WireMapped};
use super::wire_type_name;
use crate::error::{CodecError, CodecResult, PathSegment};
use crate::registry::{decode_message, decode_node, Family, WireMessage};
use crate::value::decode_column_value;

/// Iterates over the tagged fields of one message.
#[derive(Debug)]
pub struct WireReader {
    message: &'static str,
    buf: Bytes,
    seen: HashMap<u32, usize>,
}

impl WireReader {
    /// Read the fields of `message` from `buf`.
    #[must_use]
    pub fn new(message: &'static str, buf: Bytes) -> Self {
        Self {
            message,
            buf,
            seen: HashMap::new(),
        }
    }

    /// The message being read.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// The next field, or `None` at the end of the message.
    pub fn next_field(&mut self) -> CodecResult<Option<Field>> {
        if !self.buf.has_remaining() {
            return Ok(None);
        }

        let (number, wire_type) =
            encoding::decode_key(&mut self.buf).map_err(|e| self.malformed(&e))?;
        let value = self.read_value(wire_type)?;

        let occurrence = self.seen.entry(number).or_insert(0);
        let index = *occurrence;
        *occurrence += 1;

        Ok(Some(Field {
            message: self.message,
            number,
            index,
            value,
        }))
    }

    fn read_value(&mut self, wire_type: WireType) -> CodecResult<WireValue> {
        let ctx = DecodeContext::default();
        let value = match wire_type {
            WireType::Varint => encoding::decode_varint(&mut self.buf).map(WireValue::Varint),
            WireType::SixtyFourBit => {
                let mut raw = 0_u64;
                encoding::fixed64::merge(wire_type, &mut raw, &mut self.buf, ctx)
                    .map(|()| WireValue::Fixed64(raw))
            }
            WireType::ThirtyTwoBit => {
                let mut raw = 0_u32;
                encoding::fixed32::merge(wire_type, &mut raw, &mut self.buf, ctx)
                    .map(|()| WireValue::Fixed32(raw))
            }
            WireType::LengthDelimited => {
                let mut bytes = Bytes::new();
                encoding::bytes::merge(wire_type, &mut bytes, &mut self.buf, ctx)
                    .map(|()| WireValue::Bytes(bytes))
            }
            WireType::StartGroup | WireType::EndGroup => {
                return Err(CodecError::malformed(
                    self.message,
                    format!("unsupported wire type {}", wire_type_name(wire_type)),
                ));
            }
        };
        value.map_err(|e| self.malformed(&e))
    }

    fn malformed(&self, err: &DecodeError) -> CodecError {
        CodecError::malformed(self.message, err.to_string())
    }
}

#[derive(Debug)]
enum WireValue {
    Varint(u64),
    Fixed64(u64),
    Fixed32(u32),
    Bytes(Bytes),
}

impl WireValue {
    const fn wire_type(&self) -> WireType {
        match self {
            Self::Varint(_) => WireType::Varint,
            Self::Fixed64(_) => WireType::SixtyFourBit,
            Self::Fixed32(_) => WireType::ThirtyTwoBit,
            Self::Bytes(_) => WireType::LengthDelimited,
        }
    }
}

/// One decoded field, consumed by converting it to its expected type.
#[derive(Debug)]
pub struct Field {
    message: &'static str,
    number: u32,
    index: usize,
    value: WireValue,
}

impl Field {
    /// The field number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// How many fields with this number came before this one.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The error for a field number the message does not define.
    #[must_use]
    pub fn unexpected(self) -> CodecError {
        CodecError::malformed(self.message, format!("unknown field {}", self.number))
    }

    /// Read an `int64`.
    pub fn into_i64(self) -> CodecResult<i64> {
        let raw = self.into_varint()?;
        Ok(i64::from_ne_bytes(raw.to_ne_bytes()))
    }

    /// Read an `int32`.
    pub fn into_i32(self) -> CodecResult<i32> {
        let (message, number) = (self.message, self.number);
        let value = self.into_i64()?;
        i32::try_from(value).map_err(|_| {
            CodecError::malformed(message, format!("field {number} value {value} overflows int32"))
        })
    }

    /// Read a `bool`.
    pub fn into_bool(self) -> CodecResult<bool> {
        Ok(self.into_varint()? != 0)
    }

    /// Read a `float`.
    pub fn into_f32(self) -> CodecResult<f32> {
        match self.value {
            WireValue::Fixed32(bits) => Ok(f32::from_bits(bits)),
            _ => Err(self.mismatch(WireType::ThirtyTwoBit)),
        }
    }

    /// Read a `double`.
    pub fn into_f64(self) -> CodecResult<f64> {
        match self.value {
            WireValue::Fixed64(bits) => Ok(f64::from_bits(bits)),
            _ => Err(self.mismatch(WireType::SixtyFourBit)),
        }
    }

    /// Read a `bytes` field.
    pub fn into_bytes(self) -> CodecResult<Bytes> {
        match self.value {
            WireValue::Bytes(bytes) => Ok(bytes),
            _ => Err(self.mismatch(WireType::LengthDelimited)),
        }
    }

    /// Read a `string`.
    pub fn into_string(self) -> CodecResult<String> {
        let (message, number) = (self.message, self.number);
        let bytes = self.into_bytes()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| {
            CodecError::malformed(message, format!("field {number} is not valid UTF-8"))
        })
    }

    /// Read a wire enum.
    pub fn into_enum<E: WireEnum>(self) -> CodecResult<E> {
        let code = self.into_i32()?;
        E::from_code(code).ok_or(CodecError::UnknownEnumValue {
            enum_name: E::NAME,
            raw: i64::from(code),
        })
    }

    /// Read a domain enum through its wire mapping.
    pub fn into_mapped<D: WireMapped>(self) -> CodecResult<D> {
        Ok(D::from_wire(self.into_enum::<D::Wire>()?))
    }

    /// Read a `repeated float`, packed or not.
    pub fn into_packed_f32(self) -> CodecResult<Vec<f32>> {
        match self.value {
            WireValue::Fixed32(bits) => Ok(vec![f32::from_bits(bits)]),
            WireValue::Bytes(ref bytes) => {
                let mut bytes = bytes.clone();
                if bytes.len() % 4 != 0 {
                    return Err(self.packed_len_error("float", bytes.len()));
                }
                let mut values = Vec::with_capacity(bytes.len() / 4);
                while bytes.has_remaining() {
                    let mut value = 0_f32;
                    encoding::float::merge(
                        WireType::ThirtyTwoBit,
                        &mut value,
                        &mut bytes,
                        DecodeContext::default(),
                    )
                    .map_err(|e| CodecError::malformed(self.message, e.to_string()))?;
                    values.push(value);
                }
                Ok(values)
            }
            _ => Err(self.mismatch(WireType::LengthDelimited)),
        }
    }

    /// Read a `repeated double`, packed or not.
    pub fn into_packed_f64(self) -> CodecResult<Vec<f64>> {
        match self.value {
            WireValue::Fixed64(bits) => Ok(vec![f64::from_bits(bits)]),
            WireValue::Bytes(ref bytes) => {
                let mut bytes = bytes.clone();
                if bytes.len() % 8 != 0 {
                    return Err(self.packed_len_error("double", bytes.len()));
                }
                let mut values = Vec::with_capacity(bytes.len() / 8);
                while bytes.has_remaining() {
                    let mut value = 0_f64;
                    encoding::double::merge(
                        WireType::SixtyFourBit,
                        &mut value,
                        &mut bytes,
                        DecodeContext::default(),
                    )
                    .map_err(|e| CodecError::malformed(self.message, e.to_string()))?;
                    values.push(value);
                }
                Ok(values)
            }
            _ => Err(self.mismatch(WireType::LengthDelimited)),
        }
    }

    /// Read a nested message held by the field called `name`.
    pub fn into_message<M: WireMessage>(self, name: &'static str) -> CodecResult<M> {
        let segment = PathSegment::new(self.message, name);
        decode_message(self.into_bytes()?).map_err(|err| err.within(segment))
    }

    /// Read one element of a repeated message field called `name`.
    pub fn into_message_item<M: WireMessage>(self, name: &'static str) -> CodecResult<M> {
        let segment = PathSegment::item(self.message, name, self.index);
        decode_message(self.into_bytes()?).map_err(|err| err.within(segment))
    }

    /// Read a family node from its envelope.
    pub fn into_node<F: Family>(self, name: &'static str) -> CodecResult<F> {
        let segment = PathSegment::new(self.message, name);
        decode_node(self.into_bytes()?).map_err(|err| err.within(segment))
    }

    /// Read one element of a repeated node field called `name`.
    pub fn into_node_item<F: Family>(self, name: &'static str) -> CodecResult<F> {
        let segment = PathSegment::item(self.message, name, self.index);
        decode_node(self.into_bytes()?).map_err(|err| err.within(segment))
    }

    /// Read a column value blob.
    pub fn into_column_value(self) -> CodecResult<ColumnValue> {
        decode_column_value(&self.into_bytes()?)
    }

    fn into_varint(self) -> CodecResult<u64> {
        match self.value {
            WireValue::Varint(raw) => Ok(raw),
            _ => Err(self.mismatch(WireType::Varint)),
        }
    }

    fn packed_len_error(&self, kind: &str, len: usize) -> CodecError {
        CodecError::malformed(
            self.message,
            format!("packed {kind} field {} has {len} bytes", self.number),
        )
    }

    fn mismatch(&self, expected: WireType) -> CodecError {
        CodecError::malformed(
            self.message,
            format!(
                "field {} expected {}, found {}",
                self.number,
                wire_type_name(expected),
                wire_type_name(self.value.wire_type())
            ),
        )
    }
}

//! Message writer.

use bytes::{BufMut, Bytes, BytesMut};
use prost::encoding::{self, WireType};
use tablestore_search_model::ColumnValue;

use super::enums::{WireEnum, WireMapped};
use crate::error::{CodecResult, PathSegment};
use crate::registry::{encode_message, encode_node, Family, WireMessage};
use crate::value::encode_column_value;

/// Appends tagged fields to a growing buffer.
///
/// A writer opened with [`WireWriter::for_message`] knows the message it
/// writes, so a required field missing in a child is reported with the
/// parent field that led to it.
#[derive(Debug, Default)]
pub struct WireWriter {
    message: &'static str,
    buf: BytesMut,
}

impl WireWriter {
    /// An empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty writer for the fields of `message`.
    #[must_use]
    pub fn for_message(message: &'static str) -> Self {
        Self {
            message,
            buf: BytesMut::new(),
        }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Freeze the written bytes.
    #[must_use]
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }

    // -- scalars ------------------------------------------------------------

    /// Write an `int32` field; negative values take ten bytes.
    pub fn put_i32(&mut self, field: u32, value: i32) {
        encoding::int32::encode(field, &value, &mut self.buf);
    }

    /// Write an `int64` field.
    pub fn put_i64(&mut self, field: u32, value: i64) {
        encoding::int64::encode(field, &value, &mut self.buf);
    }

    /// Write a `bool` field.
    pub fn put_bool(&mut self, field: u32, value: bool) {
        encoding::bool::encode(field, &value, &mut self.buf);
    }

    /// Write a `float` field.
    pub fn put_f32(&mut self, field: u32, value: f32) {
        encoding::float::encode(field, &value, &mut self.buf);
    }

    /// Write a `double` field.
    pub fn put_f64(&mut self, field: u32, value: f64) {
        encoding::double::encode(field, &value, &mut self.buf);
    }

    /// Write a `bytes` field.
    pub fn put_bytes(&mut self, field: u32, value: &[u8]) {
        self.put_len_prefix(field, value.len());
        self.buf.put_slice(value);
    }

    /// Write a `string` field.
    pub fn put_str(&mut self, field: u32, value: &str) {
        self.put_bytes(field, value.as_bytes());
    }

    /// Write a wire enum field.
    pub fn put_enum<E: WireEnum>(&mut self, field: u32, value: E) {
        self.put_i32(field, value.code());
    }

    /// Write a domain enum through its wire mapping.
    pub fn put_mapped<D: WireMapped>(&mut self, field: u32, value: D) {
        self.put_enum(field, value.to_wire());
    }

    /// Write a packed `repeated float` field, even when empty.
    pub fn put_packed_f32(&mut self, field: u32, values: &[f32]) {
        self.put_len_prefix(field, values.len() * 4);
        for value in values {
            self.buf.put_f32_le(*value);
        }
    }

    /// Write a packed `repeated double` field, even when empty.
    pub fn put_packed_f64(&mut self, field: u32, values: &[f64]) {
        self.put_len_prefix(field, values.len() * 8);
        for value in values {
            self.buf.put_f64_le(*value);
        }
    }

    // -- nested -------------------------------------------------------------

    /// Write a nested message held by the field called `name`.
    pub fn put_message<M: WireMessage>(
        &mut self,
        field: u32,
        name: &'static str,
        message: &M,
    ) -> CodecResult<()> {
        let segment = PathSegment::new(self.message, name);
        self.put_child(field, segment, encode_message(message))
    }

    /// Write each message of a list as a repeated field called `name`.
    pub fn put_messages<M: WireMessage>(
        &mut self,
        field: u32,
        name: &'static str,
        messages: &[M],
    ) -> CodecResult<()> {
        for (index, message) in messages.iter().enumerate() {
            let segment = PathSegment::item(self.message, name, index);
            self.put_child(field, segment, encode_message(message))?;
        }
        Ok(())
    }

    /// Write a family node wrapped in its envelope.
    pub fn put_node<F: Family>(
        &mut self,
        field: u32,
        name: &'static str,
        node: &F,
    ) -> CodecResult<()> {
        let segment = PathSegment::new(self.message, name);
        self.put_child(field, segment, encode_node(node))
    }

    /// Write each node of a list as a repeated envelope field.
    pub fn put_nodes<F: Family>(
        &mut self,
        field: u32,
        name: &'static str,
        nodes: &[F],
    ) -> CodecResult<()> {
        for (index, node) in nodes.iter().enumerate() {
            let segment = PathSegment::item(self.message, name, index);
            self.put_child(field, segment, encode_node(node))?;
        }
        Ok(())
    }

    /// Write a column value blob.
    pub fn put_column_value(&mut self, field: u32, value: &ColumnValue) -> CodecResult<()> {
        let bytes = encode_column_value(value)?;
        self.put_bytes(field, &bytes);
        Ok(())
    }

    // -- optional -----------------------------------------------------------

    /// Write a `string` field if set.
    pub fn put_opt_str(&mut self, field: u32, value: Option<&str>) {
        if let Some(value) = value {
            self.put_str(field, value);
        }
    }

    /// Write an `int32` field if set.
    pub fn put_opt_i32(&mut self, field: u32, value: Option<i32>) {
        if let Some(value) = value {
            self.put_i32(field, value);
        }
    }

    /// Write an `int64` field if set.
    pub fn put_opt_i64(&mut self, field: u32, value: Option<i64>) {
        if let Some(value) = value {
            self.put_i64(field, value);
        }
    }

    /// Write a `float` field if set.
    pub fn put_opt_f32(&mut self, field: u32, value: Option<f32>) {
        if let Some(value) = value {
            self.put_f32(field, value);
        }
    }

    /// Write a `double` field if set.
    pub fn put_opt_f64(&mut self, field: u32, value: Option<f64>) {
        if let Some(value) = value {
            self.put_f64(field, value);
        }
    }

    /// Write a `bytes` field if set.
    pub fn put_opt_bytes(&mut self, field: u32, value: Option<&[u8]>) {
        if let Some(value) = value {
            self.put_bytes(field, value);
        }
    }

    /// Write a domain enum field if set.
    pub fn put_opt_mapped<D: WireMapped>(&mut self, field: u32, value: Option<D>) {
        if let Some(value) = value {
            self.put_mapped(field, value);
        }
    }

    /// Write a nested message if set.
    pub fn put_opt_message<M: WireMessage>(
        &mut self,
        field: u32,
        name: &'static str,
        message: Option<&M>,
    ) -> CodecResult<()> {
        match message {
            Some(message) => self.put_message(field, name, message),
            None => Ok(()),
        }
    }

    /// Write a family node if set.
    pub fn put_opt_node<F: Family>(
        &mut self,
        field: u32,
        name: &'static str,
        node: Option<&F>,
    ) -> CodecResult<()> {
        match node {
            Some(node) => self.put_node(field, name, node),
            None => Ok(()),
        }
    }

    /// Write a column value blob if set.
    pub fn put_opt_column_value(
        &mut self,
        field: u32,
        value: Option<&ColumnValue>,
    ) -> CodecResult<()> {
        match value {
            Some(value) => self.put_column_value(field, value),
            None => Ok(()),
        }
    }

    // -- framing ------------------------------------------------------------

    fn put_child(
        &mut self,
        field: u32,
        segment: PathSegment,
        encoded: CodecResult<Bytes>,
    ) -> CodecResult<()> {
        let bytes = encoded.map_err(|err| err.within(segment))?;
        self.put_bytes(field, &bytes);
        Ok(())
    }

    fn put_len_prefix(&mut self, field: u32, len: usize) {
        encoding::encode_key(field, WireType::LengthDelimited, &mut self.buf);
        encoding::encode_varint(len as u64, &mut self.buf);
    }
}

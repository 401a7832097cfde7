//! Low-level wire primitives.
//!
//! Messages are sequences of tagged fields compatible with protocol
//! buffers: each field starts with a varint key `number << 3 | wire_type`
//! followed by a varint, a little-endian fixed-width value or a
//! length-delimited byte string. Keys, varints and fixed-width values go
//! through `prost::encoding`; groups are not supported.

pub mod enums;
pub mod reader;
pub mod writer;

pub use enums::{WireEnum, WireMapped};
pub use reader::{Field, WireReader};
pub use writer::WireWriter;

/// Encoding of a field's value, shared with `prost`.
pub use prost::encoding::WireType;

/// Short name of a wire type used in error messages.
pub(crate) const fn wire_type_name(wire_type: WireType) -> &'static str {
    match wire_type {
        WireType::Varint => "varint",
        WireType::SixtyFourBit => "fixed64",
        WireType::LengthDelimited => "length-delimited",
        WireType::StartGroup => "start-group",
        WireType::EndGroup => "end-group",
        WireType::ThirtyTwoBit => "fixed32",
    }
}

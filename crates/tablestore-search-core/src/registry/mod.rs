//! Per-variant encoders and decoders.
//!
//! Every variant struct implements [`WireMessage`]; every family enum
//! implements [`Family`], which routes a node to its variant's message by
//! kind. Child nodes are written as nested envelopes, so a tree encodes
//! depth-first and decodes by recursing through [`decode_node`].
//!
//! Encoders destructure their struct and decoders rebuild it with a full
//! struct literal, and both family routes are exhaustive matches, so a new
//! variant or field cannot compile until it is wired in both directions.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use bytes::Bytes;

use crate::envelope::{decode_envelope, encode_envelope};
use crate::error::CodecResult;
use crate::wire::{WireMapped, WireReader, WireWriter};

mod aggregation;
mod common;
mod group_by;
mod query;
mod request;
mod score;
mod sort;

pub use score::validate_decay_param;

/// A message with a fixed field layout.
pub trait WireMessage: Sized {
    /// Message name used in errors.
    const NAME: &'static str;

    /// Write this message's fields.
    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()>;

    /// Read a message from its fields.
    fn decode(reader: WireReader) -> CodecResult<Self>;
}

/// A closed family of nodes serialized behind the shared envelope.
pub trait Family: Sized {
    /// Kind enum selecting the variant.
    type Kind: WireMapped + Copy + Eq + Hash + Debug + Display + 'static;

    /// Family name used in errors and logs.
    const FAMILY: &'static str;

    /// Every kind of the family.
    const KINDS: &'static [Self::Kind];

    /// The kind of this node.
    fn node_kind(&self) -> Self::Kind;

    /// Encode this node's variant payload.
    fn encode_payload(&self) -> CodecResult<Bytes>;

    /// Decode a variant payload selected by `kind`.
    fn decode_payload(kind: Self::Kind, payload: Bytes) -> CodecResult<Self>;
}

/// Encode a message's fields.
pub fn encode_message<M: WireMessage>(message: &M) -> CodecResult<Bytes> {
    let mut writer = WireWriter::for_message(M::NAME);
    message.encode(&mut writer)?;
    Ok(writer.finish())
}

/// Decode a message from its fields.
pub fn decode_message<M: WireMessage>(bytes: Bytes) -> CodecResult<M> {
    M::decode(WireReader::new(M::NAME, bytes))
}

/// Encode a node into its envelope.
pub fn encode_node<F: Family>(node: &F) -> CodecResult<Bytes> {
    let payload = node.encode_payload()?;
    Ok(encode_envelope(node.node_kind(), &payload))
}

/// Decode a node from its envelope.
pub fn decode_node<F: Family>(bytes: Bytes) -> CodecResult<F> {
    let (kind, payload) = decode_envelope::<F::Kind>(F::FAMILY, bytes)?;
    F::decode_payload(kind, payload)
}

/// Implements [`Family`] by routing each variant to its message type.
macro_rules! family_codec {
    (
        $family:ident: $kind:ident as $name:literal {
            $($variant:ident => $message:ty,)+
        }
    ) => {
        impl $crate::registry::Family for $family {
            type Kind = $kind;

            const FAMILY: &'static str = $name;
            const KINDS: &'static [$kind] = $kind::ALL;

            fn node_kind(&self) -> $kind {
                self.kind()
            }

            fn encode_payload(&self) -> $crate::error::CodecResult<::bytes::Bytes> {
                match self {
                    $(Self::$variant(node) => $crate::registry::encode_message(node),)+
                }
            }

            fn decode_payload(
                kind: $kind,
                payload: ::bytes::Bytes,
            ) -> $crate::error::CodecResult<Self> {
                match kind {
                    $($kind::$variant => {
                        $crate::registry::decode_message::<$message>(payload).map(Self::$variant)
                    })+
                }
            }
        }
    };
}

pub(crate) use family_codec;

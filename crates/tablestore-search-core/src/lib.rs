//! Wire codec for table store search expressions.
//!
//! Converts the expression trees of `tablestore-search-model` to and from
//! the service's tagged binary form. Each family node travels inside a
//! `{kind, payload}` envelope; the payload is the variant's own message,
//! and child nodes are nested envelopes.
//!
//! - [`wire`] holds the field reader and writer and the wire enum tables.
//! - [`value`] encodes column value blobs.
//! - [`envelope`] frames a payload behind its kind code.
//! - [`registry`] maps every variant to its encoder and decoder.
//! - [`guard`] checks that every kind is wired end to end.
//! - [`codec`] exposes all of it behind [`SearchCodec`].
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod registry;
pub mod value;
pub mod wire;

pub use codec::SearchCodec;
pub use config::CodecConfig;
pub use error::{CodecError, CodecResult, FieldPath, PathSegment};
pub use guard::{verify_family, FamilyCoverage, GuardError};
pub use registry::{
    decode_message, decode_node, encode_message, encode_node, validate_decay_param, Family,
    WireMessage,
};

//! Exhaustiveness checks across the four families.
//!
//! The registry's exhaustive matches already make a kind without an
//! encoder or decoder a compile error. [`verify_family`] checks the rest at
//! test time: every kind has a distinct wire code that maps back to it, the
//! wire table has no extra codes, and a set of sample nodes (one per test
//! generator) exercises the encoder and decoder of every kind.

use std::collections::HashSet;

use crate::envelope::decode_envelope;
use crate::error::CodecError;
use crate::registry::{decode_node, encode_node, Family};
use crate::wire::{WireEnum, WireMapped};

/// Errors reported by [`verify_family`].
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// Two kinds share a wire code.
    #[error("{family}: kinds {first} and {second} share wire code {code}")]
    DuplicateCode {
        /// Family name.
        family: &'static str,
        /// First kind.
        first: String,
        /// Second kind.
        second: String,
        /// Shared code.
        code: i32,
    },

    /// A kind's wire code maps back to a different kind.
    #[error("{family}: kind {kind} does not survive the wire mapping")]
    Unmapped {
        /// Family name.
        family: &'static str,
        /// The kind.
        kind: String,
    },

    /// The wire enum and the kind enum have different sizes.
    #[error("{family}: {kinds} kinds but {codes} wire codes")]
    CountMismatch {
        /// Family name.
        family: &'static str,
        /// Number of kinds.
        kinds: usize,
        /// Number of wire codes.
        codes: usize,
    },

    /// A sample failed to encode or decode.
    #[error("{family}: sample of kind {kind} failed: {source}")]
    Codec {
        /// Family name.
        family: &'static str,
        /// The sample's kind.
        kind: String,
        /// Underlying failure.
        #[source]
        source: CodecError,
    },

    /// A sample's kind changed across the round trip.
    #[error("{family}: sample of kind {expected} came back as {actual}")]
    KindChanged {
        /// Family name.
        family: &'static str,
        /// Kind encoded.
        expected: String,
        /// Kind decoded.
        actual: String,
    },

    /// Some kinds had no sample.
    #[error("{family}: no sample for kinds {missing:?}")]
    Uncovered {
        /// Family name.
        family: &'static str,
        /// Kinds without a sample.
        missing: Vec<String>,
    },
}

/// Per-family counts that must all agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyCoverage {
    /// Family name.
    pub family: &'static str,
    /// Declared kinds.
    pub variants: usize,
    /// Kinds whose encoder ran.
    pub encoders: usize,
    /// Kinds whose decoder ran.
    pub decoders: usize,
    /// Kinds with at least one generated sample.
    pub generators: usize,
}

impl FamilyCoverage {
    /// Whether every count equals the number of declared kinds.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.encoders == self.variants
            && self.decoders == self.variants
            && self.generators == self.variants
    }
}

/// Check the wire table of `F` and round-trip `samples` through it.
///
/// Fails unless every kind of `F` appears among the samples.
pub fn verify_family<F: Family>(samples: &[F]) -> Result<FamilyCoverage, GuardError> {
    let family = F::FAMILY;

    let mut codes: Vec<(F::Kind, i32)> = Vec::with_capacity(F::KINDS.len());
    for &kind in F::KINDS {
        let code = kind.to_wire().code();
        if let Some(&(other, _)) = codes.iter().find(|(_, c)| *c == code) {
            return Err(GuardError::DuplicateCode {
                family,
                first: other.to_string(),
                second: kind.to_string(),
                code,
            });
        }
        let back = <F::Kind as WireMapped>::Wire::from_code(code).map(F::Kind::from_wire);
        if back != Some(kind) {
            return Err(GuardError::Unmapped {
                family,
                kind: kind.to_string(),
            });
        }
        codes.push((kind, code));
    }

    let wire_codes = <F::Kind as WireMapped>::Wire::ALL.len();
    if wire_codes != F::KINDS.len() {
        return Err(GuardError::CountMismatch {
            family,
            kinds: F::KINDS.len(),
            codes: wire_codes,
        });
    }

    let mut generators = HashSet::new();
    let mut encoders = HashSet::new();
    let mut decoders = HashSet::new();
    for sample in samples {
        let kind = sample.node_kind();
        generators.insert(kind);
        let codec_error = |source: CodecError| GuardError::Codec {
            family,
            kind: kind.to_string(),
            source,
        };

        let bytes = encode_node(sample).map_err(codec_error)?;
        let (framed, _) = decode_envelope::<F::Kind>(family, bytes.clone()).map_err(codec_error)?;
        if framed != kind {
            return Err(GuardError::KindChanged {
                family,
                expected: kind.to_string(),
                actual: framed.to_string(),
            });
        }
        encoders.insert(kind);

        let decoded = decode_node::<F>(bytes).map_err(codec_error)?;
        if decoded.node_kind() != kind {
            return Err(GuardError::KindChanged {
                family,
                expected: kind.to_string(),
                actual: decoded.node_kind().to_string(),
            });
        }
        decoders.insert(kind);
    }

    let missing: Vec<String> = F::KINDS
        .iter()
        .filter(|kind| !generators.contains(*kind))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(GuardError::Uncovered { family, missing });
    }

    Ok(FamilyCoverage {
        family,
        variants: F::KINDS.len(),
        encoders: encoders.len(),
        decoders: decoders.len(),
        generators: generators.len(),
    })
}

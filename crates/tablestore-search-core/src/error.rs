//! Codec error type.

use std::fmt;

/// Errors raised while encoding or decoding search expressions.
///
/// All of them are final: the codec never retries and never returns a
/// partially encoded or decoded tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A required field was never set.
    #[error("{path}{message}.{field} is required")]
    RequiredFieldMissing {
        /// Route from the root message down to `message`.
        path: FieldPath,
        /// Wire message that owns the field.
        message: &'static str,
        /// Field name.
        field: &'static str,
    },
    /// Mutually exclusive fields were set together, or a value is outside
    /// its domain.
    #[error("Invalid field combination in {message}: {reason}")]
    InvalidFieldCombination {
        /// Wire message that owns the fields.
        message: &'static str,
        /// Explanation.
        reason: String,
    },
    /// A wire enum code this build does not recognize.
    #[error("Unknown {enum_name} value: {raw}")]
    UnknownEnumValue {
        /// Wire enum name.
        enum_name: &'static str,
        /// The raw code.
        raw: i64,
    },
    /// Framing is truncated, overruns its buffer or carries unknown fields.
    #[error("Malformed {message}: {reason}")]
    MalformedEnvelope {
        /// Wire message being decoded.
        message: &'static str,
        /// Explanation.
        reason: String,
    },
    /// An envelope's kind code is foreign to its family.
    #[error("Unsupported {kind_enum} code: {code}")]
    UnsupportedVariant {
        /// Kind enum of the family.
        kind_enum: &'static str,
        /// The raw code.
        code: i32,
    },
    /// A message exceeds the configured size limit.
    #[error("Message of {size} bytes exceeds limit of {limit} bytes")]
    MessageTooLarge {
        /// Actual size in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

impl CodecError {
    /// `RequiredFieldMissing` for `message.field`.
    #[must_use]
    pub const fn required(message: &'static str, field: &'static str) -> Self {
        Self::RequiredFieldMissing {
            path: FieldPath::root(),
            message,
            field,
        }
    }

    /// `InvalidFieldCombination` in `message`.
    #[must_use]
    pub fn invalid(message: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFieldCombination {
            message,
            reason: reason.into(),
        }
    }

    /// `MalformedEnvelope` while decoding `message`.
    #[must_use]
    pub fn malformed(message: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedEnvelope {
            message,
            reason: reason.into(),
        }
    }

    /// Record that this error was raised inside the child at `segment`.
    ///
    /// Only `RequiredFieldMissing` carries a path; other errors pass through.
    #[must_use]
    pub fn within(mut self, segment: PathSegment) -> Self {
        if let Self::RequiredFieldMissing { path, .. } = &mut self {
            path.0.insert(0, segment);
        }
        self
    }
}

/// One step from a parent message into a child field, e.g. `BoolQuery.must[1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Parent message.
    pub message: &'static str,
    /// Field of the parent holding the child.
    pub field: &'static str,
    /// Position within a repeated field.
    pub index: Option<usize>,
}

impl PathSegment {
    /// A step into a singular field.
    #[must_use]
    pub const fn new(message: &'static str, field: &'static str) -> Self {
        Self {
            message,
            field,
            index: None,
        }
    }

    /// A step into element `index` of a repeated field.
    #[must_use]
    pub const fn item(message: &'static str, field: &'static str, index: usize) -> Self {
        Self {
            message,
            field,
            index: Some(index),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.message, self.field)?;
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// Segments leading from the root message to the one that failed.
///
/// Displays as a prefix: every segment followed by `" > "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The empty path of an error raised by the root message itself.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Segments from the root down.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Whether the error was raised by the root message.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for FieldPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "{segment} > ")?;
        }
        Ok(())
    }
}

/// Unwrap a required field or report it missing.
pub(crate) fn required<T>(
    value: Option<T>,
    message: &'static str,
    field: &'static str,
) -> CodecResult<T> {
    value.ok_or(CodecError::required(message, field))
}

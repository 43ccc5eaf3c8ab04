//! Errors for jwtpeek
//!
//! Decoding fails atomically: a caller either gets a complete `DecodedJwt` or
//! exactly one `Error` describing the root cause. Segment-level failures are
//! wrapped in `Error::Decode`, which keeps the underlying `DecodeError`
//! reachable through `std::error::Error::source`.

use std::fmt;

use thiserror::Error;

/// One of the three dot-separated parts of a compact JWT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Header,
    Payload,
    Signature,
}

impl Segment {
    /// Lowercase name used in messages and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Header => "header",
            Segment::Payload => "payload",
            Segment::Signature => "signature",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a decoding failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token does not split into header, payload and signature
    Format,
    /// A segment is not Base64URL, or its bytes are not UTF-8
    Decode,
    /// A decoded segment is not a JSON object
    Parse,
    /// A value could not be encoded into a segment
    Encode,
}

/// Failure to turn a single segment into a JSON object
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Invalid Base64URL encoding: {0}")]
    InvalidBase64(String),

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::InvalidBase64(_) | DecodeError::InvalidUtf8(_) => ErrorKind::Decode,
            DecodeError::InvalidJson(_) | DecodeError::NotAnObject(_) => ErrorKind::Parse,
        }
    }
}

/// JWT decoding errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format. Expected 3 parts separated by dots, found {found}.")]
    FormatInvalid { found: usize },

    #[error("JWT header or payload is empty ({0} is empty)")]
    FormatEmptySegment(Segment),

    // ============================================================================
    // Segment Errors
    // ============================================================================
    #[error("Failed to decode JWT: {segment}: {source}")]
    Decode {
        segment: Segment,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to encode JWT: {segment}: {reason}")]
    Encode { segment: Segment, reason: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FormatInvalid { .. } | Error::FormatEmptySegment(_) => ErrorKind::Format,
            Error::Decode { source, .. } => source.kind(),
            Error::Encode { .. } => ErrorKind::Encode,
        }
    }

    /// The segment that failed to decode, if the failure was segment-level
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Error::FormatInvalid { .. } => None,
            Error::FormatEmptySegment(segment)
            | Error::Decode { segment, .. }
            | Error::Encode { segment, .. } => Some(*segment),
        }
    }

    pub(crate) fn decode(segment: Segment, source: DecodeError) -> Self {
        Error::Decode { segment, source }
    }

    pub(crate) fn encode(segment: Segment, reason: impl Into<String>) -> Self {
        Error::Encode {
            segment,
            reason: reason.into(),
        }
    }
}

/// Result type alias for jwtpeek operations
pub type Result<T> = std::result::Result<T, Error>;

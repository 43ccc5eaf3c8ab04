use crate::error::{Error, Result, Segment};
use serde::Serialize;

/// The three original segment strings of a token
///
/// Kept exactly as they appeared in the (trimmed) input, never re-derived
/// from decoded data, so joining them with `.` reproduces the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RawSegments {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

impl RawSegments {
    /// Rejoin the segments into compact serialization
    pub fn to_token(&self) -> String {
        format!("{}.{}.{}", self.header, self.payload, self.signature)
    }
}

impl From<(&str, &str, &str)> for RawSegments {
    fn from((header, payload, signature): (&str, &str, &str)) -> Self {
        Self {
            header: header.to_string(),
            payload: payload.to_string(),
            signature: signature.to_string(),
        }
    }
}

/// Split a token into header, payload and signature segments
///
/// Surrounding whitespace and byte order marks are trimmed first. The token
/// must contain exactly two `.` separators and non-empty header and payload
/// segments; an empty signature segment is accepted.
pub fn split_token(token: &str) -> Result<(&str, &str, &str)> {
    let token = token.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let mut parts = token.split('.');
    let (header, payload, signature) =
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None) => (header, payload, signature),
            _ => {
                return Err(Error::FormatInvalid {
                    found: token.split('.').count(),
                });
            }
        };

    if header.is_empty() {
        return Err(Error::FormatEmptySegment(Segment::Header));
    }
    if payload.is_empty() {
        return Err(Error::FormatEmptySegment(Segment::Payload));
    }

    Ok((header, payload, signature))
}

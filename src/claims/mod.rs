//! Time-based claims and token status
//!
//! Payloads are arbitrary JSON objects. The only claims this crate reads are
//! the registered NumericDate claims from
//! [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1),
//! and only when they actually hold numbers.

mod status;

pub use status::{TokenStatus, status, status_in};

use serde::Serialize;
use serde_json::{Map, Value};

/// Typed view over the NumericDate claims of a payload
///
/// Values are Unix seconds. A claim that is missing or holds anything other
/// than a JSON number reads as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TemporalClaims {
    /// Expiration Time (exp) - the token must not be accepted on or after this time
    #[serde(rename = "exp", skip_serializing_if = "Option::is_none")]
    pub expiration: Option<f64>,

    /// Not Before (nbf) - the token must not be accepted before this time
    #[serde(rename = "nbf", skip_serializing_if = "Option::is_none")]
    pub not_before: Option<f64>,

    /// Issued At (iat) - informational only, never affects status
    #[serde(rename = "iat", skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<f64>,
}

impl TemporalClaims {
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        Self {
            expiration: numeric_claim(payload, "exp"),
            not_before: numeric_claim(payload, "nbf"),
            issued_at: numeric_claim(payload, "iat"),
        }
    }
}

impl From<&Map<String, Value>> for TemporalClaims {
    fn from(payload: &Map<String, Value>) -> Self {
        Self::from_payload(payload)
    }
}

fn numeric_claim(payload: &Map<String, Value>, name: &str) -> Option<f64> {
    payload.get(name).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> TemporalClaims {
        match value {
            Value::Object(map) => TemporalClaims::from_payload(&map),
            _ => unreachable!("test input must be an object"),
        }
    }

    #[test]
    fn test_reads_numeric_claims() {
        let parsed = claims(json!({"exp": 1_700_000_000, "nbf": 1_600_000_000, "iat": 1.5}));
        assert_eq!(parsed.expiration, Some(1_700_000_000.0));
        assert_eq!(parsed.not_before, Some(1_600_000_000.0));
        assert_eq!(parsed.issued_at, Some(1.5));
    }

    #[test]
    fn test_non_numeric_claims_are_absent() {
        let parsed = claims(json!({"exp": "1700000000", "nbf": true, "iat": null}));
        assert_eq!(parsed, TemporalClaims::default());
    }

    #[test]
    fn test_missing_claims() {
        assert_eq!(claims(json!({"sub": "user"})), TemporalClaims::default());
    }

    #[test]
    fn test_serialize_skips_absent() {
        let parsed = claims(json!({"exp": 10}));
        assert_eq!(serde_json::to_value(parsed).unwrap(), json!({"exp": 10.0}));
    }
}

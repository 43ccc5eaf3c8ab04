use crate::claims::{TemporalClaims, TokenStatus};
use crate::error::{DecodeError, Error, Result, Segment};
use crate::token::split::{RawSegments, split_token};
use crate::token::TokenHeader;
use crate::utils::base64url;
use chrono::{Local, TimeZone};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;

/// A decoded, unverified JWT
///
/// Header and payload are always JSON objects; key order from the token is
/// preserved. The signature is kept as its raw Base64URL text and is never
/// checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedJwt {
    header: Map<String, Value>,
    payload: Map<String, Value>,
    signature: String,
    raw: RawSegments,
}

impl DecodedJwt {
    /// Decode a JWT from a string
    ///
    /// # Example
    /// ```
    /// let token = jwtpeek::DecodedJwt::from_string("eyJhbGciOiJIUzI1NiJ9.e30.sig").unwrap();
    /// assert_eq!(token.algorithm(), Some("HS256"));
    /// assert!(token.payload().is_empty());
    /// assert_eq!(token.signature(), "sig");
    /// ```
    pub fn from_string(token: &str) -> Result<Self> {
        let (header_b64, payload_b64, signature) = split_token(token)?;

        let header_json = base64url::decode_segment(header_b64)
            .map_err(|e| Error::decode(Segment::Header, e))?;
        let payload_json = base64url::decode_segment(payload_b64)
            .map_err(|e| Error::decode(Segment::Payload, e))?;

        let header = parse_object(&header_json).map_err(|e| Error::decode(Segment::Header, e))?;
        let payload =
            parse_object(&payload_json).map_err(|e| Error::decode(Segment::Payload, e))?;

        Ok(Self {
            header,
            payload,
            signature: signature.to_string(),
            raw: RawSegments::from((header_b64, payload_b64, signature)),
        })
    }

    /// Get the decoded header
    pub fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// Get the decoded payload (claims)
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Get the signature segment, still Base64URL-encoded
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Get the original segment strings
    pub fn raw(&self) -> &RawSegments {
        &self.raw
    }

    /// Registered header parameters
    pub fn header_fields(&self) -> TokenHeader<'_> {
        TokenHeader::from_map(&self.header)
    }

    /// The `alg` header as declared by the token
    pub fn algorithm(&self) -> Option<&str> {
        self.header_fields().algorithm
    }

    /// The `typ` header as declared by the token
    pub fn token_type(&self) -> Option<&str> {
        self.header_fields().token_type
    }

    /// Typed view over the time-based claims
    pub fn claims(&self) -> TemporalClaims {
        TemporalClaims::from_payload(&self.payload)
    }

    /// Classify the token against `now` (Unix seconds), rendering times locally
    pub fn status(&self, now: i64) -> TokenStatus {
        self.status_in(now, &Local)
    }

    /// Classify the token against `now` (Unix seconds) in the given timezone
    pub fn status_in<Tz>(&self, now: i64, tz: &Tz) -> TokenStatus
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.claims().status_in(now, tz)
    }

    /// Consume the token, returning header, payload and raw segments
    pub fn into_parts(self) -> (Map<String, Value>, Map<String, Value>, RawSegments) {
        (self.header, self.payload, self.raw)
    }
}

/// Decode a JWT into its header, payload and signature
///
/// Fails atomically: any format, Base64URL, UTF-8 or JSON problem yields a
/// single `Error` and no partial result.
pub fn decode(token: &str) -> Result<DecodedJwt> {
    match DecodedJwt::from_string(token) {
        Ok(decoded) => {
            tracing::debug!(
                header_len = decoded.raw.header.len(),
                payload_len = decoded.raw.payload.len(),
                signature_len = decoded.raw.signature.len(),
                alg = decoded.algorithm().unwrap_or("<none>"),
                "decoded token"
            );
            Ok(decoded)
        }
        Err(err) => {
            tracing::debug!(error = %err, kind = ?err.kind(), "failed to decode token");
            Err(err)
        }
    }
}

/// Build a compact token from a header, a payload and an opaque signature
///
/// Header and payload must serialize to JSON objects. The signature is
/// appended verbatim and must not contain `.`; nothing is signed.
pub fn encode<H, P>(header: &H, payload: &P, signature: &str) -> Result<String>
where
    H: Serialize + ?Sized,
    P: Serialize + ?Sized,
{
    let header = encode_object(header).map_err(|e| Error::encode(Segment::Header, e))?;
    let payload = encode_object(payload).map_err(|e| Error::encode(Segment::Payload, e))?;

    if signature.contains('.') {
        return Err(Error::encode(
            Segment::Signature,
            "signature must not contain '.'",
        ));
    }

    Ok(format!("{header}.{payload}.{signature}"))
}

fn parse_object(json: &str) -> std::result::Result<Map<String, Value>, DecodeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject(json_type(&other))),
    }
}

fn encode_object<T: Serialize + ?Sized>(value: &T) -> std::result::Result<String, String> {
    match serde_json::to_value(value).map_err(|e| e.to_string())? {
        object @ Value::Object(_) => Ok(base64url::encode_segment(&object.to_string())),
        other => Err(format!("expected a JSON object, found {}", json_type(&other))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

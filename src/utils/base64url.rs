//! Base64URL encoding/decoding per RFC 4648
//!
//! Decoding maps the URL-safe alphabet back onto the standard one, restores
//! the `=` padding JWT segments omit, and then decodes with the `base64`
//! crate. Non-zero trailing bits in the final quantum are tolerated, the same
//! way browser `atob` implementations accept them.

use crate::error::DecodeError;
use base64::{
    Engine, alphabet,
    engine::{
        DecodePaddingMode,
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD},
    },
};

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Rewrite a Base64URL string into padded standard Base64
fn to_standard(input: &str) -> String {
    let mut base64: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    while base64.len() % 4 != 0 {
        base64.push('=');
    }

    base64
}

/// Decode Base64URL string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD_LENIENT
        .decode(to_standard(input))
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}

/// Decode Base64URL string to UTF-8 string
///
/// No partial output is produced: either the whole segment decodes to valid
/// UTF-8 text or an error is returned. A single leading byte order mark is
/// dropped.
pub fn decode_segment(input: &str) -> Result<String, DecodeError> {
    let bytes = decode_bytes(input)?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))?;

    if text.starts_with(BYTE_ORDER_MARK) {
        text.drain(..BYTE_ORDER_MARK.len_utf8());
    }

    Ok(text)
}

/// Encode bytes to unpadded Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to unpadded Base64URL
pub fn encode_segment(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

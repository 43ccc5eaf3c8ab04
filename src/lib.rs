//! # jwtpeek - Decode and Inspect JSON Web Tokens
//!
//! > Look inside a JWT without trusting it.
//!
//! **jwtpeek** decodes compact JSON Web Tokens into their header, payload and
//! signature, and tells you where the token stands in time: expired, not yet
//! valid, valid, or without expiration. It never verifies signatures and never
//! enforces the `alg` header; it is a debugging and inspection tool, not an
//! authentication layer.
//!
//! ## Overview
//!
//! A compact JWT is three Base64URL segments joined by dots. Decoding happens in
//! two stages:
//!
//! ```text
//! "eyJhbGciOiJIUzI1NiJ9.e30.sig"
//!     │ split_token()          trim, split on '.', require header + payload
//!     ▼
//! ("eyJhbGciOiJIUzI1NiJ9", "e30", "sig")
//!     │ decode_segment()       Base64URL → bytes → UTF-8 text
//!     ▼
//! ("{\"alg\":\"HS256\"}", "{}", "sig")
//!     │ JSON parse             objects only, key order preserved
//!     ▼
//! DecodedJwt { header, payload, signature, raw }
//!     │ status(now)            exp / nbf against an explicit instant
//!     ▼
//! TokenStatus
//! ```
//!
//! Decoding is atomic: any failure yields exactly one [`Error`] and no
//! partial result. Format problems are reported directly; segment problems are
//! wrapped as `Failed to decode JWT: <segment>: <cause>` with the cause
//! available through [`std::error::Error::source`].
//!
//! ## Quick Start
//!
//! ```
//! use jwtpeek::{decode, current_timestamp};
//!
//! let token = decode("eyJhbGciOiJIUzI1NiJ9.e30.sig")?;
//!
//! assert_eq!(token.algorithm(), Some("HS256"));
//! assert!(token.payload().is_empty());
//! assert_eq!(token.signature(), "sig");
//!
//! let status = token.status(current_timestamp());
//! assert_eq!(status.kind(), "no_expiration");
//! # Ok::<(), jwtpeek::Error>(())
//! ```
//!
//! ## Time
//!
//! Status is a pure function of the payload and the instant passed in. Sample
//! the clock once with [`current_timestamp`] (or pick any instant) and hand it
//! to [`status`]; timestamps in status messages render in the local timezone,
//! or in any `chrono` timezone via [`status_in`].
//!
//! The checks run in a fixed order and the first match wins:
//!
//! 1. `exp` present and `now >= exp` → [`TokenStatus::Expired`]
//! 2. `nbf` present and `now < nbf` → [`TokenStatus::NotYetValid`]
//! 3. `exp` present → [`TokenStatus::Valid`]
//! 4. otherwise → [`TokenStatus::NoExpiration`]
//!
//! Claims that are missing or not JSON numbers are treated as absent.
//!
//! ## References
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) — JSON Web Signature (JWS)
//! - [RFC 4648 Section 5](https://datatracker.ietf.org/doc/html/rfc4648#section-5) — Base64URL

// Core modules
pub mod error;
pub mod utils;

// Claims and status
pub mod claims;

// Token types
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use token::{DecodedJwt, RawSegments, TokenHeader, decode, encode, split_token};

pub use claims::{TemporalClaims, TokenStatus, status, status_in};

pub use error::{DecodeError, Error, ErrorKind, Result, Segment};
pub use utils::base64url::decode_segment;
pub use utils::time::{current_timestamp, format_timestamp, format_timestamp_in};

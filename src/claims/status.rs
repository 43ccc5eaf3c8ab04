use crate::claims::TemporalClaims;
use crate::utils::time::format_timestamp_in;
use chrono::{Local, TimeZone};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::{self, Display};

/// Where a token stands in time relative to a given instant
///
/// Serializes as `{"type": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenStatus {
    /// `now` is at or past `exp`
    Expired { message: String },
    /// `now` is before `nbf`
    NotYetValid { message: String },
    /// `exp` is in the future and `nbf`, if any, has passed
    Valid { message: String },
    /// No `exp` claim
    NoExpiration { message: String },
}

impl TokenStatus {
    /// Human-readable description
    pub fn message(&self) -> &str {
        match self {
            TokenStatus::Expired { message }
            | TokenStatus::NotYetValid { message }
            | TokenStatus::Valid { message }
            | TokenStatus::NoExpiration { message } => message,
        }
    }

    /// Snake-case name of the variant, as used in serialized output
    pub fn kind(&self) -> &'static str {
        match self {
            TokenStatus::Expired { .. } => "expired",
            TokenStatus::NotYetValid { .. } => "not_yet_valid",
            TokenStatus::Valid { .. } => "valid",
            TokenStatus::NoExpiration { .. } => "no_expiration",
        }
    }

    /// Whether the time-based claims allow use of the token at the instant checked
    pub fn is_usable(&self) -> bool {
        matches!(
            self,
            TokenStatus::Valid { .. } | TokenStatus::NoExpiration { .. }
        )
    }
}

impl Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl TemporalClaims {
    /// Classify against `now` (Unix seconds), rendering times in `tz`
    ///
    /// Checks run in a fixed order and the first match wins: expired,
    /// not yet valid, valid, no expiration. `now == exp` counts as expired;
    /// `now == nbf` counts as valid.
    pub fn status_in<Tz>(&self, now: i64, tz: &Tz) -> TokenStatus
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let now_secs = now as f64;

        let status = if let Some(exp) = self.expiration.filter(|exp| now_secs >= *exp) {
            TokenStatus::Expired {
                message: format!("Token expired on {}", format_timestamp_in(exp, tz)),
            }
        } else if let Some(nbf) = self.not_before.filter(|nbf| now_secs < *nbf) {
            TokenStatus::NotYetValid {
                message: format!("Token not valid until {}", format_timestamp_in(nbf, tz)),
            }
        } else if let Some(exp) = self.expiration {
            TokenStatus::Valid {
                message: format!("Token valid until {}", format_timestamp_in(exp, tz)),
            }
        } else {
            TokenStatus::NoExpiration {
                message: "Token has no expiration (not recommended)".to_string(),
            }
        };

        tracing::trace!(now, status = status.kind(), "derived token status");
        status
    }

    /// Classify against `now` (Unix seconds), rendering times locally
    pub fn status(&self, now: i64) -> TokenStatus {
        self.status_in(now, &Local)
    }
}

/// Derive the status of a decoded payload at `now` (Unix seconds)
///
/// Never fails: missing or non-numeric `exp`/`nbf` are treated as absent.
/// Timestamps in the message are rendered in the local timezone.
pub fn status(payload: &Map<String, Value>, now: i64) -> TokenStatus {
    status_in(payload, now, &Local)
}

/// Like [`status`], rendering timestamps in the given timezone
pub fn status_in<Tz>(payload: &Map<String, Value>, now: i64, tz: &Tz) -> TokenStatus
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    TemporalClaims::from_payload(payload).status_in(now, tz)
}

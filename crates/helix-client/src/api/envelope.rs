//! Response envelope shared by every endpoint result.
//!
//! The envelope is filled from transport metadata (status, rate-limit
//! headers) and the metadata fields of the body (`error`, `message`,
//! `pagination.cursor`). Hydration never fails: missing or malformed
//! headers and fields map to zero values.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::HelixError;

const RATELIMIT_LIMIT: &str = "ratelimit-limit";
const RATELIMIT_REMAINING: &str = "ratelimit-remaining";
const RATELIMIT_RESET: &str = "ratelimit-reset";

const LOG_BODY_MAX_CHARS: usize = 500;

/// Token-bucket counters reported by Helix on every response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    /// When the bucket refills completely.
    pub reset: Option<DateTime<Utc>>,
}

/// Common metadata attached to every call result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub status: u16,
    /// Short error name from an error body, e.g. `"Unauthorized"`.
    pub error: Option<String>,
    /// Human readable detail from an error body.
    pub message: Option<String>,
    pub rate_limit: RateLimit,
    /// Cursor for the next page. `None` means there are no further pages.
    pub cursor: Option<String>,
}

impl Envelope {
    /// Build an envelope from a completed exchange.
    pub fn hydrate(status: StatusCode, headers: &HeaderMap, body: Option<&Value>) -> Self {
        let field = |key: &str| {
            body.and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let cursor = body
            .and_then(|b| b.pointer("/pagination/cursor"))
            .and_then(Value::as_str)
            .filter(|cursor| !cursor.is_empty())
            .map(str::to_string);

        Self {
            status: status.as_u16(),
            error: field("error"),
            message: field("message"),
            rate_limit: RateLimit {
                limit: header_number(headers, RATELIMIT_LIMIT).unwrap_or(0),
                remaining: header_number(headers, RATELIMIT_REMAINING).unwrap_or(0),
                reset: header_number::<i64>(headers, RATELIMIT_RESET)
                    .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            },
            cursor,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}

fn header_number<N: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<N> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Typed result of one call: envelope plus decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixResponse<T> {
    pub envelope: Envelope,
    pub data: T,
}

impl<T> HelixResponse<T> {
    pub fn is_success(&self) -> bool {
        self.envelope.is_success()
    }

    pub fn cursor(&self) -> Option<&str> {
        self.envelope.cursor.as_deref()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> HelixResponse<U> {
        HelixResponse {
            envelope: self.envelope,
            data: f(self.data),
        }
    }
}

/// Status, headers and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    /// Decode the body into `T` and hydrate the envelope.
    ///
    /// An empty body, or any non-2xx body, yields `T::default()`. A body that
    /// is not JSON, or a 2xx body that does not match `T`, is a decode error.
    pub fn decode<T: DeserializeOwned + Default>(&self) -> Result<HelixResponse<T>, HelixError> {
        if self.body.trim().is_empty() {
            return Ok(HelixResponse {
                envelope: Envelope::hydrate(self.status, &self.headers, None),
                data: T::default(),
            });
        }

        let value: Value = match serde_json::from_str(&self.body) {
            Ok(value) => value,
            Err(e) => {
                let envelope = Envelope::hydrate(self.status, &self.headers, None);
                return Err(self.decode_error(envelope, e));
            }
        };
        let envelope = Envelope::hydrate(self.status, &self.headers, Some(&value));

        let data = if self.status.is_success() {
            match serde_json::from_value(value) {
                Ok(data) => data,
                Err(e) => return Err(self.decode_error(envelope, e)),
            }
        } else {
            T::default()
        };

        Ok(HelixResponse { envelope, data })
    }

    fn decode_error(&self, envelope: Envelope, source: serde_json::Error) -> HelixError {
        tracing::error!(
            status = self.status.as_u16(),
            error = %source,
            body = %snippet(&self.body),
            "Failed to decode Helix response"
        );
        HelixError::Decode {
            status: self.status.as_u16(),
            envelope: Box::new(envelope),
            source,
        }
    }
}

fn snippet(body: &str) -> String {
    if body.chars().count() <= LOG_BODY_MAX_CHARS {
        body.to_string()
    } else {
        let head: String = body.chars().take(LOG_BODY_MAX_CHARS).collect();
        format!("{head}...[truncated]")
    }
}

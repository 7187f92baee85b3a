//! Shared HTTP response helpers and payload unwrapping.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`SourceError::Api`]) and the envelope shapes
//! collections arrive in, so the sources only build requests.

use desk_core::entities::RawRecord;
use serde_json::Value;

use crate::error::SourceError;

/// Keys a collection may be wrapped under.
const ENVELOPE_KEYS: &[&str] = &["data", "response"];

/// How many envelope levels are unwrapped (`{data:{data:[...]}}`).
const MAX_ENVELOPE_DEPTH: u8 = 2;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`SourceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`SourceError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(SourceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(SourceError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Records from a collection payload.
///
/// Accepts a bare array or an array under `data` / `response`, nested at most
/// once more. `null` reads as an empty collection. Array entries that are not
/// objects are skipped.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] when no array can be found.
pub fn records_from_payload(payload: Value) -> Result<Vec<RawRecord>, SourceError> {
    let items = unwrap_envelope(payload, MAX_ENVELOPE_DEPTH)?;
    let total = items.len();
    let records: Vec<RawRecord> = items.into_iter().filter_map(RawRecord::from_value).collect();
    if records.len() < total {
        tracing::debug!(
            skipped = total - records.len(),
            "skipping non-object collection entries"
        );
    }
    Ok(records)
}

fn unwrap_envelope(payload: Value, depth: u8) -> Result<Vec<Value>, SourceError> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        Value::Object(mut map) if depth > 0 => {
            let inner = ENVELOPE_KEYS.iter().find_map(|key| map.remove(*key));
            match inner {
                Some(inner) => unwrap_envelope(inner, depth - 1),
                None => Err(SourceError::Parse(format!(
                    "object payload without a collection under {}",
                    ENVELOPE_KEYS.join(" or ")
                ))),
            }
        }
        other => Err(SourceError::Parse(format!(
            "expected a collection array, got {}",
            kind_of(&other)
        ))),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a nested object",
    }
}

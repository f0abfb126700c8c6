//! Request body decoding and response encoding.
//!
//! Decoding is deliberately permissive. A body is treated as one flat
//! object and cut apart with plain string splitting:
//!
//! 1. trim whitespace, then drop one leading `{` and one trailing `}`
//! 2. split on every `,` (commas inside string values are not special)
//! 3. split each segment on its first `:`; segments without one are dropped
//! 4. trim key and value, remove every `"` from the key, and classify the
//!    value with [`Scalar::from_raw`]
//!
//! Decoding never fails. Malformed input yields whatever pairs survive
//! the steps above, possibly none.
//!
//! Encoding goes through `serde_json`, so output is always valid JSON
//! with keys in insertion order.

use serde::Serialize;
use tracing::debug;

use crate::record::Fields;
use crate::scalar::Scalar;

/// Decode a request body into an ordered field mapping.
pub fn decode_fields(body: &str) -> Fields {
    let trimmed = body.trim();
    let inner = trimmed.strip_prefix('{').unwrap_or(trimmed);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    let mut fields = Fields::new();
    for segment in inner.split(',') {
        let Some((raw_key, raw_value)) = segment.split_once(':') else {
            if !segment.trim().is_empty() {
                debug!(segment, "Dropping body segment without a colon");
            }
            continue;
        };
        let key = raw_key.trim().replace('"', "");
        fields.insert(key, Scalar::from_raw(raw_value.trim()));
    }
    fields
}

/// Encode any response payload as compact JSON text.
///
/// Records encode as `{"key":value,...,"id":N}`, record slices as
/// `[rec,...]` (or `[]`), and [`Stats`](crate::Stats) as `{"total":N}`.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

//! Error types for invoicing-core.
//!
//! Only record load/save can fail. The calculator and validator are total
//! over their input domain: invalid numerics are coerced to zero and
//! out-of-range values are clamped, so neither returns a `Result`.

use thiserror::Error;

/// Errors arising from loading or saving a persisted invoice record.
#[derive(Debug, Error)]
pub enum Error {
    /// The persisted record is not valid JSON for the invoice schema.
    #[error("malformed invoice record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    /// The record could not be serialized back to JSON.
    #[error("failed to serialize invoice record: {0}")]
    SerializeRecord(#[source] serde_json::Error),
}

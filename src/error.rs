// error.rs
use thiserror::Error;

/// Failure kinds of the fetch-and-normalize pipeline.
///
/// None of these are recovered internally. A call either yields a fully
/// populated [`QuakeEvent`](crate::types::QuakeEvent) or fails with one of
/// these; there is no partial record.
#[derive(Error, Debug)]
pub enum QuakeError {
    /// Connection could not be established or the request timed out.
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The catalog answered with a non-success status code.
    #[error("catalog returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The response body is not valid JSON.
    #[error("catalog response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    /// Mandatory geometry fields are absent or non-numeric.
    #[error("malformed event document: {0}")]
    MalformedEvent(String),
}

pub type Result<T> = std::result::Result<T, QuakeError>;

use thiserror::Error;

/// Errors related to point compression.
///
/// The `CompressionError` enum encapsulates everything that can go wrong while
/// turning snarkjs decimal-string points into compressed byte strings, from
/// resolving the curve to parsing individual coordinates.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CompressionError {
    /// The requested curve name is not supported.
    #[error("curve lookup error: {0}")]
    CurveLookupError(String),

    /// A coordinate is not a canonical field element.
    #[error("field error: {0}")]
    FieldError(String),

    /// Raised only when on-curve checking is enabled.
    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    /// Wraps the failure of a single element of a batch, keeping its position.
    #[error("element compression error at index {index}: {source}")]
    ElementCompressionError {
        index: usize,
        source: Box<CompressionError>,
    },

    /// Error related to (de)serialization of proofs and keys with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CompressionError {
    fn from(e: serde_json::Error) -> Self {
        CompressionError::SerializationError(e.to_string())
    }
}

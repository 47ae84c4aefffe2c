// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for the ordering pipeline.
//!
//! Every variant is fatal. The pipeline never retries and never writes a
//! partial artifact.

use thiserror::Error;

use crate::ports::BoxError;
use crate::render::EncodingError;

/// Errors produced while fetching, transforming, or persisting an ordering.
#[derive(Debug, Error)]
pub enum OrderingError {
    /// The input document could not be retrieved.
    #[error("failed to fetch emoji metadata from {origin}: {source}")]
    Fetch {
        /// Human-readable description of the source (URL or path).
        origin: String,
        /// Underlying transport or I/O failure.
        #[source]
        source: BoxError,
    },
    /// The input document does not have the expected shape.
    #[error("malformed emoji metadata: {0}")]
    MalformedInput(String),
    /// A code point is not a Unicode scalar value.
    #[error("group {group:?}: {source}")]
    Encoding {
        /// Display name of the group holding the bad entry.
        group: String,
        /// Offending code point details.
        #[source]
        source: EncodingError,
    },
    /// The generated artifact could not be persisted.
    #[error("failed to write artifact to {target}: {source}")]
    Write {
        /// Human-readable description of the sink.
        target: String,
        /// Underlying I/O failure.
        #[source]
        source: BoxError,
    },
    /// The requested ordering constant name is not usable in generated code.
    #[error("invalid ordering constant name {0:?}")]
    InvalidConstName(String),
}

impl From<serde_json::Error> for OrderingError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Boundary ports for reading the dataset and persisting the artifact.
//!
//! Adapters (HTTP, files, stdio) live in `emoji-ordering-io`; the in-memory
//! implementations here let the pipeline run without any I/O.

use std::cell::RefCell;

/// Boxed error returned by port adapters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Source of the raw input document.
pub trait DatasetSource {
    /// Where the document comes from (URL, path), for logs and errors.
    fn describe(&self) -> String;
    /// Retrieve the complete document. Partial reads are errors.
    fn fetch(&self) -> Result<Vec<u8>, BoxError>;
}

/// Destination for the generated artifact.
pub trait ArtifactSink {
    /// Where the artifact goes, for logs and errors.
    fn describe(&self) -> String;
    /// Persist `text` in full, or fail without leaving a partial artifact.
    fn write(&self, text: &str) -> Result<(), BoxError>;
}

/// Source serving a fixed in-memory document.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    bytes: Vec<u8>,
}

impl StaticSource {
    /// Serve `bytes`, described as `label`.
    pub fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            bytes: bytes.into(),
        }
    }
}

impl DatasetSource for StaticSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>, BoxError> {
        Ok(self.bytes.clone())
    }
}

/// Sink that keeps every write in memory.
#[derive(Debug, Default)]
pub struct CapturingSink {
    writes: RefCell<Vec<String>>,
}

impl CapturingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every artifact written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// The most recent artifact, if any.
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl ArtifactSink for CapturingSink {
    fn describe(&self) -> String {
        "<memory>".to_owned()
    }

    fn write(&self, text: &str) -> Result<(), BoxError> {
        self.writes.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Local file and stdio adapters.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use emoji_ordering_core::{ArtifactSink, BoxError, DatasetSource};
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads the ordering document from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<u8>, BoxError> {
        Ok(fs::read(&self.path)?)
    }
}

/// Reads the ordering document from standard input until EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl DatasetSource for StdinSource {
    fn describe(&self) -> String {
        "<stdin>".to_owned()
    }

    fn fetch(&self) -> Result<Vec<u8>, BoxError> {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

/// Replaces a file atomically: the text goes to a temporary file in the same
/// directory, which is then renamed over the target.
///
/// The parent directory must already exist.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArtifactSink for FileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&self, text: &str) -> Result<(), BoxError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;
        debug!(tmp = %tmp.path().display(), "persisting artifact");
        tmp.persist(&self.path)?;
        Ok(())
    }
}

/// Writes the artifact to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ArtifactSink for StdoutSink {
    fn describe(&self) -> String {
        "<stdout>".to_owned()
    }

    fn write(&self, text: &str) -> Result<(), BoxError> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

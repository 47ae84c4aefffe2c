// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! I/O adapters for the `emoji-ordering-core` ports.
//!
//! - [`HttpSource`]: blocking HTTP GET of the upstream ordering document.
//! - [`FileSource`] / [`StdinSource`]: local documents for offline runs.
//! - [`FileSink`]: atomic replace of the generated file.
//! - [`StdoutSink`]: artifact to standard output.
//! - [`FsConfigStore`]: JSON config files under the platform config dir.

mod config_fs;
mod fs;
mod http;

pub use config_fs::FsConfigStore;
pub use fs::{FileSink, FileSource, StdinSource, StdoutSink};
pub use http::{HttpSource, DEFAULT_TIMEOUT};

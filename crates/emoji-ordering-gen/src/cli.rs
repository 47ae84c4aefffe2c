// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.
//!
//! Flags override the stored config, which overrides built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use emoji_ordering_core::{ArtifactSink, DatasetSource, GeneratorConfig};
use emoji_ordering_io::{
    FileSink, FileSource, HttpSource, StdinSource, StdoutSink, DEFAULT_TIMEOUT,
};

/// Generate the Google emoji ordering table (`GOOGLE_ORDERING` + per-group ranges).
#[derive(Parser, Debug)]
#[command(name = "emoji-ordering-gen", version, disable_help_subcommand = true)]
pub struct Cli {
    /// Directory holding `emoji-ordering.json` (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the Rust ordering table.
    Generate(GenerateArgs),
    /// Print a grouped, human-readable listing of the ordering.
    Dump(DumpArgs),
    /// Write the default config file.
    InitConfig {
        /// Overwrite an existing config.
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Where the ordering document comes from.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Where the table goes.
    #[command(flatten)]
    pub output: OutputArgs,

    /// Name of the generated ordering constant.
    #[arg(long)]
    pub const_name: Option<String>,

    /// Verify the output file is current instead of writing it.
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,
}

/// Arguments for `dump`.
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Where the ordering document comes from.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Where the listing goes (stdout unless `--out` is given).
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Input selection shared by commands.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Fetch the ordering document from this URL.
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,

    /// Read the ordering document from a file instead (`-` for stdin).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl SourceArgs {
    /// Build the dataset source: `--input`, else `--url`, else the configured URL.
    pub fn resolve(&self, config: &GeneratorConfig) -> Box<dyn DatasetSource> {
        match &self.input {
            Some(path) if path == Path::new("-") => Box::new(StdinSource),
            Some(path) => Box::new(FileSource::new(path)),
            None => {
                let url = self.url.as_ref().unwrap_or(&config.source_url);
                Box::new(HttpSource::new(url).with_timeout(Duration::from_secs(self.timeout)))
            }
        }
    }
}

/// Output selection shared by commands.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Write to this path.
    #[arg(long, conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// Write to stdout.
    #[arg(long)]
    pub stdout: bool,
}

impl OutputArgs {
    /// Build the sink: `--stdout`, else `--out`, else `fallback`, else stdout.
    pub fn resolve(&self, fallback: Option<&Path>) -> Box<dyn ArtifactSink> {
        if self.stdout {
            return Box::new(StdoutSink);
        }
        match self.out.as_deref().or(fallback) {
            Some(path) => Box::new(FileSink::new(path)),
            None => Box::new(StdoutSink),
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Source → assemble → emit → sink, in one pass.
//!
//! The sink is only called once the artifact is completely rendered, so any
//! failure upstream of it leaves the previous artifact untouched.

use tracing::info;

use crate::assemble::{assemble, EmojiOrdering};
use crate::emit::{emit_dump, CodeEmitter};
use crate::error::OrderingError;
use crate::model::EmojiDataset;
use crate::ports::{ArtifactSink, DatasetSource};

/// Which artifact the pipeline renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rust source with the ordering list and range constants.
    #[default]
    RustSource,
    /// Human-readable grouped listing.
    Dump,
}

/// One generator run's settings.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    emitter: CodeEmitter,
    format: OutputFormat,
}

impl Pipeline {
    /// Pipeline emitting Rust source through `emitter`.
    pub fn new(emitter: CodeEmitter) -> Self {
        Self {
            emitter,
            format: OutputFormat::RustSource,
        }
    }

    /// Switch the rendered artifact.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Fetch, assemble, and render without writing anything.
    pub fn render<S>(&self, source: &S) -> Result<(EmojiOrdering, String), OrderingError>
    where
        S: DatasetSource + ?Sized,
    {
        let origin = source.describe();
        info!(source = %origin, "fetching emoji metadata");
        let bytes = source
            .fetch()
            .map_err(|source| OrderingError::Fetch { origin, source })?;

        let dataset = EmojiDataset::from_json(&bytes)?;
        info!(
            "parsed {} items in {} groups",
            dataset.item_count(),
            dataset.groups.len()
        );
        let ordering = assemble(&dataset)?;
        log_summary(&ordering);

        let text = match self.format {
            OutputFormat::RustSource => self.emitter.emit(&ordering),
            OutputFormat::Dump => emit_dump(&ordering),
        };
        Ok((ordering, text))
    }

    /// Full run: render, then hand the artifact to `sink`.
    pub fn run<S, K>(&self, source: &S, sink: &K) -> Result<EmojiOrdering, OrderingError>
    where
        S: DatasetSource + ?Sized,
        K: ArtifactSink + ?Sized,
    {
        let (ordering, text) = self.render(source)?;
        let target = sink.describe();
        if let Err(source) = sink.write(&text) {
            return Err(OrderingError::Write { target, source });
        }
        info!(sink = %target, bytes = text.len(), "wrote artifact");
        Ok(ordering)
    }
}

fn log_summary(ordering: &EmojiOrdering) {
    info!(
        "found {} emojis in {} groups",
        ordering.len(),
        ordering.ranges().len()
    );
    for range in ordering.by_start() {
        info!(
            "  {}: {} -> {} ({} emojis)",
            range.group,
            range.start,
            range.end(),
            range.count
        );
    }
    for skipped in ordering.skipped_groups() {
        info!(group = %skipped, "ignored unrecognized group");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::{BoxError, CapturingSink, StaticSource};
    use crate::group::CanonicalGroup;

    const SCENARIO: &str = r#"[
        {"group":"Smileys and emotions","emoji":[{"base":[128512]},{"base":[128515],"alternates":[[128515,127995]]}]},
        {"group":"Unknown Category","emoji":[{"base":[1]}]},
        {"group":"Flags","emoji":[{"base":[127988]}]}
    ]"#;

    struct FailingSource;

    impl DatasetSource for FailingSource {
        fn describe(&self) -> String {
            "https://example.invalid/ordering.json".to_owned()
        }

        fn fetch(&self) -> Result<Vec<u8>, BoxError> {
            Err("connection refused".into())
        }
    }

    struct FailingSink;

    impl ArtifactSink for FailingSink {
        fn describe(&self) -> String {
            "/nonexistent/out.rs".to_owned()
        }

        fn write(&self, _text: &str) -> Result<(), BoxError> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory").into())
        }
    }

    #[test]
    fn run_writes_artifact_once() {
        let sink = CapturingSink::new();
        let ordering = Pipeline::default()
            .run(&StaticSource::new("scenario", SCENARIO), &sink)
            .unwrap();
        assert_eq!(ordering.len(), 4);
        assert_eq!(sink.writes().len(), 1);
        let text = sink.last().unwrap();
        assert!(text.contains("pub const SMILEYS_AND_EMOTIONS: (usize, usize) = (0, 3);"));
        assert!(text.contains("pub const FLAGS: (usize, usize) = (3, 1);"));
        assert!(!text.contains("UNKNOWN"));
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let pipeline = Pipeline::default();
        let source = StaticSource::new("scenario", SCENARIO);
        let (_, first) = pipeline.render(&source).unwrap();
        let (_, second) = pipeline.render(&source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dump_format_uses_listing() {
        let (ordering, text) = Pipeline::default()
            .with_format(OutputFormat::Dump)
            .render(&StaticSource::new("scenario", SCENARIO))
            .unwrap();
        assert!(text.starts_with("--- Smileys and emotions ---\n"));
        assert_eq!(
            ordering.group_slice(CanonicalGroup::Flags).unwrap(),
            ["🏴"]
        );
    }

    #[test]
    fn fetch_failure_is_fatal_and_nothing_is_written() {
        let sink = CapturingSink::new();
        let err = Pipeline::default().run(&FailingSource, &sink).unwrap_err();
        assert!(matches!(err, OrderingError::Fetch { .. }));
        assert!(err.to_string().contains("example.invalid"));
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn malformed_input_writes_nothing() {
        let sink = CapturingSink::new();
        let source = StaticSource::new("bad", r#"[{"group":"Flags","emoji":[{"alternates":[]}]}]"#);
        let err = Pipeline::default().run(&source, &sink).unwrap_err();
        assert!(matches!(err, OrderingError::MalformedInput(_)));
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn encoding_failure_writes_nothing() {
        let sink = CapturingSink::new();
        let source = StaticSource::new("bad", r#"[{"group":"Flags","emoji":[{"base":[55296]}]}]"#);
        let err = Pipeline::default().run(&source, &sink).unwrap_err();
        assert!(matches!(err, OrderingError::Encoding { .. }));
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn write_failure_is_reported_with_target() {
        let err = Pipeline::default()
            .run(&StaticSource::new("scenario", SCENARIO), &FailingSink)
            .unwrap_err();
        assert!(matches!(err, OrderingError::Write { .. }));
        assert!(err.to_string().contains("/nonexistent/out.rs"));
    }
}

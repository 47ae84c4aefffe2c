// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic emoji ordering for generated lookup tables.
//!
//! The input is grouped emoji metadata (groups → entries → alternates, as
//! published by Google's emoji-metadata project). The output is one flat list
//! of rendered emoji plus a `(start, count)` range per canonical group, emitted
//! as a Rust source file.
//!
//! # Determinism Invariant
//!
//! Identical input bytes produce byte-identical artifacts. Ranges are gapless,
//! non-overlapping, and sorted by `start` they reproduce input encounter order.
//! Groups whose display name is not one of the nine canonical names are dropped
//! without a trace in the output.
//!
//! Network and filesystem access live behind the [`DatasetSource`] and
//! [`ArtifactSink`] ports; adapters are provided by `emoji-ordering-io`.

pub mod assemble;
pub mod config;
pub mod emit;
pub mod error;
pub mod group;
pub mod model;
pub mod pipeline;
pub mod ports;
pub mod render;

pub use assemble::{assemble, EmojiOrdering, GroupRange, GroupRangeIndex};
pub use config::GeneratorConfig;
pub use emit::{emit_dump, CodeEmitter, DEFAULT_ORDERING_CONST};
pub use error::OrderingError;
pub use group::{map_group_name, CanonicalGroup};
pub use model::{CodePoints, EmojiDataset, Entry, Group};
pub use pipeline::{OutputFormat, Pipeline};
pub use ports::{ArtifactSink, BoxError, CapturingSink, DatasetSource, StaticSource};
pub use render::{render, EncodingError};

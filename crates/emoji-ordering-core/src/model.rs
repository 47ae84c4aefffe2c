// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Input document structs (googlefonts emoji-metadata ordering JSON).
//!
//! Only the fields the ordering needs are modeled; everything else in the
//! upstream document (shortcodes, emoticons, animation flags) is ignored.

use serde::Deserialize;

use crate::error::OrderingError;

/// A sequence of Unicode code points denoting one emoji.
pub type CodePoints = Vec<u32>;

/// Root document: groups in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EmojiDataset {
    /// Groups in input order.
    pub groups: Vec<Group>,
}

/// One upstream group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    /// Free-form display name; only the canonical table's names are kept.
    #[serde(rename = "group")]
    pub display_name: String,
    /// Entries in input order.
    #[serde(rename = "emoji")]
    pub entries: Vec<Entry>,
}

/// One emoji and its variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Canonical code point sequence.
    pub base: CodePoints,
    /// Alternate sequences (skin tones and similar); absent means empty.
    #[serde(default)]
    pub alternates: Vec<CodePoints>,
}

impl EmojiDataset {
    /// Parse the upstream JSON document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, OrderingError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Total number of rendered items the dataset would produce if every group
    /// were recognized.
    pub fn item_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| &g.entries)
            .map(|e| 1 + e.alternates.len())
            .sum()
    }
}

impl Group {
    /// Build a group from a display name and entries.
    pub fn new(display_name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            display_name: display_name.into(),
            entries,
        }
    }
}

impl Entry {
    /// Entry without alternates.
    pub fn base(base: &[u32]) -> Self {
        Self {
            base: base.to_vec(),
            alternates: Vec::new(),
        }
    }

    /// Entry with alternates.
    pub fn with_alternates(base: &[u32], alternates: Vec<CodePoints>) -> Self {
        Self {
            base: base.to_vec(),
            alternates,
        }
    }
}

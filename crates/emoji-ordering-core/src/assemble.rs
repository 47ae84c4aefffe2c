// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flattening of grouped entries into one ordering plus per-group ranges.
//!
//! Invariants upheld by [`assemble`]:
//! - `emojis.len()` equals the sum of every range's `count`.
//! - In encounter order, ranges tile `0..emojis.len()` with no gaps or
//!   overlaps, including zero-count ranges.
//! - Within a group, each base precedes its own alternates, which precede the
//!   next entry's base.
//! - Unrecognized groups contribute nothing.

use std::collections::BTreeMap;
use std::ops::Range;

use tracing::debug;

use crate::error::OrderingError;
use crate::group::{map_group_name, CanonicalGroup};
use crate::model::{EmojiDataset, Group};
use crate::render::render;

/// Contiguous slice of the ordering that belongs to one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRange {
    /// Canonical group owning the slice.
    pub group: CanonicalGroup,
    /// Offset of the first item.
    pub start: usize,
    /// Number of items (may be zero).
    pub count: usize,
}

impl GroupRange {
    /// One past the last item.
    pub const fn end(&self) -> usize {
        self.start + self.count
    }

    /// The range as a `start..end` index range.
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Ranges keyed by canonical group; iterates in table order.
pub type GroupRangeIndex = BTreeMap<CanonicalGroup, GroupRange>;

/// Result of [`assemble`]: the flat ordering and its group index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiOrdering {
    emojis: Vec<String>,
    ranges: GroupRangeIndex,
    encountered: Vec<GroupRange>,
    skipped: Vec<String>,
}

impl EmojiOrdering {
    /// Every rendered emoji, in order.
    pub fn emojis(&self) -> &[String] {
        &self.emojis
    }

    /// Range index keyed by canonical group.
    pub fn ranges(&self) -> &GroupRangeIndex {
        &self.ranges
    }

    /// Ranges in input encounter order.
    ///
    /// Zero-count ranges share their `start` with the next group, so this is
    /// recorded during assembly rather than recovered by sorting.
    pub fn by_start(&self) -> &[GroupRange] {
        &self.encountered
    }

    /// Emoji belonging to `group`, or `None` if the group was absent.
    pub fn group_slice(&self, group: CanonicalGroup) -> Option<&[String]> {
        self.ranges
            .get(&group)
            .and_then(|r| self.emojis.get(r.as_range()))
    }

    /// Display names of input groups that were dropped, in input order.
    pub fn skipped_groups(&self) -> &[String] {
        &self.skipped
    }

    /// Number of rendered emoji.
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    /// True when no recognized group contributed any emoji.
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

/// Flatten `dataset` into an [`EmojiOrdering`].
///
/// Every entry is rendered before its group name is resolved, so a bad code
/// point fails the run even inside a group that would have been dropped.
pub fn assemble(dataset: &EmojiDataset) -> Result<EmojiOrdering, OrderingError> {
    let mut ordering = EmojiOrdering::default();
    let mut cursor = 0usize;

    for group in &dataset.groups {
        let buffer = render_group(group)?;

        let Some(canonical) = map_group_name(&group.display_name) else {
            debug!(group = %group.display_name, items = buffer.len(), "skipping unrecognized group");
            ordering.skipped.push(group.display_name.clone());
            continue;
        };

        if ordering.ranges.contains_key(&canonical) {
            return Err(OrderingError::MalformedInput(format!(
                "group {:?} appears more than once",
                group.display_name
            )));
        }

        let range = GroupRange {
            group: canonical,
            start: cursor,
            count: buffer.len(),
        };
        debug!(group = %canonical, start = range.start, count = range.count, "assigned range");
        ordering.ranges.insert(canonical, range);
        ordering.encountered.push(range);
        ordering.emojis.extend(buffer);
        cursor = range.end();
    }

    Ok(ordering)
}

fn render_group(group: &Group) -> Result<Vec<String>, OrderingError> {
    let encoding = |source| OrderingError::Encoding {
        group: group.display_name.clone(),
        source,
    };
    let mut buffer = Vec::with_capacity(group.entries.len());
    for entry in &group.entries {
        buffer.push(render(&entry.base).map_err(encoding)?);
        for alternate in &entry.alternates {
            buffer.push(render(alternate).map_err(encoding)?);
        }
    }
    Ok(buffer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Entry;

    fn dataset(groups: Vec<Group>) -> EmojiDataset {
        EmojiDataset { groups }
    }

    #[test]
    fn end_to_end_scenario() {
        let input = dataset(vec![
            Group::new(
                "Smileys and emotions",
                vec![
                    Entry::base(&[128512]),
                    Entry::with_alternates(&[128515], vec![vec![128515, 127995]]),
                ],
            ),
            Group::new("Unknown Category", vec![Entry::base(&[1])]),
            Group::new("Flags", vec![Entry::base(&[127988])]),
        ]);

        let ordering = assemble(&input).unwrap();
        assert_eq!(ordering.emojis(), ["😀", "😃", "😃🏻", "🏴"]);
        assert_eq!(
            ordering.ranges()[&CanonicalGroup::SmileysAndEmotions].as_range(),
            0..3
        );
        assert_eq!(ordering.ranges()[&CanonicalGroup::Flags].as_range(), 3..4);
        assert_eq!(ordering.ranges().len(), 2);
        assert_eq!(ordering.skipped_groups(), ["Unknown Category"]);
    }

    #[test]
    fn empty_recognized_group_keeps_zero_count_range() {
        let input = dataset(vec![
            Group::new("People", vec![Entry::base(&[128075])]),
            Group::new("Objects", vec![]),
            Group::new("Symbols", vec![Entry::base(&[9851])]),
        ]);
        let ordering = assemble(&input).unwrap();
        let objects = ordering.ranges()[&CanonicalGroup::Objects];
        assert_eq!((objects.start, objects.count), (1, 0));
        assert_eq!(ordering.ranges()[&CanonicalGroup::Symbols].start, 1);
        assert_eq!(ordering.group_slice(CanonicalGroup::Objects), Some(&[][..]));
    }

    #[test]
    fn unrecognized_groups_do_not_advance_cursor() {
        let input = dataset(vec![
            Group::new("Component", vec![Entry::base(&[127995]), Entry::base(&[127996])]),
            Group::new("Food and drink", vec![Entry::base(&[127823])]),
        ]);
        let ordering = assemble(&input).unwrap();
        assert_eq!(ordering.len(), 1);
        assert_eq!(ordering.ranges()[&CanonicalGroup::FoodAndDrink].start, 0);
    }

    #[test]
    fn only_unrecognized_groups_yield_empty_ordering() {
        let input = dataset(vec![Group::new("Misc", vec![Entry::base(&[65])])]);
        let ordering = assemble(&input).unwrap();
        assert!(ordering.is_empty());
        assert!(ordering.ranges().is_empty());
    }

    #[test]
    fn alternates_follow_their_base() {
        let input = dataset(vec![Group::new(
            "People",
            vec![
                Entry::with_alternates(&[128075], vec![vec![128075, 127995], vec![128075, 127999]]),
                Entry::base(&[128074]),
            ],
        )]);
        let ordering = assemble(&input).unwrap();
        assert_eq!(ordering.emojis(), ["👋", "👋🏻", "👋🏿", "👊"]);
    }

    #[test]
    fn bad_code_point_fails_even_in_dropped_group() {
        let input = dataset(vec![
            Group::new("Flags", vec![Entry::base(&[127988])]),
            Group::new("Unknown", vec![Entry::base(&[0xD800])]),
        ]);
        let err = assemble(&input).unwrap_err();
        assert!(matches!(
            err,
            OrderingError::Encoding { ref group, source } if group == "Unknown" && source.code_point == 0xD800
        ));
    }

    #[test]
    fn duplicate_recognized_group_is_malformed() {
        let input = dataset(vec![
            Group::new("Flags", vec![Entry::base(&[127988])]),
            Group::new("Symbols", vec![Entry::base(&[9851])]),
            Group::new("Flags", vec![Entry::base(&[127987])]),
        ]);
        assert!(matches!(
            assemble(&input),
            Err(OrderingError::MalformedInput(_))
        ));
    }

    #[test]
    fn by_start_follows_encounter_order_not_table_order() {
        let input = dataset(vec![
            Group::new("Flags", vec![Entry::base(&[127988])]),
            Group::new("Smileys and emotions", vec![Entry::base(&[128512])]),
        ]);
        let ordering = assemble(&input).unwrap();
        let groups: Vec<_> = ordering.by_start().iter().map(|r| r.group).collect();
        assert_eq!(
            groups,
            [CanonicalGroup::Flags, CanonicalGroup::SmileysAndEmotions]
        );
        let keys: Vec<_> = ordering.ranges().keys().copied().collect();
        assert_eq!(
            keys,
            [CanonicalGroup::SmileysAndEmotions, CanonicalGroup::Flags]
        );
    }

    #[test]
    fn empty_group_stays_ahead_of_the_group_sharing_its_start() {
        let input = dataset(vec![
            Group::new("Symbols", vec![]),
            Group::new("Objects", vec![Entry::base(&[0x1F4F1])]),
        ]);
        let ordering = assemble(&input).unwrap();
        let ranges: Vec<_> = ordering
            .by_start()
            .iter()
            .map(|r| (r.group, r.start, r.count))
            .collect();
        assert_eq!(
            ranges,
            [
                (CanonicalGroup::Symbols, 0, 0),
                (CanonicalGroup::Objects, 0, 1)
            ]
        );
        for pair in ordering.by_start().windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text artifacts rendered from an [`EmojiOrdering`].
//!
//! [`CodeEmitter`] produces the Rust source table; [`emit_dump`] produces a
//! human-readable listing for eyeballing diffs between upstream releases.
//! Both are pure functions of their input.

use std::fmt::Write as _;

use crate::assemble::EmojiOrdering;
use crate::error::OrderingError;
use crate::group::CanonicalGroup;

/// Name of the ordering constant when none is configured.
pub const DEFAULT_ORDERING_CONST: &str = "GOOGLE_ORDERING";

const HEADER: &str = "// @generated by emoji-ordering-gen. Do not edit by hand.\n";

/// Emoji per line in [`emit_dump`] output.
const DUMP_ROW_LEN: usize = 9;

/// Renders an ordering as a Rust source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEmitter {
    const_name: String,
}

impl Default for CodeEmitter {
    fn default() -> Self {
        Self {
            const_name: DEFAULT_ORDERING_CONST.to_owned(),
        }
    }
}

impl CodeEmitter {
    /// Emitter naming the ordering list `const_name`.
    ///
    /// The name must be a SCREAMING_SNAKE_CASE identifier and must not shadow
    /// one of the group range constants.
    pub fn new(const_name: impl Into<String>) -> Result<Self, OrderingError> {
        let const_name = const_name.into();
        if !is_screaming_ident(&const_name)
            || CanonicalGroup::ALL
                .iter()
                .any(|g| g.const_name() == const_name)
        {
            return Err(OrderingError::InvalidConstName(const_name));
        }
        Ok(Self { const_name })
    }

    /// Name of the ordering constant.
    pub fn const_name(&self) -> &str {
        &self.const_name
    }

    /// Render `ordering`: the list constant first, then one `(start, count)`
    /// constant per present group in table order.
    pub fn emit(&self, ordering: &EmojiOrdering) -> String {
        let mut out = String::with_capacity(HEADER.len() + ordering.len() * 16);
        out.push_str(HEADER);
        out.push('\n');

        let _ = writeln!(out, "pub const {}: &[&str] = &[", self.const_name);
        for emoji in ordering.emojis() {
            out.push_str("    \"");
            push_escaped(&mut out, emoji);
            out.push_str("\",\n");
        }
        out.push_str("];\n");

        if !ordering.ranges().is_empty() {
            out.push('\n');
        }
        for range in ordering.ranges().values() {
            let _ = writeln!(
                out,
                "pub const {}: (usize, usize) = ({}, {});",
                range.group.const_name(),
                range.start,
                range.count
            );
        }
        out
    }
}

/// Human-readable listing: one `--- <group> ---` header per group in
/// encounter order, emoji separated by spaces, nine per line.
pub fn emit_dump(ordering: &EmojiOrdering) -> String {
    let mut out = String::new();
    for range in ordering.by_start() {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        let _ = writeln!(out, "--- {} ---", range.group.display_name());
        let emojis = ordering.emojis().get(range.as_range()).unwrap_or_default();
        for (i, emoji) in emojis.iter().enumerate() {
            out.push_str(emoji);
            out.push(if (i + 1) % DUMP_ROW_LEN == 0 { '\n' } else { ' ' });
        }
    }
    out
}

fn is_screaming_ident(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some('A'..='Z' | '_'))
        && chars.all(|c| matches!(c, 'A'..='Z' | '0'..='9' | '_'))
        && name != "_"
}

// Emoji text stays verbatim; only what a Rust string literal cannot hold raw
// is escaped.
fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
            }
            c => out.push(c),
        }
    }
}

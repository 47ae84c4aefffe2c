// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CLI entry point for the emoji ordering generator.

use anyhow::Result;
use emoji_ordering_gen::entrypoint;

fn main() -> Result<()> {
    entrypoint()
}

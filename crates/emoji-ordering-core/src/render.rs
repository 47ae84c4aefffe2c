// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Code point sequence → string rendering.

use thiserror::Error;

/// A code point that does not denote a Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("code point U+{code_point:04X} at position {position} is not a Unicode scalar value")]
pub struct EncodingError {
    /// The rejected value.
    pub code_point: u32,
    /// Index of the value within its sequence.
    pub position: usize,
}

/// Concatenate the characters denoted by `code_points`, in order.
///
/// No normalization, reordering, or grapheme validation is performed; modifier
/// and ZWJ sequences come out exactly as listed.
pub fn render(code_points: &[u32]) -> Result<String, EncodingError> {
    let mut out = String::with_capacity(code_points.len() * 4);
    for (position, &code_point) in code_points.iter().enumerate() {
        let ch = char::from_u32(code_point).ok_or(EncodingError {
            code_point,
            position,
        })?;
        out.push(ch);
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_code_point() {
        assert_eq!(render(&[0x1F600]).unwrap(), "😀");
    }

    #[test]
    fn zwj_sequence_is_plain_concatenation() {
        let flag = render(&[0x1F3F3, 0xFE0F, 0x200D, 0x1F308]).unwrap();
        assert_eq!(flag, "🏳️‍🌈");
        assert_eq!(
            flag.chars().map(u32::from).collect::<Vec<_>>(),
            vec![0x1F3F3, 0xFE0F, 0x200D, 0x1F308]
        );
    }

    #[test]
    fn skin_tone_modifier_follows_base() {
        assert_eq!(render(&[128515, 127995]).unwrap(), "😃🏻");
    }

    #[test]
    fn empty_sequence_renders_empty() {
        assert_eq!(render(&[]).unwrap(), "");
    }

    #[test]
    fn surrogate_is_rejected_with_position() {
        let err = render(&[0x1F600, 0xD800]).unwrap_err();
        assert_eq!(
            err,
            EncodingError {
                code_point: 0xD800,
                position: 1
            }
        );
    }

    #[test]
    fn out_of_range_is_rejected() {
        let err = render(&[0x11_0000]).unwrap_err();
        assert_eq!(err.position, 0);
        assert!(err.to_string().contains("U+110000"));
    }
}

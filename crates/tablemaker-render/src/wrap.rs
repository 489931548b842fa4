// Dweve Table Maker - Synthetic table fixture generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Greedy text wrapping measured in pixels.
//!
//! ```
//! use tablemaker_core::WrapMode;
//! use tablemaker_render::{wrap_text, BitmapFont};
//!
//! let font = BitmapFont::new(1);
//! // Each glyph is 8px wide: 40px holds five characters.
//! let lines = wrap_text("lorem ipsum dolor", 40, WrapMode::Word, &font);
//! assert_eq!(lines, vec!["lorem", "ipsum", "dolor"]);
//! ```

use crate::metrics::TextMetrics;
use tablemaker_core::WrapMode;
use unicode_segmentation::UnicodeSegmentation;

/// Break `text` into lines no wider than `max_width` pixels.
///
/// - [`WrapMode::None`] returns the text as a single line.
/// - [`WrapMode::Word`] packs whitespace-separated words greedily; a word
///   wider than the budget sits alone on its own line and overflows.
/// - [`WrapMode::Char`] packs grapheme clusters greedily, breaking words.
///
/// The result always has at least one line.
pub fn wrap_text<M: TextMetrics + ?Sized>(
    text: &str,
    max_width: u32,
    mode: WrapMode,
    metrics: &M,
) -> Vec<String> {
    let lines = match mode {
        WrapMode::None => vec![text.to_string()],
        WrapMode::Word => wrap_words(text, max_width, metrics),
        WrapMode::Char => wrap_chars(text, max_width, metrics),
    };
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn wrap_words<M: TextMetrics + ?Sized>(text: &str, max_width: u32, metrics: &M) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if metrics.text_width(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn wrap_chars<M: TextMetrics + ?Sized>(text: &str, max_width: u32, metrics: &M) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for grapheme in text.graphemes(true) {
        let width = metrics.text_width(grapheme);
        if current_width + width > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push_str(grapheme);
        current_width += width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pixel extent `(width, height)` of already wrapped lines, without padding.
pub fn measure_lines<M: TextMetrics + ?Sized>(lines: &[String], metrics: &M) -> (u32, u32) {
    let width = lines
        .iter()
        .map(|l| metrics.text_width(l))
        .max()
        .unwrap_or(0);
    (width, lines.len() as u32 * metrics.line_height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::BitmapFont;

    fn font() -> BitmapFont {
        BitmapFont::new(1)
    }

    #[test]
    fn test_none_keeps_one_line() {
        let text = "a fairly long sentence that would normally wrap";
        assert_eq!(wrap_text(text, 16, WrapMode::None, &font()), vec![text]);
    }

    #[test]
    fn test_word_packs_greedily() {
        // 88px fits eleven glyphs.
        let lines = wrap_text("aa bb cc dd ee", 88, WrapMode::Word, &font());
        assert_eq!(lines, vec!["aa bb cc dd", "ee"]);
    }

    #[test]
    fn test_word_long_token_overflows() {
        let lines = wrap_text("x 1234567890 y", 40, WrapMode::Word, &font());
        assert_eq!(lines, vec!["x", "1234567890", "y"]);
        assert!(font().text_width(&lines[1]) > 40);
    }

    #[test]
    fn test_word_collapses_whitespace() {
        let lines = wrap_text("  a   b  ", 160, WrapMode::Word, &font());
        assert_eq!(lines, vec!["a b"]);
    }

    #[test]
    fn test_char_breaks_words() {
        let lines = wrap_text("abcdefgh", 24, WrapMode::Char, &font());
        assert_eq!(lines, vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_char_keeps_wide_glyph_whole() {
        // Each CJK glyph is 16px; 24px fits one.
        let lines = wrap_text("日本語", 24, WrapMode::Char, &font());
        assert_eq!(lines, vec!["日", "本", "語"]);
    }

    #[test]
    fn test_char_single_glyph_wider_than_budget() {
        let lines = wrap_text("ab", 4, WrapMode::Char, &font());
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", 40, WrapMode::Word, &font()), vec![""]);
        assert_eq!(wrap_text("", 40, WrapMode::Char, &font()), vec![""]);
    }

    #[test]
    fn test_measure_lines() {
        let lines = vec!["abc".to_string(), "a".to_string()];
        assert_eq!(measure_lines(&lines, &font()), (24, 24));
        assert_eq!(measure_lines(&[], &font()), (0, 0));
    }
}

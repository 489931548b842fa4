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

//! Text measurement and the built-in bitmap font.

use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, HIRAGANA_FONTS, LATIN_FONTS};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Side of one glyph cell of the bitmap font, before scaling.
pub const GLYPH_SIZE: u32 = 8;

/// Vertical gap between consecutive text lines, before scaling.
pub const LINE_GAP: u32 = 4;

/// Pixel measurement of single-line text.
///
/// Layout and wrapping only talk to this trait, so a different font can be
/// plugged in without touching the grid algorithm.
pub trait TextMetrics {
    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Distance between the tops of two consecutive lines.
    fn line_height(&self) -> u32;
}

/// 8x8 bitmap font scaled by an integer factor.
///
/// Every grapheme advances by its terminal column width (one or two cells),
/// so double-width scripts take twice the room of Latin text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Create a font with the given scale; zero is treated as one.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    /// The integer scale factor.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Width of one column cell in pixels.
    pub fn cell_width(&self) -> u32 {
        GLYPH_SIZE * self.scale
    }

    /// Bitmap rows for a character, if the font covers it.
    ///
    /// Each byte is one row, top to bottom; bit 0 is the leftmost pixel.
    pub fn glyph(&self, ch: char) -> Option<[u8; 8]> {
        BASIC_FONTS
            .get(ch)
            .or_else(|| LATIN_FONTS.get(ch))
            .or_else(|| GREEK_FONTS.get(ch))
            .or_else(|| HIRAGANA_FONTS.get(ch))
    }

    /// Column width of a grapheme: zero-width clusters still take one cell.
    pub fn grapheme_columns(grapheme: &str) -> u32 {
        grapheme.width().max(1) as u32
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TextMetrics for BitmapFont {
    fn text_width(&self, text: &str) -> u32 {
        text.graphemes(true)
            .map(|g| Self::grapheme_columns(g) * self.cell_width())
            .sum()
    }

    fn line_height(&self) -> u32 {
        (GLYPH_SIZE + LINE_GAP) * self.scale
    }
}

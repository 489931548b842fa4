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

//! Raster primitives: grid lines and bitmap glyphs.

use crate::borders::BorderStyle;
use crate::metrics::{BitmapFont, GLYPH_SIZE};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use unicode_segmentation::UnicodeSegmentation;

/// Spacing between the dots of a dashed line.
pub const DASH_STEP: u32 = 10;

/// Canvas background.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Text color.
pub const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Header cell shading.
pub const HEADER_FILL: Rgb<u8> = Rgb([235, 235, 235]);

/// Line orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Draw one grid line from `start` to `end` along `axis` at `offset`.
pub fn draw_grid_line(
    image: &mut RgbImage,
    axis: Axis,
    offset: u32,
    start: u32,
    end: u32,
    style: BorderStyle,
) {
    let Some(color) = style.color() else {
        return;
    };
    let point = |p: u32| match axis {
        Axis::Horizontal => (p as f32, offset as f32),
        Axis::Vertical => (offset as f32, p as f32),
    };
    match style {
        BorderStyle::Dashed => {
            for p in (start..end).step_by(DASH_STEP as usize) {
                draw_line_segment_mut(image, point(p), point((p + 1).min(end)), color);
            }
        }
        _ => draw_line_segment_mut(image, point(start), point(end), color),
    }
}

/// Fill a rectangle, ignoring degenerate sizes.
pub fn fill(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    if width > 0 && height > 0 {
        draw_filled_rect_mut(
            image,
            Rect::at(x as i32, y as i32).of_size(width, height),
            color,
        );
    }
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Bold text is struck twice, one pixel apart. Characters the font does not
/// cover are drawn as hollow boxes.
pub fn draw_text(image: &mut RgbImage, font: &BitmapFont, text: &str, x: u32, y: u32, bold: bool) {
    let mut pen = x;
    for grapheme in text.graphemes(true) {
        let columns = BitmapFont::grapheme_columns(grapheme);
        if let Some(ch) = grapheme.chars().next() {
            draw_glyph(image, font, ch, pen, y);
            if bold {
                draw_glyph(image, font, ch, pen + 1, y);
            }
        }
        pen = pen.saturating_add(columns * font.cell_width());
    }
}

fn draw_glyph(image: &mut RgbImage, font: &BitmapFont, ch: char, x: u32, y: u32) {
    let scale = font.scale();
    match font.glyph(ch) {
        Some(rows) => {
            for (dy, &bits) in rows.iter().enumerate() {
                for dx in 0..GLYPH_SIZE {
                    if (bits >> dx) & 1 == 1 {
                        fill(
                            image,
                            x + dx * scale,
                            y + dy as u32 * scale,
                            scale,
                            scale,
                            INK,
                        );
                    }
                }
            }
        }
        None if !ch.is_whitespace() => {
            let side = GLYPH_SIZE * scale;
            draw_hollow_rect_mut(
                image,
                Rect::at(x as i32, y as i32).of_size(side - scale, side - scale),
                INK,
            );
        }
        None => {}
    }
}

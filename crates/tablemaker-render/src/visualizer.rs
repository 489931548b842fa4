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

//! Table rasterization.

use crate::borders::BorderPlan;
use crate::draw::{draw_grid_line, draw_text, Axis, BACKGROUND, HEADER_FILL};
use crate::error::{RenderError, Result};
use crate::layout::GridLayout;
use crate::metrics::{BitmapFont, TextMetrics};
use image::RgbImage;
use imageproc::drawing::draw_filled_rect_mut;
use rand::Rng;
use tablemaker_core::{Configuration, RenderOptions, TableData, TableStyle, WrapMode};
use tracing::debug;

/// Default outer margin in pixels.
pub const DEFAULT_MARGIN: u32 = 10;

/// Renders [`TableData`] onto an RGB canvas.
///
/// Header cells are shaded, their text is bold and centered; body text is
/// left-aligned. Empty cells stay blank but keep their borders.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tablemaker_core::{RenderOptions, TableData, TableStyle, WrapMode};
/// use tablemaker_render::TableVisualizer;
///
/// let rows = vec![vec![Some("ID".to_string()), Some("Price".to_string())]];
/// let table = TableData::from_rows(rows, true, false).unwrap();
/// let visualizer = TableVisualizer::new(RenderOptions::default(), WrapMode::Word);
/// let image = visualizer
///     .render(&table, TableStyle::Uniform, &mut StdRng::seed_from_u64(1))
///     .unwrap();
/// assert_eq!(image.dimensions(), (110, 50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableVisualizer {
    options: RenderOptions,
    wrap_mode: WrapMode,
    margin: u32,
    font: BitmapFont,
}

impl TableVisualizer {
    /// Create a visualizer with [`DEFAULT_MARGIN`].
    pub fn new(options: RenderOptions, wrap_mode: WrapMode) -> Self {
        let font = BitmapFont::new(options.font_scale);
        Self {
            options,
            wrap_mode,
            margin: DEFAULT_MARGIN,
            font,
        }
    }

    /// Use the render options, wrap mode and margin of a configuration.
    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.render.clone(), config.wrap_mode).with_margin(config.margin)
    }

    /// Set the outer margin.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn font(&self) -> &BitmapFont {
        &self.font
    }

    /// Compute the geometry `table` would be drawn with.
    pub fn layout(&self, table: &TableData) -> Result<GridLayout> {
        self.options.validate()?;
        GridLayout::compute(table, &self.options, self.margin, self.wrap_mode, &self.font)
    }

    /// Draw `table`, picking grid line styles for `style` from `rng`.
    pub fn render<R: Rng>(
        &self,
        table: &TableData,
        style: TableStyle,
        rng: &mut R,
    ) -> Result<RgbImage> {
        let plan = BorderPlan::generate(style, table.row_count(), table.column_count(), rng);
        self.render_with_borders(table, &plan)
    }

    /// Draw `table` with a fixed border plan.
    ///
    /// # Errors
    ///
    /// - [`RenderError::InvalidOptions`] when the plan was made for a different grid
    /// - [`RenderError::Table`] when the render options are invalid
    /// - [`RenderError::CanvasTooLarge`] when the canvas exceeds the side limit
    pub fn render_with_borders(&self, table: &TableData, plan: &BorderPlan) -> Result<RgbImage> {
        if plan.row_count() != table.row_count() || plan.column_count() != table.column_count() {
            return Err(RenderError::InvalidOptions(format!(
                "border plan is {}x{}, table is {}x{}",
                plan.row_count(),
                plan.column_count(),
                table.row_count(),
                table.column_count()
            )));
        }

        let layout = self.layout(table)?;
        let (width, height) = layout.canvas_size();
        let mut image = RgbImage::from_pixel(width, height, BACKGROUND);

        for r in 0..table.row_count() {
            for c in 0..table.column_count() {
                if !table.is_header_cell(r, c) {
                    continue;
                }
                if let Some(rect) = layout.cell_bounds(r, c).to_rect() {
                    draw_filled_rect_mut(&mut image, rect, HEADER_FILL);
                }
            }
        }

        let xs = layout.column_edges();
        let ys = layout.row_edges();
        let (left, right) = (xs[0], xs[xs.len() - 1]);
        let (top, bottom) = (ys[0], ys[ys.len() - 1]);
        for (&y, &style) in ys.iter().zip(plan.horizontal()) {
            draw_grid_line(&mut image, Axis::Horizontal, y, left, right, style);
        }
        for (&x, &style) in xs.iter().zip(plan.vertical()) {
            draw_grid_line(&mut image, Axis::Vertical, x, top, bottom, style);
        }

        for r in 0..table.row_count() {
            for c in 0..table.column_count() {
                let Some(text) = layout.cell_text(r, c) else {
                    continue;
                };
                let header = table.is_header_cell(r, c);
                for (k, line) in text.lines.iter().enumerate() {
                    let line_width = self.font.text_width(line);
                    let (x, y) = layout.line_origin(r, c, k, line_width, header);
                    draw_text(&mut image, &self.font, line, x, y, header);
                }
            }
        }

        debug!(width, height, solid = plan.is_solid(), "rendered table");
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::borders::BorderStyle;
    use crate::draw::INK;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table(rows: &[&[Option<&str>]], header_row: bool) -> TableData {
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|c| c.map(str::to_string)).collect())
            .collect();
        TableData::from_rows(rows, header_row, false).unwrap()
    }

    fn visualizer() -> TableVisualizer {
        TableVisualizer::new(RenderOptions::default(), WrapMode::Word)
    }

    #[test]
    fn test_canvas_matches_layout() {
        let t = table(&[&[Some("a"), Some("b")], &[None, Some("c")]], false);
        let v = visualizer().with_margin(3);
        let image = v.render_with_borders(&t, &BorderPlan::solid(2, 2)).unwrap();
        assert_eq!(image.dimensions(), v.layout(&t).unwrap().canvas_size());
        assert_eq!(image.dimensions(), (86, 66));
    }

    #[test]
    fn test_outer_frame_drawn() {
        let t = table(&[&[Some("a")]], false);
        let image = visualizer()
            .render(&t, TableStyle::Random, &mut StdRng::seed_from_u64(9))
            .unwrap();
        // Top-left and bottom-left corners of the frame.
        assert_eq!(*image.get_pixel(10, 10), INK);
        assert_eq!(*image.get_pixel(10, 40), INK);
    }

    #[test]
    fn test_frame_complete_without_margin() {
        let t = table(&[&[Some("a"), Some("b")]], false);
        let image = visualizer()
            .with_margin(0)
            .render_with_borders(&t, &BorderPlan::solid(1, 2))
            .unwrap();
        assert_eq!(image.dimensions(), (80, 30));
        assert!((0..29).all(|y| *image.get_pixel(0, y) == INK));
        assert!((0..29).all(|y| *image.get_pixel(79, y) == INK));
        assert!((0..79).all(|x| *image.get_pixel(x, 0) == INK));
        assert!((0..79).all(|x| *image.get_pixel(x, 29) == INK));
    }

    #[test]
    fn test_header_is_shaded() {
        let t = table(&[&[Some("H")], &[Some("v")]], true);
        let image = visualizer()
            .render_with_borders(&t, &BorderPlan::solid(2, 1))
            .unwrap();
        // Just inside the header cell, away from text and borders.
        assert_eq!(*image.get_pixel(12, 38), HEADER_FILL);
        assert_eq!(*image.get_pixel(12, 68), BACKGROUND);
    }

    #[test]
    fn test_empty_table_cells_render_blank() {
        let t = table(&[&[Some("a"), None]], false);
        let image = visualizer()
            .render_with_borders(&t, &BorderPlan::solid(1, 2))
            .unwrap();
        let inked = (51..89)
            .flat_map(|x| (11..39).map(move |y| (x, y)))
            .filter(|&(x, y)| *image.get_pixel(x, y) == INK)
            .count();
        assert_eq!(inked, 0);
    }

    #[test]
    fn test_plan_mismatch() {
        let t = table(&[&[Some("a")]], false);
        let err = visualizer()
            .render_with_borders(&t, &BorderPlan::solid(2, 2))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidOptions(_)));
    }

    #[test]
    fn test_invalid_options() {
        let t = table(&[&[Some("a")]], false);
        let options = RenderOptions {
            font_scale: 0,
            ..RenderOptions::default()
        };
        let err = TableVisualizer::new(options, WrapMode::Word)
            .render_with_borders(&t, &BorderPlan::solid(1, 1))
            .unwrap_err();
        assert!(matches!(err, RenderError::Table(_)));
    }

    #[test]
    fn test_omitted_interior_line() {
        let t = table(&[&[Some("a")], &[Some("b")]], false);
        let solid = visualizer()
            .render_with_borders(&t, &BorderPlan::solid(2, 1))
            .unwrap();
        assert_eq!(*solid.get_pixel(30, 40), INK);

        let mut rng = StdRng::seed_from_u64(0);
        let plan = (0..)
            .map(|_| BorderPlan::generate(TableStyle::Random, 2, 1, &mut rng))
            .find(|p| p.horizontal()[1] == BorderStyle::Omitted)
            .unwrap();
        let image = visualizer().render_with_borders(&t, &plan).unwrap();
        assert_eq!(*image.get_pixel(30, 40), BACKGROUND);
    }
}

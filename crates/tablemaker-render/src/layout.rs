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

//! Pixel geometry of a table.
//!
//! Every non-empty cell is wrapped and measured; a column is as wide as its
//! widest cell and a row as tall as its tallest, never below the configured
//! minimum cell size. The canvas adds `margin` on every side.

use crate::error::{RenderError, Result};
use crate::metrics::TextMetrics;
use crate::wrap::{measure_lines, wrap_text};
use imageproc::rect::Rect;
use tablemaker_core::{RenderOptions, TableData, WrapMode};
use tracing::debug;

/// Wrapped text of one cell and its padded extent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    /// Lines after wrapping.
    pub lines: Vec<String>,
    /// Widest line plus horizontal padding.
    pub width: u32,
    /// Total line height plus vertical padding.
    pub height: u32,
}

/// Pixel rectangle of one cell, borders included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellBounds {
    /// The same area as an `imageproc` rectangle; `None` when degenerate.
    pub fn to_rect(self) -> Option<Rect> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(Rect::at(self.x as i32, self.y as i32).of_size(self.width, self.height))
    }
}

/// Column widths, row heights and wrapped text for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    margin: u32,
    padding: u32,
    line_height: u32,
    column_widths: Vec<u32>,
    row_heights: Vec<u32>,
    cells: Vec<Vec<Option<CellText>>>,
    canvas: (u32, u32),
}

impl GridLayout {
    /// Wrap and measure every cell of `table`.
    ///
    /// # Errors
    ///
    /// [`RenderError::CanvasTooLarge`] when either canvas side would exceed
    /// `options.max_canvas_side`.
    pub fn compute<M: TextMetrics + ?Sized>(
        table: &TableData,
        options: &RenderOptions,
        margin: u32,
        wrap_mode: WrapMode,
        metrics: &M,
    ) -> Result<Self> {
        let pad = 2 * options.padding;
        let cells: Vec<Vec<Option<CellText>>> = table
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        cell.as_deref().map(|text| {
                            let lines =
                                wrap_text(text, options.cell_width_budget, wrap_mode, metrics);
                            let (width, height) = measure_lines(&lines, metrics);
                            CellText {
                                lines,
                                width: width.saturating_add(pad),
                                height: height.saturating_add(pad),
                            }
                        })
                    })
                    .collect()
            })
            .collect();

        let column_widths: Vec<u32> = (0..table.column_count())
            .map(|c| {
                cells
                    .iter()
                    .filter_map(|row| row[c].as_ref().map(|t| t.width))
                    .fold(options.min_cell_width, u32::max)
            })
            .collect();
        let row_heights: Vec<u32> = cells
            .iter()
            .map(|row| {
                row.iter()
                    .flatten()
                    .map(|t| t.height)
                    .fold(options.min_cell_height, u32::max)
            })
            .collect();

        let width = canvas_side(margin, &column_widths);
        let height = canvas_side(margin, &row_heights);
        let max = u64::from(options.max_canvas_side);
        if width > max || height > max {
            return Err(RenderError::CanvasTooLarge {
                width,
                height,
                max: options.max_canvas_side,
            });
        }
        debug!(
            width,
            height,
            rows = row_heights.len(),
            columns = column_widths.len(),
            "laid out table"
        );

        Ok(Self {
            margin,
            padding: options.padding,
            line_height: metrics.line_height(),
            column_widths,
            row_heights,
            cells,
            // Both sides were checked against a u32 limit above.
            canvas: (width as u32, height as u32),
        })
    }

    /// Canvas `(width, height)` including margins.
    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas
    }

    /// Width of every column.
    pub fn column_widths(&self) -> &[u32] {
        &self.column_widths
    }

    /// Height of every row.
    pub fn row_heights(&self) -> &[u32] {
        &self.row_heights
    }

    /// Outer margin.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// X positions of the vertical grid lines, left to right.
    ///
    /// With no margin the right frame would start past the canvas, so it is
    /// pulled onto the last pixel column.
    pub fn column_edges(&self) -> Vec<u32> {
        edges(self.margin, &self.column_widths, self.canvas.0)
    }

    /// Y positions of the horizontal grid lines, top to bottom; the bottom
    /// frame stays on the canvas like in [`Self::column_edges`].
    pub fn row_edges(&self) -> Vec<u32> {
        edges(self.margin, &self.row_heights, self.canvas.1)
    }

    /// Wrapped text of a cell, `None` for empty cells.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<&CellText> {
        self.cells.get(row)?.get(column)?.as_ref()
    }

    /// Rectangle of a cell.
    pub fn cell_bounds(&self, row: usize, column: usize) -> CellBounds {
        let x = self.margin + self.column_widths[..column].iter().sum::<u32>();
        let y = self.margin + self.row_heights[..row].iter().sum::<u32>();
        CellBounds {
            x,
            y,
            width: self.column_widths[column],
            height: self.row_heights[row],
        }
    }

    /// Top-left pixel of line `index` of a cell.
    ///
    /// Body text starts `padding` pixels inside the cell; centered text is
    /// placed in the middle of the column.
    pub fn line_origin(
        &self,
        row: usize,
        column: usize,
        index: usize,
        line_width: u32,
        centered: bool,
    ) -> (u32, u32) {
        let bounds = self.cell_bounds(row, column);
        let x = if centered {
            bounds.x + bounds.width.saturating_sub(line_width) / 2
        } else {
            bounds.x + self.padding
        };
        let y = bounds.y + self.padding + index as u32 * self.line_height;
        (x, y)
    }
}

fn canvas_side(margin: u32, sizes: &[u32]) -> u64 {
    2 * u64::from(margin) + sizes.iter().map(|&s| u64::from(s)).sum::<u64>()
}

fn edges(margin: u32, sizes: &[u32], side: u32) -> Vec<u32> {
    let last = side.saturating_sub(1);
    std::iter::once(margin)
        .chain(sizes.iter().scan(margin, |acc, &s| {
            *acc += s;
            Some(*acc)
        }))
        .map(|edge| edge.min(last))
        .collect()
}

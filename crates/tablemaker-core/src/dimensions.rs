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

//! Logical shape of a generated table.
//!
//! [`TableDimensions::compute`] samples the grid size, resolves the style and
//! header flags, draws row/column/cell emptiness, and finally repairs the draws
//! so that the body never ends up completely blank.

use crate::config::{check_range, Configuration, Style, TableStyle};
use crate::error::{Result, TableError};
use crate::generator::decide_empty;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Grid shape, header flags and emptiness pattern for one table.
///
/// Indices are absolute grid positions: when a header row exists it is row 0
/// and body rows start at 1 (likewise for a header column). Header rows and
/// columns never appear in the empty sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDimensions {
    row_count: usize,
    column_count: usize,
    style: TableStyle,
    has_column_header: bool,
    has_row_header: bool,
    empty_rows: BTreeSet<usize>,
    empty_columns: BTreeSet<usize>,
    empty_cells: BTreeSet<(usize, usize)>,
}

impl TableDimensions {
    /// Sample the shape and emptiness pattern for a new table.
    ///
    /// Random draws happen in a fixed order (size, style, headers, rows,
    /// columns, cells) so a seeded source reproduces the same table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Configuration`] when a row or column bound is
    /// zero or inverted.
    pub fn compute<R: Rng>(config: &Configuration, rng: &mut R) -> Result<Self> {
        check_range(("min_rows", "max_rows"), config.min_rows, config.max_rows)?;
        check_range(
            ("min_columns", "max_columns"),
            config.min_columns,
            config.max_columns,
        )?;

        let row_count = rng.gen_range(config.min_rows..=config.max_rows);
        let column_count = rng.gen_range(config.min_columns..=config.max_columns);

        let style = match config.style {
            Style::Uniform => TableStyle::Uniform,
            Style::Random => TableStyle::Random,
            Style::Mixed if rng.gen::<f64>() < config.uniform_probability => TableStyle::Uniform,
            Style::Mixed => TableStyle::Random,
        };

        let (column_header_probability, row_header_probability) = config.headers.probabilities();
        let has_column_header = rng.gen::<f64>() < column_header_probability;
        let has_row_header = rng.gen::<f64>() < row_header_probability;

        let mut dims = Self {
            row_count,
            column_count,
            style,
            has_column_header,
            has_row_header,
            empty_rows: BTreeSet::new(),
            empty_columns: BTreeSet::new(),
            empty_cells: BTreeSet::new(),
        };

        if style.is_random() {
            dims.draw_emptiness(config, rng);
            dims.repair();
        }

        debug!(
            rows = dims.row_count,
            columns = dims.column_count,
            style = ?dims.style,
            header_row = dims.has_column_header,
            header_column = dims.has_row_header,
            empty_rows = dims.empty_rows.len(),
            empty_columns = dims.empty_columns.len(),
            empty_cells = dims.empty_cells.len(),
            "computed table dimensions"
        );

        Ok(dims)
    }

    /// Dense dimensions with no randomness, used for fixtures and previews.
    pub fn dense(
        row_count: usize,
        column_count: usize,
        has_column_header: bool,
        has_row_header: bool,
    ) -> Result<Self> {
        if row_count == 0 || column_count == 0 {
            return Err(TableError::EmptyGrid);
        }
        Ok(Self {
            row_count,
            column_count,
            style: TableStyle::Uniform,
            has_column_header,
            has_row_header,
            empty_rows: BTreeSet::new(),
            empty_columns: BTreeSet::new(),
            empty_cells: BTreeSet::new(),
        })
    }

    fn draw_emptiness<R: Rng>(&mut self, config: &Configuration, rng: &mut R) {
        for row in self.body_rows() {
            if decide_empty(config.empty_row_probability, rng) {
                self.empty_rows.insert(row);
            }
        }
        for column in self.body_columns() {
            if decide_empty(config.empty_column_probability, rng) {
                self.empty_columns.insert(column);
            }
        }
        for row in self.body_rows() {
            if self.empty_rows.contains(&row) {
                continue;
            }
            for column in self.body_columns() {
                if self.empty_columns.contains(&column) {
                    continue;
                }
                if decide_empty(config.empty_cell_probability, rng) {
                    self.empty_cells.insert((row, column));
                }
            }
        }
    }

    /// Reinstate the first blanked row, column, and cell where the draws would
    /// otherwise leave the body without content.
    fn repair(&mut self) {
        let body_rows = self.body_rows();
        if !body_rows.is_empty() && self.empty_rows.len() == body_rows.len() {
            if let Some(first) = self.empty_rows.pop_first() {
                warn!(row = first, "every body row was drawn empty; reinstating first");
            }
        }

        let body_columns = self.body_columns();
        if !body_columns.is_empty() && self.empty_columns.len() == body_columns.len() {
            if let Some(first) = self.empty_columns.pop_first() {
                warn!(
                    column = first,
                    "every body column was drawn empty; reinstating first"
                );
            }
        }

        let first_row = body_rows.clone().find(|r| !self.empty_rows.contains(r));
        let first_column = body_columns.clone().find(|c| !self.empty_columns.contains(c));
        if let (Some(row), Some(column)) = (first_row, first_column) {
            let has_content = body_rows
                .filter(|r| !self.empty_rows.contains(r))
                .any(|r| {
                    self.body_columns().any(|c| {
                        !self.empty_columns.contains(&c) && !self.empty_cells.contains(&(r, c))
                    })
                });
            if !has_content {
                self.empty_cells.remove(&(row, column));
                warn!(row, column, "every body cell was drawn empty; reinstating first");
            }
        }
    }

    /// Range of body (non-header) row indices.
    pub fn body_rows(&self) -> std::ops::Range<usize> {
        usize::from(self.has_column_header)..self.row_count
    }

    /// Range of body (non-header) column indices.
    pub fn body_columns(&self) -> std::ops::Range<usize> {
        usize::from(self.has_row_header)..self.column_count
    }

    /// Total rows, header row included.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Total columns, header column included.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Style resolved for this table.
    pub fn style(&self) -> TableStyle {
        self.style
    }

    /// Whether row 0 is a header row.
    pub fn has_column_header(&self) -> bool {
        self.has_column_header
    }

    /// Whether column 0 is a header column.
    pub fn has_row_header(&self) -> bool {
        self.has_row_header
    }

    /// Rows drawn fully empty.
    pub fn empty_row_indices(&self) -> &BTreeSet<usize> {
        &self.empty_rows
    }

    /// Columns drawn fully empty.
    pub fn empty_column_indices(&self) -> &BTreeSet<usize> {
        &self.empty_columns
    }

    /// Individually blanked cells, as `(row, column)`.
    pub fn empty_cell_indices(&self) -> &BTreeSet<(usize, usize)> {
        &self.empty_cells
    }

    /// Whether `(row, column)` lies in the header row or header column.
    pub fn is_header_cell(&self, row: usize, column: usize) -> bool {
        (self.has_column_header && row == 0) || (self.has_row_header && column == 0)
    }

    /// Whether the cell at `(row, column)` should carry no content.
    ///
    /// Header cells are never empty.
    pub fn is_cell_empty(&self, row: usize, column: usize) -> bool {
        if self.is_header_cell(row, column) {
            return false;
        }
        self.empty_rows.contains(&row)
            || self.empty_columns.contains(&column)
            || self.empty_cells.contains(&(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Headers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(style: Style, headers: Headers, p: f64) -> Configuration {
        Configuration::builder()
            .rows(4, 8)
            .columns(3, 6)
            .style(style)
            .headers(headers)
            .sparsity(p, p, p)
            .build_unchecked()
    }

    #[test]
    fn test_counts_within_bounds() {
        let config = config(Style::Mixed, Headers::None, 0.3);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let dims = TableDimensions::compute(&config, &mut rng).unwrap();
            assert!((4..=8).contains(&dims.row_count()));
            assert!((3..=6).contains(&dims.column_count()));
        }
    }

    #[test]
    fn test_inverted_bounds_fail() {
        let mut config = config(Style::Uniform, Headers::None, 0.0);
        config.max_rows = 2;
        let mut rng = StdRng::seed_from_u64(0);
        let err = TableDimensions::compute(&config, &mut rng).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("max_rows"));
    }

    #[test]
    fn test_uniform_is_dense() {
        let config = config(Style::Uniform, Headers::Both, 1.0);
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..50 {
            let dims = TableDimensions::compute(&config, &mut rng).unwrap();
            assert_eq!(dims.style(), TableStyle::Uniform);
            assert!(dims.empty_row_indices().is_empty());
            assert!(dims.empty_column_indices().is_empty());
            assert!(dims.empty_cell_indices().is_empty());
        }
    }

    #[test]
    fn test_full_sparsity_is_repaired() {
        let config = config(Style::Random, Headers::None, 1.0);
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            let dims = TableDimensions::compute(&config, &mut rng).unwrap();
            assert!(!dims.empty_row_indices().contains(&0));
            assert!(!dims.empty_column_indices().contains(&0));
            assert!(!dims.is_cell_empty(0, 0));
            assert_eq!(dims.empty_row_indices().len(), dims.row_count() - 1);
            assert_eq!(dims.empty_column_indices().len(), dims.column_count() - 1);
        }
    }

    #[test]
    fn test_headers_never_empty() {
        let config = config(Style::Random, Headers::Both, 1.0);
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..50 {
            let dims = TableDimensions::compute(&config, &mut rng).unwrap();
            assert!(dims.has_column_header());
            assert!(dims.has_row_header());
            assert!(!dims.empty_row_indices().contains(&0));
            assert!(!dims.empty_column_indices().contains(&0));
            for column in 0..dims.column_count() {
                assert!(!dims.is_cell_empty(0, column));
            }
            for row in 0..dims.row_count() {
                assert!(!dims.is_cell_empty(row, 0));
            }
        }
    }

    #[test]
    fn test_mixed_resolves_both_styles() {
        let config = config(Style::Mixed, Headers::None, 0.2);
        let mut rng = StdRng::seed_from_u64(15);
        let styles: BTreeSet<_> = (0..100)
            .map(|_| {
                TableDimensions::compute(&config, &mut rng)
                    .unwrap()
                    .style()
                    .is_random()
            })
            .collect();
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn test_same_seed_same_dimensions() {
        let config = config(Style::Random, Headers::Random { column: 0.5, row: 0.5 }, 0.4);
        let a = TableDimensions::compute(&config, &mut StdRng::seed_from_u64(16)).unwrap();
        let b = TableDimensions::compute(&config, &mut StdRng::seed_from_u64(16)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_cell_header_table() {
        let config = Configuration::builder()
            .rows(1, 1)
            .columns(1, 1)
            .style(Style::Random)
            .headers(Headers::Column)
            .sparsity(1.0, 1.0, 1.0)
            .build_unchecked();
        let dims = TableDimensions::compute(&config, &mut StdRng::seed_from_u64(17)).unwrap();
        assert_eq!(dims.body_rows(), 1..1);
        assert!(dims.empty_column_indices().is_empty());
        assert!(!dims.is_cell_empty(0, 0));
    }

    #[test]
    fn test_dense_rejects_empty_grid() {
        assert_eq!(
            TableDimensions::dense(0, 3, false, false).unwrap_err(),
            TableError::EmptyGrid
        );
    }
}

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

//! Canonical in-memory table.

use crate::dimensions::TableDimensions;
use crate::error::{Result, TableError};
use crate::generator::{RandomDataGenerator, CORNER_HEADER};
use rand::Rng;

/// One cell: `None` marks an empty cell.
pub type Cell = Option<String>;

/// A generated table: a rectangular grid of cells plus header flags.
///
/// When `header_row` is set, row 0 holds column labels; when `header_column`
/// is set, column 0 holds row labels. Header cells always have content.
/// A `TableData` is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "TableRecord", into = "TableRecord")
)]
pub struct TableData {
    rows: Vec<Vec<Cell>>,
    header_row: bool,
    header_column: bool,
}

/// Plain field-for-field view of a [`TableData`], used for serialization.
///
/// Converting back with [`TryFrom`] re-checks every grid invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRecord {
    /// Row-major cells.
    pub rows: Vec<Vec<Cell>>,
    /// Whether row 0 is a header row.
    pub header_row: bool,
    /// Whether column 0 is a header column.
    pub header_column: bool,
}

impl TableData {
    /// Fill a grid shaped by `dimensions` with generated content.
    ///
    /// Cells are visited in row-major order. Header cells always receive a
    /// label; other cells are `None` when their row, column, or the cell
    /// itself was drawn empty.
    pub fn build<R: Rng>(
        dimensions: &TableDimensions,
        generator: &RandomDataGenerator,
        rng: &mut R,
    ) -> Self {
        let header_row = dimensions.has_column_header();
        let header_column = dimensions.has_row_header();
        let first_body_row = usize::from(header_row);

        let rows = (0..dimensions.row_count())
            .map(|r| {
                (0..dimensions.column_count())
                    .map(|c| {
                        if header_row && r == 0 && header_column && c == 0 {
                            Some(CORNER_HEADER.to_string())
                        } else if header_row && r == 0 {
                            Some(generator.column_header(rng))
                        } else if header_column && c == 0 {
                            Some(generator.row_header(r - first_body_row, rng))
                        } else if dimensions.is_cell_empty(r, c) {
                            None
                        } else {
                            Some(generator.generate_cell_content(rng))
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            header_row,
            header_column,
        }
    }

    /// Assemble a table from existing rows, checking every invariant.
    ///
    /// # Errors
    ///
    /// - [`TableError::EmptyGrid`] when there are no rows or no columns
    /// - [`TableError::Shape`] when a row's length differs from the first row
    /// - [`TableError::BlankHeader`] when a header cell is `None` or blank
    pub fn from_rows(rows: Vec<Vec<Cell>>, header_row: bool, header_column: bool) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(TableError::EmptyGrid);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(TableError::Shape {
                row,
                expected: width,
                actual: cells.len(),
            });
        }

        let table = Self {
            rows,
            header_row,
            header_column,
        };
        for (row, cells) in table.rows.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let blank = cell.as_deref().map_or(true, |s| s.trim().is_empty());
                if table.is_header_cell(row, column) && blank {
                    return Err(TableError::BlankHeader { row, column });
                }
            }
        }
        Ok(table)
    }

    /// Borrow the grid.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Copy the grid as nested lists, for serialization.
    pub fn to_nested_list(&self) -> Vec<Vec<Cell>> {
        self.rows.clone()
    }

    /// Number of rows, header row included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, header column included.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Whether row 0 is a header row.
    pub fn header_row(&self) -> bool {
        self.header_row
    }

    /// Whether column 0 is a header column.
    pub fn header_column(&self) -> bool {
        self.header_column
    }

    /// Content of a cell, or `None` when empty or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    /// Whether `(row, column)` lies in the header row or header column.
    pub fn is_header_cell(&self, row: usize, column: usize) -> bool {
        (self.header_row && row == 0) || (self.header_column && column == 0)
    }

    /// Whether every cell of `row` is empty.
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .map_or(true, |cells| cells.iter().all(Option::is_none))
    }

    /// Whether every cell of `column` is empty.
    pub fn is_column_empty(&self, column: usize) -> bool {
        self.rows
            .iter()
            .all(|cells| cells.get(column).map_or(true, Option::is_none))
    }

    /// Number of `None` cells.
    pub fn empty_cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_none()).count()
    }
}

impl From<TableData> for TableRecord {
    fn from(table: TableData) -> Self {
        Self {
            rows: table.rows,
            header_row: table.header_row,
            header_column: table.header_column,
        }
    }
}

impl TryFrom<TableRecord> for TableData {
    type Error = TableError;

    fn try_from(record: TableRecord) -> Result<Self> {
        Self::from_rows(record.rows, record.header_row, record.header_column)
    }
}

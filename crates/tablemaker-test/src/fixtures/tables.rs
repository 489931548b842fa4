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

//! Hand-built tables.

use tablemaker_core::{Cell, TableData, CORNER_HEADER};

fn grid(rows: &[&[Option<&str>]]) -> Vec<Vec<Cell>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.map(str::to_string)).collect())
        .collect()
}

fn table(rows: &[&[Option<&str>]], header_row: bool, header_column: bool) -> TableData {
    TableData::from_rows(grid(rows), header_row, header_column)
        .unwrap_or_else(|e| panic!("invalid fixture: {e}"))
}

/// One body cell, no headers.
pub fn single_cell() -> TableData {
    table(&[&[Some("42")]], false, false)
}

/// Two rows by two columns, fully populated, no headers.
pub fn dense_2x2() -> TableData {
    table(&[&[Some("1"), Some("2.50")], &[Some("ab"), Some("lorem ipsum")]], false, false)
}

/// A header row over three body rows.
pub fn column_headers() -> TableData {
    table(
        &[
            &[Some("Name"), Some("Price"), Some("Stock")],
            &[Some("Widget"), Some("9.99"), Some("120")],
            &[Some("Gadget"), None, Some("7")],
            &[Some("Doohickey"), Some("0.50"), None],
        ],
        true,
        false,
    )
}

/// Header row and header column sharing the corner cell.
pub fn both_headers() -> TableData {
    table(
        &[
            &[Some(CORNER_HEADER), Some("Revenue"), Some("Euro")],
            &[Some("1"), Some("310"), Some("12.75")],
            &[Some("Smith"), Some("x"), Some("dolor sit")],
        ],
        true,
        true,
    )
}

/// Mostly empty body with a single populated cell.
pub fn sparse() -> TableData {
    table(
        &[
            &[None, None, None],
            &[None, Some("amet"), None],
            &[None, None, None],
        ],
        false,
        false,
    )
}

/// Cells long enough to need wrapping, including one unbreakable token.
pub fn long_text() -> TableData {
    table(
        &[
            &[
                Some("lorem ipsum dolor sit amet consectetur adipiscing elit sed do"),
                Some("123456789012345678901234567890"),
            ],
            &[Some("short"), Some("a b c d e f g h i j k l m n o p q r s t u v w")],
        ],
        false,
        false,
    )
}

/// Cells containing double-width and combining characters.
pub fn wide_glyphs() -> TableData {
    table(
        &[&[Some("表格"), Some("cafe\u{301}")], &[Some("日本語のテキスト"), Some("ok")]],
        false,
        false,
    )
}

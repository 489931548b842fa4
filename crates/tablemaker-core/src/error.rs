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

//! Error types for table generation.

use thiserror::Error;

/// Errors raised while configuring, generating or reconstructing a table.
///
/// Generation itself cannot fail once a [`Configuration`](crate::Configuration)
/// has been validated; the structural variants are produced when a grid is
/// rebuilt from external data (for example a JSON dump).
///
/// # Examples
///
/// ```
/// use tablemaker_core::TableError;
///
/// let err = TableError::configuration("max_rows", "must be >= min_rows (3), got 2");
/// assert_eq!(
///     err.to_string(),
///     "ConfigurationError: max_rows must be >= min_rows (3), got 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A configuration value is out of range or inconsistent.
    #[error("ConfigurationError: {field} {message}")]
    Configuration {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// A row does not have the same length as the first row.
    #[error("ShapeError: row {row} has {actual} cells, expected {expected}")]
    Shape {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },

    /// The grid has no rows or no columns.
    #[error("ShapeError: a table needs at least one row and one column")]
    EmptyGrid,

    /// A header cell has no content.
    #[error("HeaderError: header cell ({row}, {column}) is empty")]
    BlankHeader {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
    },
}

impl TableError {
    /// Create a configuration error for `field`.
    pub fn configuration(field: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            message: message.into(),
        }
    }

    /// Whether this error came from configuration validation.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Result type for table generation.
pub type Result<T> = std::result::Result<T, TableError>;

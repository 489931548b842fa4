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

//! Error types for JSON conversion.

use tablemaker_core::TableError;
use thiserror::Error;

/// Errors that can occur while reading a table back from JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not valid JSON or does not have the table shape.
    #[error("JSON syntax error: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The JSON is well formed but describes an invalid grid.
    #[error("invalid table: {0}")]
    Table(#[from] TableError),
}

/// Result type for JSON conversion.
pub type Result<T> = std::result::Result<T, JsonError>;

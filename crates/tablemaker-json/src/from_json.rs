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

//! JSON to table conversion

use crate::error::Result;
use serde_json::Value as JsonValue;
use tablemaker_core::{TableData, TableRecord};

/// Parse a table from a JSON string.
///
/// # Errors
///
/// - [`JsonError::Syntax`](crate::JsonError::Syntax) when the text is not
///   JSON or lacks the `rows`/`header_row`/`header_column` fields
/// - [`JsonError::Table`](crate::JsonError::Table) when the grid is empty,
///   ragged, or has an empty header cell
pub fn from_json(json: &str) -> Result<TableData> {
    let record: TableRecord = serde_json::from_str(json)?;
    Ok(TableData::try_from(record)?)
}

/// Parse a table from a `serde_json::Value`.
pub fn from_json_value(value: JsonValue) -> Result<TableData> {
    let record: TableRecord = serde_json::from_value(value)?;
    Ok(TableData::try_from(record)?)
}

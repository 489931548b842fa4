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

//! Table to JSON conversion

use crate::error::Result;
use serde_json::Value as JsonValue;
use tablemaker_core::{TableData, TableRecord};

/// Convert a table to a pretty-printed JSON string.
///
/// The object carries exactly three fields: `rows` (nested array of
/// string-or-null), `header_row` and `header_column`.
pub fn to_json(table: &TableData) -> Result<String> {
    let value = to_json_value(table)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Convert a table to a `serde_json::Value`.
pub fn to_json_value(table: &TableData) -> Result<JsonValue> {
    Ok(serde_json::to_value(TableRecord::from(table.clone()))?)
}

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

//! Malformed serialized tables.

/// Invalid JSON documents for deserializer error testing.
///
/// Each tuple contains (name, json_text).
pub fn invalid_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("not_an_object", "[1, 2, 3]"),
        ("unclosed", r#"{"rows": [["a"]"#),
        ("missing_rows", r#"{"header_row": false, "header_column": false}"#),
        (
            "numeric_cell",
            r#"{"rows": [[1]], "header_row": false, "header_column": false}"#,
        ),
    ]
}

/// Well-formed JSON that violates a table invariant.
///
/// Each tuple contains (name, json_text).
pub fn invalid_table_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "no_rows",
            r#"{"rows": [], "header_row": false, "header_column": false}"#,
        ),
        (
            "ragged",
            r#"{"rows": [["a", "b"], ["c"]], "header_row": false, "header_column": false}"#,
        ),
        (
            "null_header",
            r#"{"rows": [["a", null], ["c", "d"]], "header_row": true, "header_column": false}"#,
        ),
    ]
}

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

//! Canonical table fixtures.
//!
//! - **tables**: hand-built [`TableData`] values with known content
//! - **configs**: generation settings for common scenarios
//! - **errors**: malformed serialized tables

pub mod configs;
pub mod errors;
mod tables;

pub use tables::*;

use crate::FixtureList;

/// Returns all table fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("single_cell", single_cell),
        ("dense_2x2", dense_2x2),
        ("column_headers", column_headers),
        ("both_headers", both_headers),
        ("sparse", sparse),
        ("long_text", long_text),
        ("wide_glyphs", wide_glyphs),
    ]
}

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

//! Generation settings for common scenarios.
//!
//! Every configuration here passes validation and carries a fixed seed.

use tablemaker_core::{Configuration, Headers, Style};

/// Small uniform tables without headers.
pub fn dense() -> Configuration {
    Configuration::builder()
        .rows(2, 6)
        .columns(2, 6)
        .style(Style::Uniform)
        .seed(11)
        .build_unchecked()
}

/// Random-style tables where every row, column and cell is drawn empty.
pub fn sparse() -> Configuration {
    Configuration::builder()
        .rows(3, 8)
        .columns(3, 8)
        .style(Style::Random)
        .sparsity(1.0, 1.0, 1.0)
        .seed(12)
        .build_unchecked()
}

/// Random-style tables that always carry both header kinds.
pub fn both_headers() -> Configuration {
    Configuration::builder()
        .rows(3, 6)
        .columns(3, 6)
        .style(Style::Random)
        .headers(Headers::Both)
        .seed(13)
        .build_unchecked()
}

/// Exactly 2x2 uniform tables.
pub fn fixed_2x2() -> Configuration {
    Configuration::builder()
        .rows(2, 2)
        .columns(2, 2)
        .style(Style::Uniform)
        .seed(14)
        .build_unchecked()
}

/// Configurations that must fail validation, with the offending field.
pub fn invalid() -> Vec<(&'static str, Configuration)> {
    vec![
        ("count", Configuration::builder().count(0).build_unchecked()),
        ("min_rows", Configuration::builder().rows(0, 3).build_unchecked()),
        ("max_rows", Configuration::builder().rows(5, 3).build_unchecked()),
        (
            "max_columns",
            Configuration::builder().columns(4, 2).build_unchecked(),
        ),
        (
            "empty_cell_probability",
            Configuration::builder()
                .sparsity(0.1, 0.1, 1.5)
                .build_unchecked(),
        ),
        (
            "uniform_probability",
            Configuration::builder()
                .uniform_probability(-0.1)
                .build_unchecked(),
        ),
        (
            "max_columns",
            Configuration::builder()
                .columns(1, 10_000)
                .build_unchecked(),
        ),
    ]
}

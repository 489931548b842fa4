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

//! Table Maker CLI library for argument parsing and execution.
//!
//! The `table-maker` binary generates synthetic table images with matching
//! JSON ground truth:
//!
//! ```bash
//! # Ten tables with both header kinds, reproducibly
//! table-maker --count 10 --headers both --seed 42 --output out
//!
//! # Dense tables without wrapping
//! table-maker --style uniform --wrap-mode none
//! ```
//!
//! Logs go to stderr and are controlled by `RUST_LOG` or `--verbose`; stdout
//! carries only the summary of written files.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

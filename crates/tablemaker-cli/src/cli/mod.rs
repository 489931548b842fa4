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

//! Command-line argument definitions.
//!
//! - [`args`]: the `table-maker` flags and their mapping onto a [`Configuration`]
//! - [`choices`]: keyword values accepted by `--style`, `--headers` and `--wrap-mode`
//!
//! [`Configuration`]: tablemaker::Configuration

mod args;
mod choices;

pub use args::{seed_from_env, GenerateArgs, ALLOWED_EMPTY_LINE_PROBABILITY, SEED_ENV};
pub use choices::{HeadersChoice, StyleChoice, WrapChoice};

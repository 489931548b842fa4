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

//! Shared test fixtures and utilities for Table Maker crates.
//!
//! This crate provides hand-built tables, ready-made configurations,
//! malformed JSON samples and a seeded random source so that the core, JSON,
//! render and CLI crates all test against the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use tablemaker_test::{fixtures, seeded_rng};
//!
//! let table = fixtures::both_headers();
//! assert!(table.header_row() && table.header_column());
//!
//! let config = fixtures::configs::sparse();
//! let mut rng = seeded_rng();
//! # let _ = (config, &mut rng);
//! ```

pub mod fixtures;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tablemaker_core::TableData;

/// Seed used by [`seeded_rng`].
pub const DEFAULT_SEED: u64 = 0x7AB1E;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> TableData)>;

/// A deterministic random source seeded with [`DEFAULT_SEED`].
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(DEFAULT_SEED)
}

/// A deterministic random source with an explicit seed.
pub fn rng_with_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Count the non-empty cells of a table.
pub fn count_filled(table: &TableData) -> usize {
    table.rows().iter().flatten().filter(|c| c.is_some()).count()
}

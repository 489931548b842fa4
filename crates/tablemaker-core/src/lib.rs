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

//! Table Maker core: configuration, random content and the table model.
//!
//! Generating one table is a two step pipeline:
//!
//! 1. [`TableDimensions::compute`] samples the grid size, style, header flags
//!    and emptiness pattern from a [`Configuration`].
//! 2. [`TableData::build`] fills that shape with content produced by a
//!    [`RandomDataGenerator`].
//!
//! Both steps draw from a caller-supplied [`rand::Rng`], so seeding the source
//! makes the whole pipeline reproducible.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tablemaker_core::{Configuration, RandomDataGenerator, TableData, TableDimensions};
//!
//! let config = Configuration::builder().rows(2, 4).columns(2, 3).build().unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let dims = TableDimensions::compute(&config, &mut rng).unwrap();
//! let table = TableData::build(&dims, &RandomDataGenerator::from_config(&config), &mut rng);
//! assert!((2..=4).contains(&table.row_count()));
//! ```

mod config;
mod dimensions;
mod error;
mod generator;
mod table;

pub use config::{
    Configuration, ConfigurationBuilder, Headers, RenderOptions, Style, TableStyle, WrapMode,
};
pub use dimensions::TableDimensions;
pub use error::{Result, TableError};
pub use generator::{decide_empty, RandomDataGenerator, CORNER_HEADER};
pub use table::{Cell, TableData, TableRecord};

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

//! # Table Maker
//!
//! Generates synthetic table images together with the exact table they
//! depict, for training and testing table recognition systems.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tablemaker::{generate_tables, Configuration, Headers};
//!
//! let config = Configuration::builder()
//!     .count(10)
//!     .rows(3, 12)
//!     .columns(2, 8)
//!     .headers(Headers::Both)
//!     .output_dir("out")
//!     .seed(42)
//!     .build()
//!     .expect("valid configuration");
//!
//! for output in generate_tables(&config).expect("generation failed") {
//!     println!("{}", output.image_path.display());
//! }
//! ```
//!
//! Each run writes `images/` and `json/` under the output directory. Every
//! JSON file holds `rows` (string-or-null cells) plus `header_row` and
//! `header_column` flags.
//!
//! ## Modules
//!
//! - [`json`]: JSON conversion
//! - [`render`]: layout and rasterization

mod error;
mod generate;
mod output;

pub use error::{Error, Result};
pub use generate::{
    generate_table, generate_tables, generate_tables_with_rng, run_rng, GeneratedTable,
    TableOutput,
};
pub use output::{write_json, write_png, OutputLayout, IMAGES_DIR, JSON_DIR};

// Re-export core types
pub use tablemaker_core::{
    decide_empty, Cell, Configuration, ConfigurationBuilder, Headers, RandomDataGenerator,
    RenderOptions, Style, TableData, TableDimensions, TableError, TableStyle, WrapMode,
    CORNER_HEADER,
};

// Re-export JSON conversion
pub mod json {
    //! JSON conversion utilities
    pub use tablemaker_json::{from_json, from_json_value, to_json, to_json_value, JsonError};
}

// Re-export rendering
pub mod render {
    //! Layout and rasterization utilities
    pub use tablemaker_render::{
        wrap_text, BitmapFont, BorderPlan, BorderStyle, GridLayout, RenderError, RgbImage,
        TableVisualizer, TextMetrics,
    };
}

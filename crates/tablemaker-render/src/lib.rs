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

//! Table Maker rendering
//!
//! Turns a [`TableData`](tablemaker_core::TableData) into an RGB raster:
//!
//! - [`wrap_text`] breaks cell text into lines under a pixel budget
//! - [`GridLayout`] sizes columns and rows from the wrapped text
//! - [`BorderPlan`] picks a style for every grid line
//! - [`TableVisualizer`] draws shading, lines and glyphs
//!
//! Text is measured and drawn with a built-in 8x8 bitmap font, so output is
//! identical on every machine.

mod borders;
mod draw;
mod error;
mod layout;
mod metrics;
mod visualizer;
mod wrap;

pub use borders::{BorderPlan, BorderStyle};
pub use draw::{BACKGROUND, HEADER_FILL, INK};
pub use error::{RenderError, Result};
pub use layout::{CellBounds, CellText, GridLayout};
pub use metrics::{BitmapFont, TextMetrics, GLYPH_SIZE, LINE_GAP};
pub use visualizer::{TableVisualizer, DEFAULT_MARGIN};
pub use wrap::{measure_lines, wrap_text};

pub use image::RgbImage;

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

//! Generation parameters and their validation.
//!
//! A [`Configuration`] is assembled once (usually by the CLI), validated with
//! [`Configuration::validate`], and then only read. Defaults mirror the
//! command-line defaults.

use crate::error::{Result, TableError};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Visual and structural style requested for generated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Dense tables with solid borders.
    Uniform,
    /// Sparse content and mixed border rendering.
    Random,
    /// Each table independently picks uniform or random.
    #[default]
    Mixed,
}

/// Style after a [`Style::Mixed`] choice has been resolved for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableStyle {
    /// Dense, solid borders.
    Uniform,
    /// Sparse, mixed borders.
    Random,
}

impl TableStyle {
    /// Whether emptiness draws and border perturbation apply.
    pub fn is_random(self) -> bool {
        matches!(self, Self::Random)
    }
}

/// Header placement.
///
/// A *column header* is the top row labelling every column; a *row header*
/// is the first column labelling every row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Headers {
    /// No header row or column.
    #[default]
    None,
    /// Row 0 is a header row.
    Column,
    /// Column 0 is a header column.
    Row,
    /// Both a header row and a header column.
    Both,
    /// Each axis gets a header independently with the given probability.
    Random {
        /// Probability of a header row.
        column: f64,
        /// Probability of a header column.
        row: f64,
    },
}

impl Headers {
    /// Probabilities of (header row, header column).
    pub fn probabilities(&self) -> (f64, f64) {
        match *self {
            Self::None => (0.0, 0.0),
            Self::Column => (1.0, 0.0),
            Self::Row => (0.0, 1.0),
            Self::Both => (1.0, 1.0),
            Self::Random { column, row } => (column, row),
        }
    }
}

/// Policy for breaking cell text into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    /// Break between words; a word longer than the budget keeps its own line.
    #[default]
    Word,
    /// Single line, may overflow the nominal column width.
    None,
    /// Break at any character boundary.
    Char,
}

macro_rules! keyword_enum {
    ($ty:ty, $what:literal, { $($name:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = TableError;

            fn from_str(s: &str) -> Result<Self> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    other => Err(TableError::configuration(
                        $what,
                        format!("has unknown value '{}'", other),
                    )),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                $(if *self == $variant {
                    return f.write_str($name);
                })+
                f.write_str("custom")
            }
        }
    };
}

keyword_enum!(Style, "style", {
    "uniform" => Style::Uniform,
    "random" => Style::Random,
    "mixed" => Style::Mixed,
});

keyword_enum!(WrapMode, "wrap_mode", {
    "word" => WrapMode::Word,
    "none" => WrapMode::None,
    "char" => WrapMode::Char,
});

keyword_enum!(Headers, "headers", {
    "none" => Headers::None,
    "column" => Headers::Column,
    "row" => Headers::Row,
    "both" => Headers::Both,
});

/// Pixel-level layout parameters for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Inner padding between a cell border and its text (default: 5).
    pub padding: u32,
    /// Integer scale applied to the 8x8 bitmap font (default: 1).
    pub font_scale: u32,
    /// Width budget for wrapped text, excluding padding (default: 160).
    pub cell_width_budget: u32,
    /// Minimum column width (default: 40).
    pub min_cell_width: u32,
    /// Minimum row height (default: 30).
    pub min_cell_height: u32,
    /// Largest canvas side accepted before rendering fails (default: 16384).
    pub max_canvas_side: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: 5,
            font_scale: 1,
            cell_width_budget: 160,
            min_cell_width: 40,
            min_cell_height: 30,
            max_canvas_side: 16_384,
        }
    }
}

impl RenderOptions {
    /// Check that every option is usable.
    pub fn validate(&self) -> Result<()> {
        if self.font_scale == 0 {
            return Err(TableError::configuration("font_scale", "must be at least 1"));
        }
        if self.cell_width_budget == 0 {
            return Err(TableError::configuration(
                "cell_width_budget",
                "must be at least 1",
            ));
        }
        if self.max_canvas_side == 0 {
            return Err(TableError::configuration(
                "max_canvas_side",
                "must be at least 1",
            ));
        }
        if self.min_cell_width == 0 {
            return Err(TableError::configuration("min_cell_width", "must be at least 1"));
        }
        if self.min_cell_height == 0 {
            return Err(TableError::configuration("min_cell_height", "must be at least 1"));
        }
        Ok(())
    }

    /// How many cells of at least `cell_size` pixels fit on one canvas side
    /// after subtracting `margin` on both ends.
    pub fn line_capacity(&self, margin: u32, cell_size: u32) -> usize {
        let inner = u64::from(self.max_canvas_side).saturating_sub(2 * u64::from(margin));
        let capacity = inner / u64::from(cell_size.max(1));
        usize::try_from(capacity).unwrap_or(usize::MAX)
    }
}

/// Validated set of generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Number of tables to generate (>= 1).
    pub count: usize,
    /// Smallest row count, header row included.
    pub min_rows: usize,
    /// Largest row count, header row included.
    pub max_rows: usize,
    /// Smallest column count, header column included.
    pub min_columns: usize,
    /// Largest column count, header column included.
    pub max_columns: usize,
    /// Requested style.
    pub style: Style,
    /// Chance that a [`Style::Mixed`] table comes out uniform.
    pub uniform_probability: f64,
    /// Header placement.
    pub headers: Headers,
    /// Chance that a body row is blank (random style only).
    pub empty_row_probability: f64,
    /// Chance that a body column is blank (random style only).
    pub empty_column_probability: f64,
    /// Chance that a single body cell is blank (random style only).
    pub empty_cell_probability: f64,
    /// Chance that a numeric cell is a 15 to 30 digit integer.
    pub large_number_probability: f64,
    /// Outer margin around the grid, in pixels.
    pub margin: u32,
    /// Text wrapping policy.
    pub wrap_mode: WrapMode,
    /// Directory receiving `images/` and `json/`.
    pub output_dir: PathBuf,
    /// Seed for the run's random source; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Layout parameters.
    pub render: RenderOptions,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            count: 1,
            min_rows: 1,
            max_rows: 15,
            min_columns: 1,
            max_columns: 40,
            style: Style::Mixed,
            uniform_probability: 0.5,
            headers: Headers::None,
            empty_row_probability: 0.0,
            empty_column_probability: 0.0,
            empty_cell_probability: 0.2,
            large_number_probability: 0.05,
            margin: 10,
            wrap_mode: WrapMode::Word,
            output_dir: PathBuf::from("."),
            seed: None,
            render: RenderOptions::default(),
        }
    }
}

impl Configuration {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Check bounds, probabilities, render options, and that the smallest
    /// possible grid of every allowed size fits on the canvas.
    ///
    /// Returns the first problem found as a [`TableError::Configuration`].
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(TableError::configuration("count", "must be at least 1, got 0"));
        }
        check_range(("min_rows", "max_rows"), self.min_rows, self.max_rows)?;
        check_range(
            ("min_columns", "max_columns"),
            self.min_columns,
            self.max_columns,
        )?;

        let (column_headers, row_headers) = self.headers.probabilities();
        check_probability("uniform_probability", self.uniform_probability)?;
        check_probability("column_header_probability", column_headers)?;
        check_probability("row_header_probability", row_headers)?;
        check_probability("empty_row_probability", self.empty_row_probability)?;
        check_probability("empty_column_probability", self.empty_column_probability)?;
        check_probability("empty_cell_probability", self.empty_cell_probability)?;
        check_probability("large_number_probability", self.large_number_probability)?;

        self.render.validate()?;
        let rows = self.render.line_capacity(self.margin, self.render.min_cell_height);
        check_capacity(("min_rows", "max_rows"), self.min_rows, self.max_rows, rows)?;
        let columns = self.render.line_capacity(self.margin, self.render.min_cell_width);
        check_capacity(
            ("min_columns", "max_columns"),
            self.min_columns,
            self.max_columns,
            columns,
        )
    }
}

fn check_capacity(
    (min_field, max_field): (&'static str, &'static str),
    min: usize,
    max: usize,
    capacity: usize,
) -> Result<()> {
    if min > capacity {
        return Err(TableError::configuration(
            min_field,
            format!("must be at most {} to fit the canvas, got {}", capacity, min),
        ));
    }
    if max > capacity {
        return Err(TableError::configuration(
            max_field,
            format!("must be at most {} to fit the canvas, got {}", capacity, max),
        ));
    }
    Ok(())
}

pub(crate) fn check_range(
    (min_field, max_field): (&'static str, &'static str),
    min: usize,
    max: usize,
) -> Result<()> {
    if min == 0 {
        return Err(TableError::configuration(min_field, "must be at least 1, got 0"));
    }
    if max < min {
        return Err(TableError::configuration(
            max_field,
            format!("must be >= {} ({}), got {}", min_field, min, max),
        ));
    }
    Ok(())
}

fn check_probability(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(TableError::configuration(
            field,
            format!("must be within [0, 1], got {}", value),
        ));
    }
    Ok(())
}

/// Fluent builder for [`Configuration`].
///
/// ```
/// use tablemaker_core::{Configuration, Headers, Style};
///
/// let config = Configuration::builder()
///     .rows(2, 2)
///     .columns(3, 5)
///     .style(Style::Uniform)
///     .headers(Headers::Both)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_columns, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    /// Sets the number of tables.
    pub fn count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    /// Sets the inclusive row bounds.
    pub fn rows(mut self, min: usize, max: usize) -> Self {
        self.config.min_rows = min;
        self.config.max_rows = max;
        self
    }

    /// Sets the inclusive column bounds.
    pub fn columns(mut self, min: usize, max: usize) -> Self {
        self.config.min_columns = min;
        self.config.max_columns = max;
        self
    }

    /// Sets the style.
    pub fn style(mut self, style: Style) -> Self {
        self.config.style = style;
        self
    }

    /// Sets the uniform share used by [`Style::Mixed`].
    pub fn uniform_probability(mut self, probability: f64) -> Self {
        self.config.uniform_probability = probability;
        self
    }

    /// Sets header placement.
    pub fn headers(mut self, headers: Headers) -> Self {
        self.config.headers = headers;
        self
    }

    /// Sets the row, column and cell emptiness probabilities.
    pub fn sparsity(mut self, row: f64, column: f64, cell: f64) -> Self {
        self.config.empty_row_probability = row;
        self.config.empty_column_probability = column;
        self.config.empty_cell_probability = cell;
        self
    }

    /// Sets the large number probability.
    pub fn large_number_probability(mut self, probability: f64) -> Self {
        self.config.large_number_probability = probability;
        self
    }

    /// Sets the margin in pixels.
    pub fn margin(mut self, margin: u32) -> Self {
        self.config.margin = margin;
        self
    }

    /// Sets the wrap mode.
    pub fn wrap_mode(mut self, mode: WrapMode) -> Self {
        self.config.wrap_mode = mode;
        self
    }

    /// Sets the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Seeds the random source.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Replaces the render options.
    pub fn render(mut self, render: RenderOptions) -> Self {
        self.config.render = render;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<Configuration> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Returns the configuration without validating it.
    pub fn build_unchecked(self) -> Configuration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Configuration::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.count, 1);
        assert_eq!(config.max_rows, 15);
        assert_eq!(config.max_columns, 40);
        assert_eq!(config.style, Style::Mixed);
        assert_eq!(config.wrap_mode, WrapMode::Word);
        assert_eq!(config.margin, 10);
        assert_eq!(config.empty_row_probability, 0.0);
        assert_eq!(config.empty_column_probability, 0.0);
    }

    #[test]
    fn test_rejects_zero_count() {
        let err = Configuration::builder().count(0).build().unwrap_err();
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn test_rejects_inverted_rows() {
        let err = Configuration::builder().rows(5, 3).build().unwrap_err();
        assert_eq!(
            err,
            TableError::configuration("max_rows", "must be >= min_rows (5), got 3")
        );
    }

    #[test]
    fn test_rejects_inverted_columns() {
        let err = Configuration::builder().columns(4, 1).build().unwrap_err();
        assert!(err.to_string().contains("max_columns"));
    }

    #[test]
    fn test_rejects_zero_minimum() {
        let err = Configuration::builder().rows(0, 3).build().unwrap_err();
        assert!(err.to_string().contains("min_rows"));
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let err = Configuration::builder()
            .sparsity(0.1, 1.5, 0.2)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("empty_column_probability"));

        let err = Configuration::builder()
            .sparsity(f64::NAN, 0.1, 0.2)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("empty_row_probability"));
    }

    #[test]
    fn test_rejects_bad_header_probability() {
        let err = Configuration::builder()
            .headers(Headers::Random {
                column: -0.1,
                row: 0.5,
            })
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("column_header_probability"));
    }

    #[test]
    fn test_rejects_zero_font_scale() {
        let render = RenderOptions {
            font_scale: 0,
            ..RenderOptions::default()
        };
        let err = Configuration::builder().render(render).build().unwrap_err();
        assert!(err.to_string().contains("font_scale"));
    }

    #[test]
    fn test_rejects_rows_beyond_canvas() {
        // 16384px side, 10px margins, 30px rows: 545 rows fit.
        let err = Configuration::builder()
            .rows(600, 600)
            .columns(1, 1)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::configuration("min_rows", "must be at most 545 to fit the canvas, got 600")
        );

        let err = Configuration::builder().rows(1, 546).build().unwrap_err();
        assert!(err.to_string().contains("max_rows"));
        assert!(Configuration::builder().rows(1, 545).build().is_ok());
    }

    #[test]
    fn test_rejects_unbounded_columns() {
        let err = Configuration::builder()
            .columns(1, usize::MAX)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("max_columns"));
    }

    #[test]
    fn test_margin_counts_against_canvas() {
        let render = RenderOptions {
            max_canvas_side: 100,
            ..RenderOptions::default()
        };
        assert_eq!(render.line_capacity(0, 40), 2);
        assert_eq!(render.line_capacity(10, 40), 2);
        assert_eq!(render.line_capacity(20, 40), 1);
        assert_eq!(render.line_capacity(60, 40), 0);

        let err = Configuration::builder()
            .render(render)
            .margin(60)
            .rows(1, 1)
            .columns(1, 1)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("min_rows"));
    }

    #[test]
    fn test_header_probabilities() {
        assert_eq!(Headers::None.probabilities(), (0.0, 0.0));
        assert_eq!(Headers::Column.probabilities(), (1.0, 0.0));
        assert_eq!(Headers::Row.probabilities(), (0.0, 1.0));
        assert_eq!(Headers::Both.probabilities(), (1.0, 1.0));
        assert_eq!(
            Headers::Random {
                column: 0.25,
                row: 0.75
            }
            .probabilities(),
            (0.25, 0.75)
        );
    }

    #[test]
    fn test_keywords_round_trip() {
        for style in [Style::Uniform, Style::Random, Style::Mixed] {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
        for mode in [WrapMode::Word, WrapMode::None, WrapMode::Char] {
            assert_eq!(mode.to_string().parse::<WrapMode>().unwrap(), mode);
        }
        assert_eq!("BOTH".parse::<Headers>().unwrap(), Headers::Both);
    }

    #[test]
    fn test_unknown_keyword() {
        let err = "diagonal".parse::<Headers>().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("diagonal"));
    }
}

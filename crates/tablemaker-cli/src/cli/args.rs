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

//! `table-maker` flags.

use super::choices::{HeadersChoice, StyleChoice, WrapChoice};
use clap::Args;
use std::path::PathBuf;
use tablemaker::{Configuration, Headers, RenderOptions};

/// Environment variable supplying a seed when `--seed` is absent.
pub const SEED_ENV: &str = "TABLE_MAKER_SEED";

/// Row/column emptiness probability enabled by `--allow-empty-rows`/`--allow-empty-columns`.
pub const ALLOWED_EMPTY_LINE_PROBABILITY: f64 = 0.3;

/// Read a seed from [`SEED_ENV`]; unset or unparsable values give `None`.
pub fn seed_from_env() -> Option<u64> {
    std::env::var(SEED_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
}

/// Generation options.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of tables to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Minimum number of rows per table
    #[arg(short = 'r', long, default_value_t = 1)]
    pub min_rows: usize,

    /// Maximum number of rows per table
    #[arg(long, default_value_t = 15)]
    pub max_rows: usize,

    /// Minimum number of columns per table
    #[arg(short = 'm', long, default_value_t = 1)]
    pub min_columns: usize,

    /// Maximum number of columns per table
    #[arg(long, default_value_t = 40)]
    pub max_columns: usize,

    /// Output directory; images/ and json/ are created inside it
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Table style
    #[arg(long, value_enum, default_value_t = StyleChoice::Mixed)]
    pub style: StyleChoice,

    /// Chance that a mixed-style table is uniform
    #[arg(long, default_value_t = 0.5)]
    pub uniform_probability: f64,

    /// Header placement
    #[arg(long, value_enum, default_value_t = HeadersChoice::None)]
    pub headers: HeadersChoice,

    /// Chance of a header row; overrides --headers for that axis
    #[arg(long)]
    pub column_header_probability: Option<f64>,

    /// Chance of a header column; overrides --headers for that axis
    #[arg(long)]
    pub row_header_probability: Option<f64>,

    /// Chance that a body cell is empty (random style)
    #[arg(long, default_value_t = 0.2)]
    pub sparsity: f64,

    /// Allow whole body rows to be empty (random style)
    #[arg(long)]
    pub allow_empty_rows: bool,

    /// Allow whole body columns to be empty (random style)
    #[arg(long)]
    pub allow_empty_columns: bool,

    /// Chance that a body row is empty; overrides --allow-empty-rows
    #[arg(long)]
    pub empty_row_probability: Option<f64>,

    /// Chance that a body column is empty; overrides --allow-empty-columns
    #[arg(long)]
    pub empty_column_probability: Option<f64>,

    /// Chance that a numeric cell is a 15-30 digit number
    #[arg(long, default_value_t = 0.05)]
    pub large_number_probability: f64,

    /// Margin around each table in pixels
    #[arg(long, default_value_t = 10)]
    pub margin: u32,

    /// Text wrapping mode
    #[arg(long, value_enum, default_value_t = WrapChoice::Word)]
    pub wrap_mode: WrapChoice,

    /// Integer scale of the bitmap font
    #[arg(long, default_value_t = 1)]
    pub font_scale: u32,

    /// Random seed [env: TABLE_MAKER_SEED]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log each table at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Resolve header flags: explicit probabilities win over `--headers`.
    pub fn headers(&self) -> Headers {
        let base: Headers = self.headers.into();
        if self.column_header_probability.is_none() && self.row_header_probability.is_none() {
            return base;
        }
        let (column, row) = base.probabilities();
        Headers::Random {
            column: self.column_header_probability.unwrap_or(column),
            row: self.row_header_probability.unwrap_or(row),
        }
    }

    /// Row emptiness probability: explicit value, else 0.3 when allowed, else 0.
    pub fn empty_row_probability(&self) -> f64 {
        line_probability(self.empty_row_probability, self.allow_empty_rows)
    }

    /// Column emptiness probability, resolved like [`Self::empty_row_probability`].
    pub fn empty_column_probability(&self) -> f64 {
        line_probability(self.empty_column_probability, self.allow_empty_columns)
    }

    /// Build an unvalidated configuration; `fallback_seed` fills in a missing `--seed`.
    pub fn to_configuration(&self, fallback_seed: Option<u64>) -> Configuration {
        let mut builder = Configuration::builder()
            .count(self.count)
            .rows(self.min_rows, self.max_rows)
            .columns(self.min_columns, self.max_columns)
            .style(self.style.into())
            .uniform_probability(self.uniform_probability)
            .headers(self.headers())
            .sparsity(
                self.empty_row_probability(),
                self.empty_column_probability(),
                self.sparsity,
            )
            .large_number_probability(self.large_number_probability)
            .margin(self.margin)
            .wrap_mode(self.wrap_mode.into())
            .output_dir(self.output.clone())
            .render(RenderOptions {
                font_scale: self.font_scale,
                ..RenderOptions::default()
            });
        if let Some(seed) = self.seed.or(fallback_seed) {
            builder = builder.seed(seed);
        }
        builder.build_unchecked()
    }
}

fn line_probability(explicit: Option<f64>, allowed: bool) -> f64 {
    match explicit {
        Some(probability) => probability,
        None if allowed => ALLOWED_EMPTY_LINE_PROBABILITY,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tablemaker::{Style, WrapMode};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["table-maker"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_defaults_match_library() {
        let config = parse(&[]).to_configuration(None);
        let defaults = Configuration::default();
        assert_eq!(config.count, defaults.count);
        assert_eq!((config.min_rows, config.max_rows), (1, 15));
        assert_eq!((config.min_columns, config.max_columns), (1, 40));
        assert_eq!(config.style, Style::Mixed);
        assert_eq!(config.headers, Headers::None);
        assert_eq!(config.empty_cell_probability, 0.2);
        assert_eq!(config.empty_row_probability, defaults.empty_row_probability);
        assert_eq!(config.empty_row_probability, 0.0);
        assert_eq!(config.empty_column_probability, 0.0);
        assert_eq!(config.margin, 10);
        assert_eq!(config.wrap_mode, WrapMode::Word);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-c", "4", "-r", "2", "-m", "3", "-o", "out"]);
        assert_eq!(args.count, 4);
        assert_eq!(args.min_rows, 2);
        assert_eq!(args.min_columns, 3);
        assert_eq!(args.output, PathBuf::from("out"));
    }

    #[test]
    fn test_keyword_values() {
        let config = parse(&["--style", "uniform", "--headers", "both", "--wrap-mode", "char"])
            .to_configuration(None);
        assert_eq!(config.style, Style::Uniform);
        assert_eq!(config.headers, Headers::Both);
        assert_eq!(config.wrap_mode, WrapMode::Char);
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        assert!(TestCli::try_parse_from(["table-maker", "--style", "fancy"]).is_err());
    }

    #[test]
    fn test_header_probabilities_override_axis() {
        let args = parse(&["--headers", "column", "--row-header-probability", "0.25"]);
        assert_eq!(
            args.headers(),
            Headers::Random {
                column: 1.0,
                row: 0.25
            }
        );
    }

    #[test]
    fn test_allow_empty_lines() {
        let config = parse(&["--allow-empty-rows"]).to_configuration(None);
        assert_eq!(config.empty_row_probability, 0.3);
        assert_eq!(config.empty_column_probability, 0.0);

        let config = parse(&["--allow-empty-columns"]).to_configuration(None);
        assert_eq!(config.empty_row_probability, 0.0);
        assert_eq!(config.empty_column_probability, 0.3);
    }

    #[test]
    fn test_explicit_line_probability_wins() {
        let args = parse(&[
            "--allow-empty-rows",
            "--empty-row-probability",
            "0.6",
            "--empty-column-probability",
            "0.1",
        ]);
        assert_eq!(args.empty_row_probability(), 0.6);
        assert_eq!(args.empty_column_probability(), 0.1);
    }

    #[test]
    fn test_seed_precedence() {
        assert_eq!(parse(&["--seed", "3"]).to_configuration(Some(9)).seed, Some(3));
        assert_eq!(parse(&[]).to_configuration(Some(9)).seed, Some(9));
    }

    #[test]
    fn test_font_scale_reaches_render_options() {
        let config = parse(&["--font-scale", "2"]).to_configuration(None);
        assert_eq!(config.render.font_scale, 2);
    }
}

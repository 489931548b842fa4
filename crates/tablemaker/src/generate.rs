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

//! Generation runs: configuration in, PNG and JSON files out.

use crate::error::Result;
use crate::output::{write_json, write_png, OutputLayout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tablemaker_core::{Configuration, RandomDataGenerator, TableData, TableDimensions};
use tablemaker_render::{RgbImage, TableVisualizer};
use tracing::{debug, info};

/// One table with its shape, content and rendered canvas.
#[derive(Debug, Clone)]
pub struct GeneratedTable {
    pub dimensions: TableDimensions,
    pub data: TableData,
    pub canvas: RgbImage,
}

/// Files written for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutput {
    /// 1-based position in the run.
    pub index: usize,
    pub image_path: PathBuf,
    pub json_path: PathBuf,
}

/// Random source for a run: seeded when the configuration has a seed.
pub fn run_rng(config: &Configuration) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Sample, fill and render one table.
///
/// Draws happen in order: dimensions, content, border styles.
pub fn generate_table<R: Rng>(
    config: &Configuration,
    generator: &RandomDataGenerator,
    visualizer: &TableVisualizer,
    rng: &mut R,
) -> Result<GeneratedTable> {
    let dimensions = TableDimensions::compute(config, rng)?;
    let data = TableData::build(&dimensions, generator, rng);
    let canvas = visualizer.render(&data, dimensions.style(), rng)?;
    debug!(
        rows = dimensions.row_count(),
        columns = dimensions.column_count(),
        style = ?dimensions.style(),
        header_row = data.header_row(),
        header_column = data.header_column(),
        empty_cells = data.empty_cell_count(),
        "generated table"
    );
    Ok(GeneratedTable {
        dimensions,
        data,
        canvas,
    })
}

/// Generate `config.count` tables and write them under `config.output_dir`.
///
/// The configuration is validated before any directory is created. A table's
/// files are written only once it has rendered; the first failure aborts the
/// run, leaving earlier tables on disk.
pub fn generate_tables(config: &Configuration) -> Result<Vec<TableOutput>> {
    let mut rng = run_rng(config);
    generate_tables_with_rng(config, &mut rng)
}

/// Like [`generate_tables`], drawing from a caller-supplied source.
///
/// # Errors
///
/// Configuration errors are reported before anything touches the disk.
pub fn generate_tables_with_rng<R: Rng>(
    config: &Configuration,
    rng: &mut R,
) -> Result<Vec<TableOutput>> {
    config.validate()?;
    let layout = OutputLayout::new(&config.output_dir, config.count);
    layout.create()?;
    info!(
        count = config.count,
        output = %config.output_dir.display(),
        seed = ?config.seed,
        "generating tables"
    );

    let generator = RandomDataGenerator::from_config(config);
    let visualizer = TableVisualizer::from_config(config);

    let mut outputs = Vec::with_capacity(config.count);
    for index in 1..=config.count {
        let table = generate_table(config, &generator, &visualizer, rng)?;
        let output = TableOutput {
            index,
            image_path: layout.image_path(index),
            json_path: layout.json_path(index),
        };
        write_png(&table.canvas, &output.image_path)?;
        write_json(&table.data, &output.json_path)?;
        outputs.push(output);
    }
    Ok(outputs)
}

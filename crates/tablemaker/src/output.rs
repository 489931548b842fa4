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

//! Output directory layout and file sinks.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tablemaker_core::TableData;
use tablemaker_render::RgbImage;

/// Subdirectory holding PNG files.
pub const IMAGES_DIR: &str = "images";

/// Subdirectory holding JSON files.
pub const JSON_DIR: &str = "json";

/// Where the files of a run go.
///
/// A single-table run writes `table.png` and `table.json`; larger runs write
/// `table_1`, `table_2`, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    images_dir: PathBuf,
    json_dir: PathBuf,
    count: usize,
}

impl OutputLayout {
    /// Layout for `count` tables under `root`.
    pub fn new(root: &Path, count: usize) -> Self {
        Self {
            images_dir: root.join(IMAGES_DIR),
            json_dir: root.join(JSON_DIR),
            count,
        }
    }

    /// Create both subdirectories.
    pub fn create(&self) -> Result<()> {
        for dir in [&self.images_dir, &self.json_dir] {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        Ok(())
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn json_dir(&self) -> &Path {
        &self.json_dir
    }

    /// File stem for the 1-based table `index`.
    pub fn file_stem(&self, index: usize) -> String {
        if self.count == 1 {
            "table".to_string()
        } else {
            format!("table_{}", index)
        }
    }

    /// PNG path for the 1-based table `index`.
    pub fn image_path(&self, index: usize) -> PathBuf {
        self.images_dir.join(format!("{}.png", self.file_stem(index)))
    }

    /// JSON path for the 1-based table `index`.
    pub fn json_path(&self, index: usize) -> PathBuf {
        self.json_dir.join(format!("{}.json", self.file_stem(index)))
    }
}

/// Encode `canvas` as PNG at `path`.
pub fn write_png(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save(path).map_err(|e| match e {
        image::ImageError::IoError(io) => Error::io(path, io),
        other => Error::image(path, other),
    })
}

/// Write the pretty-printed JSON dump of `table` at `path`.
pub fn write_json(table: &TableData, path: &Path) -> Result<()> {
    let json = tablemaker_json::to_json(table)?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

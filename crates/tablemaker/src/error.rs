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

//! Top-level error type.

use std::path::{Path, PathBuf};
use tablemaker_core::TableError;
use tablemaker_json::JsonError;
use tablemaker_render::RenderError;
use thiserror::Error;

/// Any failure of a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or table structure.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Layout or rasterization failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// JSON conversion failed.
    #[error(transparent)]
    Json(#[from] JsonError),

    /// A directory or file could not be written.
    #[error("IoError: {path}: {message}")]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The canvas could not be encoded.
    #[error("ImageError: {path}: {message}")]
    Image {
        /// Path being written.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Create an image encoding error for `path`.
    pub fn image(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Image {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Whether this error came from configuration validation.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Table(e) if e.is_configuration())
    }
}

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display_names_path() {
        let err = Error::io(Path::new("out/images"), "permission denied");
        assert_eq!(err.to_string(), "IoError: out/images: permission denied");
    }

    #[test]
    fn test_configuration_passthrough() {
        let err: Error = TableError::configuration("count", "must be at least 1, got 0").into();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "ConfigurationError: count must be at least 1, got 0"
        );
        assert!(!Error::image(Path::new("a.png"), "boom").is_configuration());
    }
}

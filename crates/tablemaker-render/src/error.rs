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

//! Error types for rendering.

use tablemaker_core::TableError;
use thiserror::Error;

/// Errors raised while laying out or rasterizing a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The laid-out table does not fit in the largest allowed canvas.
    #[error("RenderError: canvas {width}x{height} exceeds the {max}px side limit")]
    CanvasTooLarge {
        /// Required canvas width in pixels.
        width: u64,
        /// Required canvas height in pixels.
        height: u64,
        /// Configured side limit.
        max: u32,
    },

    /// Render inputs do not agree with each other.
    #[error("RenderError: {0}")]
    InvalidOptions(String),

    /// Render options failed validation.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

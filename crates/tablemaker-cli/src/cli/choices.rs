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

//! Keyword flag values.

use clap::ValueEnum;
use tablemaker::{Headers, Style, WrapMode};

/// Values of `--style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleChoice {
    /// Dense tables with solid lines
    Uniform,
    /// Sparse tables with varied lines
    Random,
    /// Each table picks uniform or random
    Mixed,
}

impl From<StyleChoice> for Style {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Uniform => Style::Uniform,
            StyleChoice::Random => Style::Random,
            StyleChoice::Mixed => Style::Mixed,
        }
    }
}

/// Values of `--headers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeadersChoice {
    /// No header row or column
    None,
    /// Header row labelling the columns
    Column,
    /// Header column labelling the rows
    Row,
    /// Header row and header column
    Both,
}

impl From<HeadersChoice> for Headers {
    fn from(choice: HeadersChoice) -> Self {
        match choice {
            HeadersChoice::None => Headers::None,
            HeadersChoice::Column => Headers::Column,
            HeadersChoice::Row => Headers::Row,
            HeadersChoice::Both => Headers::Both,
        }
    }
}

/// Values of `--wrap-mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WrapChoice {
    /// Break between words
    Word,
    /// Break anywhere
    Char,
    /// Never break
    None,
}

impl From<WrapChoice> for WrapMode {
    fn from(choice: WrapChoice) -> Self {
        match choice {
            WrapChoice::Word => WrapMode::Word,
            WrapChoice::Char => WrapMode::Char,
            WrapChoice::None => WrapMode::None,
        }
    }
}

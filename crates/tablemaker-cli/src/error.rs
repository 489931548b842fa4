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

//! Structured error types for the Table Maker CLI.

use thiserror::Error;

/// The main error type for CLI runs.
///
/// Bad flag values and failed validation are `InvalidInput`; anything that
/// goes wrong after generation started is `Generation`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Arguments do not form a valid configuration.
    #[error("{0}")]
    InvalidInput(String),

    /// Rendering or writing a table failed.
    #[error("{0}")]
    Generation(String),
}

impl From<tablemaker::Error> for CliError {
    fn from(err: tablemaker::Error) -> Self {
        if err.is_configuration() {
            CliError::InvalidInput(err.to_string())
        } else {
            CliError::Generation(err.to_string())
        }
    }
}

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

//! Table Maker Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use tablemaker_cli::cli::GenerateArgs;
use tablemaker_cli::{commands, logging};

/// Table Maker - synthetic table images with JSON ground truth
///
/// Writes `images/table_N.png` and `json/table_N.json` (or `table.png` and
/// `table.json` for a single table) under the output directory.
#[derive(Parser)]
#[command(name = "table-maker")]
#[command(author, version, about = "Generate random tables as PNG images and JSON data", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.args.verbose);

    match commands::generate(&cli.args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

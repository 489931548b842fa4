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

//! Generate command implementation.

use crate::cli::{seed_from_env, GenerateArgs};
use crate::error::CliError;
use std::fmt::Write as _;
use tablemaker::{generate_tables, TableOutput};

/// Generate the requested tables and print a summary to stdout.
///
/// # Errors
///
/// - [`CliError::InvalidInput`] when the flags fail validation; nothing is written
/// - [`CliError::Generation`] when rendering or writing a table fails
pub fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let config = args.to_configuration(seed_from_env());
    config
        .validate()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let outputs = generate_tables(&config)?;
    print!("{}", format_summary(&outputs));
    Ok(())
}

/// Human-readable list of the files a run wrote.
pub fn format_summary(outputs: &[TableOutput]) -> String {
    let Some(first) = outputs.first() else {
        return "Generated 0 tables\n".to_string();
    };
    let mut out = String::new();
    let noun = if outputs.len() == 1 { "table" } else { "tables" };
    let dir = |p: &std::path::Path| p.parent().map(|d| d.display().to_string()).unwrap_or_default();
    let _ = writeln!(out, "Generated {} {}:", outputs.len(), noun);
    let _ = writeln!(out, "  Images saved in: {}", dir(&first.image_path));
    let _ = writeln!(out, "  JSON data saved in: {}", dir(&first.json_path));
    for output in outputs {
        let name = output
            .image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = writeln!(out, "  Table {}: {}", output.index, name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn output(index: usize, stem: &str) -> TableOutput {
        TableOutput {
            index,
            image_path: PathBuf::from(format!("out/images/{stem}.png")),
            json_path: PathBuf::from(format!("out/json/{stem}.json")),
        }
    }

    #[test]
    fn test_summary_lists_every_table() {
        let summary = format_summary(&[output(1, "table_1"), output(2, "table_2")]);
        assert_eq!(
            summary,
            "Generated 2 tables:\n  Images saved in: out/images\n  JSON data saved in: out/json\n  Table 1: table_1.png\n  Table 2: table_2.png\n"
        );
    }

    #[test]
    fn test_summary_single() {
        let summary = format_summary(&[output(1, "table")]);
        assert!(summary.starts_with("Generated 1 table:\n"));
        assert!(summary.ends_with("  Table 1: table.png\n"));
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(format_summary(&[]), "Generated 0 tables\n");
    }
}

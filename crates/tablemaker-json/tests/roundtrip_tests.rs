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

//! JSON round-trip tests for generated and hand-built tables.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tablemaker_core::{Configuration, Headers, RandomDataGenerator, Style, TableData, TableDimensions};
use tablemaker_json::{from_json, from_json_value, to_json, to_json_value, JsonError};
use tablemaker_test::fixtures;

// ===== Fixtures =====

#[test]
fn test_all_fixtures_roundtrip() {
    for (name, fixture) in fixtures::all() {
        let table = fixture();
        let json = to_json(&table).unwrap();
        let back = from_json(&json).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(back, table, "{name}");
        assert_eq!(back.to_nested_list(), table.to_nested_list(), "{name}");
    }
}

#[test]
fn test_value_roundtrip_keeps_headers() {
    let table = fixtures::both_headers();
    let back = from_json_value(to_json_value(&table).unwrap()).unwrap();
    assert!(back.header_row());
    assert!(back.header_column());
}

#[test]
fn test_only_three_fields() {
    let value = to_json_value(&fixtures::sparse()).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 3);
    for key in ["rows", "header_row", "header_column"] {
        assert!(keys.contains(&key), "missing {key}");
    }
}

// ===== Errors =====

#[test]
fn test_invalid_json_samples() {
    for (name, json) in fixtures::errors::invalid_json_samples() {
        match from_json(json) {
            Err(JsonError::Syntax(_)) => {}
            other => panic!("{name}: expected syntax error, got {other:?}"),
        }
    }
}

#[test]
fn test_invalid_table_samples() {
    for (name, json) in fixtures::errors::invalid_table_samples() {
        match from_json(json) {
            Err(JsonError::Table(_)) => {}
            other => panic!("{name}: expected table error, got {other:?}"),
        }
    }
}

// ===== Generated tables =====

proptest! {
    #[test]
    fn prop_generated_tables_roundtrip(seed in any::<u64>(), cell in 0.0..=1.0f64) {
        let config = Configuration::builder()
            .rows(1, 8)
            .columns(1, 8)
            .style(Style::Random)
            .headers(Headers::Random { column: 0.5, row: 0.5 })
            .sparsity(0.3, 0.3, cell)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let dims = TableDimensions::compute(&config, &mut rng).unwrap();
        let table = TableData::build(&dims, &RandomDataGenerator::from_config(&config), &mut rng);
        let back = from_json(&to_json(&table).unwrap()).unwrap();
        prop_assert_eq!(back, table);
    }
}

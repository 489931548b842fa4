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

//! Table Maker JSON Conversion
//!
//! Serializes a [`TableData`](tablemaker_core::TableData) as a plain
//! structural dump and reads it back, re-checking every grid invariant.
//!
//! # Examples
//!
//! ```rust
//! use tablemaker_core::TableData;
//! use tablemaker_json::{from_json, to_json};
//!
//! let rows = vec![vec![Some("ID".to_string()), Some("Price".to_string())]];
//! let table = TableData::from_rows(rows, true, false).unwrap();
//!
//! let json = to_json(&table).unwrap();
//! assert_eq!(from_json(&json).unwrap(), table);
//! ```

mod error;
mod from_json;
mod to_json;

pub use error::{JsonError, Result};
pub use from_json::{from_json, from_json_value};
pub use to_json::{to_json, to_json_value};

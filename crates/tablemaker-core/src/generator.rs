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

//! Random cell content and emptiness draws.
//!
//! Nothing here owns a random source: every call receives the active RNG, so a
//! seeded [`StdRng`](rand::rngs::StdRng) reproduces a run exactly and
//! successive tables keep advancing the same stream.

use crate::config::Configuration;
use fake::faker::address::en::CountryName;
use fake::faker::currency::en::CurrencyName;
use fake::faker::lorem::en::{Word, Words};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

/// Label placed where the header row and header column meet.
pub const CORNER_HEADER: &str = "ID";

/// Digit counts used for very large numbers.
const LARGE_NUMBER_DIGITS: [usize; 4] = [15, 20, 25, 30];

/// Single Bernoulli draw shared by cell, row and column emptiness decisions.
///
/// A probability of `0.0` never fires and `1.0` always fires.
pub fn decide_empty<R: Rng>(probability: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() < probability
}

/// Produces printable cell and header text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomDataGenerator {
    large_number_probability: f64,
}

impl Default for RandomDataGenerator {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl RandomDataGenerator {
    /// Create a generator with the given large number probability.
    pub fn new(large_number_probability: f64) -> Self {
        Self {
            large_number_probability,
        }
    }

    /// Create a generator from a validated configuration.
    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.large_number_probability)
    }

    /// Probability that a numeric cell becomes a 15 to 30 digit integer.
    pub fn large_number_probability(&self) -> f64 {
        self.large_number_probability
    }

    /// Bernoulli emptiness draw; see [`decide_empty`].
    pub fn decide_empty<R: Rng>(&self, probability: f64, rng: &mut R) -> bool {
        decide_empty(probability, rng)
    }

    /// Generate non-empty body cell text of bounded length.
    ///
    /// Roughly 60% of cells are numeric (integers, two-decimal floats, or
    /// occasionally very long digit strings) and 40% are textual (short
    /// letter codes or a few lorem words).
    pub fn generate_cell_content<R: Rng>(&self, rng: &mut R) -> String {
        let text = if rng.gen::<f64>() < 0.6 {
            self.numeric_content(rng)
        } else {
            textual_content(rng)
        };
        non_empty(text, rng)
    }

    fn numeric_content<R: Rng>(&self, rng: &mut R) -> String {
        if rng.gen::<f64>() < self.large_number_probability {
            let digits = LARGE_NUMBER_DIGITS[rng.gen_range(0..LARGE_NUMBER_DIGITS.len())];
            (0..digits)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect()
        } else if rng.gen::<f64>() < 0.5 {
            rng.gen_range(0..=999u32).to_string()
        } else {
            format!("{:.2}", rng.gen_range(0.01..100.0f64))
        }
    }

    /// Generate a label for a header-row cell.
    pub fn column_header<R: Rng>(&self, rng: &mut R) -> String {
        let label = match rng.gen_range(0..4) {
            0 => capitalize(&Word().fake_with_rng::<String, _>(rng)),
            1 => {
                let words: Vec<String> = Words(1..3).fake_with_rng(rng);
                words
                    .iter()
                    .map(|w| capitalize(w))
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            2 => LastName().fake_with_rng(rng),
            _ => CurrencyName().fake_with_rng(rng),
        };
        non_empty(label, rng)
    }

    /// Generate a label for the header-column cell of body row `index`.
    ///
    /// Mostly names and words; about 30% of the time the zero-based body row
    /// index itself.
    pub fn row_header<R: Rng>(&self, index: usize, rng: &mut R) -> String {
        if rng.gen::<f64>() >= 0.7 {
            return index.to_string();
        }
        let label = match rng.gen_range(0..4) {
            0 => capitalize(&Word().fake_with_rng::<String, _>(rng)),
            1 => LastName().fake_with_rng(rng),
            2 => FirstName().fake_with_rng(rng),
            _ => CountryName().fake_with_rng(rng),
        };
        non_empty(label, rng)
    }
}

fn textual_content<R: Rng>(rng: &mut R) -> String {
    if rng.gen::<f64>() < 0.5 {
        let len = rng.gen_range(1..=3);
        (0..len)
            .map(|_| {
                let letter = char::from(b'a' + rng.gen_range(0..26u8));
                if rng.gen::<bool>() {
                    letter.to_ascii_uppercase()
                } else {
                    letter
                }
            })
            .collect()
    } else {
        let words: Vec<String> = Words(1..6).fake_with_rng(rng);
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_empty<R: Rng>(text: String, rng: &mut R) -> String {
    if text.trim().is_empty() {
        rng.gen_range(0..=999u32).to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_decide_empty_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            assert!(!decide_empty(0.0, &mut rng));
            assert!(decide_empty(1.0, &mut rng));
        }
    }

    #[test]
    fn test_decide_empty_roughly_matches_probability() {
        let mut rng = StdRng::seed_from_u64(2);
        let hits = (0..10_000).filter(|_| decide_empty(0.3, &mut rng)).count();
        assert!((2_500..3_500).contains(&hits), "got {} hits", hits);
    }

    #[test]
    fn test_cell_content_is_non_empty_and_bounded() {
        let generator = RandomDataGenerator::new(0.5);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let text = generator.generate_cell_content(&mut rng);
            assert!(!text.trim().is_empty());
            assert!(text.chars().count() <= 80, "too long: {:?}", text);
            assert!(text.chars().all(|c| !c.is_control()));
        }
    }

    #[test]
    fn test_large_numbers_appear_when_forced() {
        let generator = RandomDataGenerator::new(1.0);
        let mut rng = StdRng::seed_from_u64(4);
        let long_numbers = (0..200)
            .map(|_| generator.generate_cell_content(&mut rng))
            .filter(|t| t.len() >= 15 && t.chars().all(|c| c.is_ascii_digit()))
            .count();
        assert!(long_numbers > 0);
    }

    #[test]
    fn test_same_seed_same_content() {
        let generator = RandomDataGenerator::default();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(
                generator.generate_cell_content(&mut a),
                generator.generate_cell_content(&mut b)
            );
        }
    }

    #[test]
    fn test_headers_are_non_empty() {
        let generator = RandomDataGenerator::default();
        let mut rng = StdRng::seed_from_u64(5);
        for i in 0..200 {
            assert!(!generator.column_header(&mut rng).trim().is_empty());
            assert!(!generator.row_header(i, &mut rng).trim().is_empty());
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("table"), "Table");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }
}

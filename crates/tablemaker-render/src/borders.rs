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

//! Grid line styles.

use image::Rgb;
use rand::Rng;
use tablemaker_core::TableStyle;

/// Cumulative weights for Solid, Dashed and Faint; the remainder is Omitted.
const STYLE_THRESHOLDS: [f64; 3] = [0.7, 0.8, 0.9];

/// How one grid line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// Continuous black line.
    Solid,
    /// Black dots every ten pixels.
    Dashed,
    /// Continuous light gray line.
    Faint,
    /// Not drawn.
    Omitted,
}

impl BorderStyle {
    /// Line color, or `None` when the line is not drawn.
    pub fn color(self) -> Option<Rgb<u8>> {
        match self {
            Self::Solid | Self::Dashed => Some(Rgb([0, 0, 0])),
            Self::Faint => Some(Rgb([192, 192, 192])),
            Self::Omitted => None,
        }
    }

    fn sample<R: Rng>(rng: &mut R) -> Self {
        let x: f64 = rng.gen();
        if x < STYLE_THRESHOLDS[0] {
            Self::Solid
        } else if x < STYLE_THRESHOLDS[1] {
            Self::Dashed
        } else if x < STYLE_THRESHOLDS[2] {
            Self::Faint
        } else {
            Self::Omitted
        }
    }
}

/// Style of every horizontal and vertical grid line of one table.
///
/// A table with `rows` rows has `rows + 1` horizontal lines, index 0 being
/// the top edge. The first and last line on each axis form the outer frame
/// and are always [`BorderStyle::Solid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderPlan {
    horizontal: Vec<BorderStyle>,
    vertical: Vec<BorderStyle>,
}

impl BorderPlan {
    /// Every line solid.
    pub fn solid(rows: usize, columns: usize) -> Self {
        Self {
            horizontal: vec![BorderStyle::Solid; rows + 1],
            vertical: vec![BorderStyle::Solid; columns + 1],
        }
    }

    /// Plan the lines for a table of the given style.
    ///
    /// Uniform tables get [`BorderPlan::solid`] without touching `rng`.
    /// Random tables draw one style per interior line, horizontal lines
    /// first, then vertical.
    pub fn generate<R: Rng>(style: TableStyle, rows: usize, columns: usize, rng: &mut R) -> Self {
        let mut plan = Self::solid(rows, columns);
        if style.is_random() {
            for line in interior(&mut plan.horizontal) {
                *line = BorderStyle::sample(rng);
            }
            for line in interior(&mut plan.vertical) {
                *line = BorderStyle::sample(rng);
            }
        }
        plan
    }

    /// Styles of the horizontal lines, top to bottom.
    pub fn horizontal(&self) -> &[BorderStyle] {
        &self.horizontal
    }

    /// Styles of the vertical lines, left to right.
    pub fn vertical(&self) -> &[BorderStyle] {
        &self.vertical
    }

    /// Number of rows this plan was made for.
    pub fn row_count(&self) -> usize {
        self.horizontal.len().saturating_sub(1)
    }

    /// Number of columns this plan was made for.
    pub fn column_count(&self) -> usize {
        self.vertical.len().saturating_sub(1)
    }

    /// Whether every line is solid.
    pub fn is_solid(&self) -> bool {
        self.horizontal
            .iter()
            .chain(&self.vertical)
            .all(|s| *s == BorderStyle::Solid)
    }
}

fn interior(lines: &mut [BorderStyle]) -> &mut [BorderStyle] {
    let end = lines.len().saturating_sub(1);
    &mut lines[end.min(1)..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_solid_counts() {
        let plan = BorderPlan::solid(3, 5);
        assert_eq!(plan.horizontal().len(), 4);
        assert_eq!(plan.vertical().len(), 6);
        assert_eq!(plan.row_count(), 3);
        assert_eq!(plan.column_count(), 5);
        assert!(plan.is_solid());
    }

    #[test]
    fn test_uniform_is_solid() {
        let mut rng = StdRng::seed_from_u64(1);
        let plan = BorderPlan::generate(TableStyle::Uniform, 6, 6, &mut rng);
        assert_eq!(plan, BorderPlan::solid(6, 6));
    }

    #[test]
    fn test_random_keeps_outer_frame() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let plan = BorderPlan::generate(TableStyle::Random, 8, 8, &mut rng);
            assert_eq!(plan.horizontal()[0], BorderStyle::Solid);
            assert_eq!(plan.horizontal()[8], BorderStyle::Solid);
            assert_eq!(plan.vertical()[0], BorderStyle::Solid);
            assert_eq!(plan.vertical()[8], BorderStyle::Solid);
        }
    }

    #[test]
    fn test_random_uses_every_style() {
        let mut rng = StdRng::seed_from_u64(3);
        let plan = BorderPlan::generate(TableStyle::Random, 200, 200, &mut rng);
        for style in [
            BorderStyle::Solid,
            BorderStyle::Dashed,
            BorderStyle::Faint,
            BorderStyle::Omitted,
        ] {
            assert!(plan.horizontal().contains(&style), "{style:?} never drawn");
        }
    }

    #[test]
    fn test_single_cell_has_no_interior() {
        let mut rng = StdRng::seed_from_u64(4);
        let plan = BorderPlan::generate(TableStyle::Random, 1, 1, &mut rng);
        assert!(plan.is_solid());
    }

    #[test]
    fn test_colors() {
        assert_eq!(BorderStyle::Omitted.color(), None);
        assert_eq!(BorderStyle::Faint.color(), Some(Rgb([192, 192, 192])));
    }
}

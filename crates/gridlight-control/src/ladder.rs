// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The cascade of render resolutions, from native down to a couple of pixels.

use gridlight_core::math::Extent2D;

/// Smallest dimension that is still divided further.
const MIN_DIVISIBLE_DIMENSION: u32 = 2;

/// Render resolutions ordered from finest (index 0, native) to coarsest.
///
/// Each level is the previous one with both dimensions divided by 1.25,
/// truncated. Division stops at the first level that has a dimension of 2 or
/// less, and that level is included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionLadder {
    levels: Vec<Extent2D>,
}

impl ResolutionLadder {
    /// Builds the ladder starting at `native`.
    pub fn new(native: Extent2D) -> Self {
        let mut levels = vec![native];
        let mut current = native;
        while current.width > MIN_DIVISIBLE_DIMENSION && current.height > MIN_DIVISIBLE_DIMENSION {
            current = Extent2D::new(shrink(current.width), shrink(current.height));
            levels.push(current);
        }
        Self { levels }
    }

    /// All levels, finest first.
    pub fn levels(&self) -> &[Extent2D] {
        &self.levels
    }

    /// Number of levels. Never zero.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`: the native level is always present.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The extent of level `index`.
    pub fn get(&self, index: usize) -> Option<Extent2D> {
        self.levels.get(index).copied()
    }

    /// The native resolution.
    pub fn native(&self) -> Extent2D {
        self.levels[0]
    }

    /// Index of the coarsest level.
    pub fn coarsest(&self) -> usize {
        self.levels.len() - 1
    }
}

/// `x / 1.25`, truncated.
fn shrink(x: u32) -> u32 {
    (u64::from(x) * 4 / 5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_from_800x600() {
        let ladder = ResolutionLadder::new(Extent2D::new(800, 600));
        assert_eq!(ladder.native(), Extent2D::new(800, 600));
        assert_eq!(ladder.get(1), Some(Extent2D::new(640, 480)));
        assert_eq!(ladder.get(2), Some(Extent2D::new(512, 384)));

        for pair in ladder.levels().windows(2) {
            assert!(pair[1].width < pair[0].width);
            assert!(pair[1].height < pair[0].height);
        }
        let last = ladder.levels()[ladder.coarsest()];
        assert!(last.width <= 2 || last.height <= 2);
        // Every level but the last could still be divided.
        for level in &ladder.levels()[..ladder.coarsest()] {
            assert!(level.width > 2 && level.height > 2);
        }
    }

    #[test]
    fn test_tiny_native_is_a_single_level() {
        let ladder = ResolutionLadder::new(Extent2D::new(2, 100));
        assert_eq!(ladder.len(), 1);
        assert_eq!(ladder.coarsest(), 0);
    }
}

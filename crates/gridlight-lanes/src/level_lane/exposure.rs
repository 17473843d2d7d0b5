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

//! Marks which faces of each wall block look onto open space.

use gridlight_core::grid::{Direction, GridMap};
use gridlight_core::ExposureMask;

/// Computes the exposure mask of `grid`.
///
/// Every solid cell starts fully exposed (`0b1111`) and loses the bit of each
/// neighbor that is also solid. Neighbors outside the grid leave their bit set.
/// Empty and door cells are always 0.
pub fn compute_exposure_mask(grid: &GridMap) -> ExposureMask {
    let mut mask = ExposureMask::zeroed(grid.rows(), grid.cols());
    for coord in grid.coords() {
        if !grid.get(coord).is_some_and(|cell| cell.is_solid()) {
            continue;
        }
        let mut bits = 0b1111;
        for direction in Direction::ALL {
            let (dr, dc) = direction.offset();
            if grid.is_solid_at(coord.row as i64 + dr, coord.col as i64 + dc) {
                bits &= !direction.bit();
            }
        }
        mask.set(coord, bits);
    }
    mask
}

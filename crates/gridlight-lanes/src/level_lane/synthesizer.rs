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

//! Builds the oriented unit quads that make up walls, floors and ceilings.
//!
//! A cell at `(row, col)` occupies the unit cube `[col, col + 1] x [row, row + 1]
//! x [0, 1]`: x grows with the column, y with the row, and z points up. Row and
//! column are signed because door flank faces may sit one cell outside the grid.

use gridlight_core::grid::Direction;
use gridlight_core::math::Vec3;
use gridlight_core::scene::Plane;
use gridlight_core::PlaneSink;

/// Appends the wall face of `(row, col)` that faces `direction`.
pub fn make_wall<S: PlaneSink + ?Sized>(
    direction: Direction,
    row: i64,
    col: i64,
    material_index: u32,
    target: &mut S,
) {
    let (x, y) = (col as f32, row as f32);
    let plane = match direction {
        Direction::North => Plane::unit_quad(
            Vec3::new(x + 0.5, y, 0.5),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, -1.0, 0.0),
            material_index,
        ),
        Direction::East => Plane::unit_quad(
            Vec3::new(x + 1.0, y + 0.5, 0.5),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            material_index,
        ),
        Direction::South => Plane::unit_quad(
            Vec3::new(x + 0.5, y + 1.0, 0.5),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            material_index,
        ),
        Direction::West => Plane::unit_quad(
            Vec3::new(x, y + 0.5, 0.5),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 0.0),
            material_index,
        ),
    };
    target.planes_mut().push(plane);
}

/// Appends the upward-facing floor quad of `(row, col)`.
pub fn make_floor<S: PlaneSink + ?Sized>(row: i64, col: i64, material_index: u32, target: &mut S) {
    target.planes_mut().push(Plane::unit_quad(
        Vec3::new(col as f32 + 0.5, row as f32 + 0.5, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        material_index,
    ));
}

/// Appends the downward-facing ceiling quad of `(row, col)`.
pub fn make_ceiling<S: PlaneSink + ?Sized>(
    row: i64,
    col: i64,
    material_index: u32,
    target: &mut S,
) {
    target.planes_mut().push(Plane::unit_quad(
        Vec3::new(col as f32 + 0.5, row as f32 + 0.5, 1.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
        material_index,
    ));
}

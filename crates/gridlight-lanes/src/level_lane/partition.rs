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

//! Splits a tagged grid into rooms connected by shared doors.
//!
//! Traversal is a breadth-first flood fill seeded from the first unvisited
//! empty cell in row-major order. Floor cells belong to exactly one room, walls
//! touched by a room become its boundary, and door cells are built once into
//! the level's door arena and referenced by every room that reaches them.

use super::exposure::compute_exposure_mask;
use super::synthesizer::{make_ceiling, make_floor, make_wall};
use ahash::{AHashMap, AHashSet};
use gridlight_core::grid::{Cell, Direction, GridCoord, GridMap, MaterialLayer};
use gridlight_core::level::{Door, DoorId, DoorOrientation, ExposureMask, Level, LevelError, Room};
use gridlight_core::PartitionSettings;
use std::collections::VecDeque;

/// Order in which neighbors are considered while expanding a cell.
const EXPANSION_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// A room under construction plus the sets that keep its lists free of repeats.
#[derive(Default)]
struct RoomBuilder {
    room: Room,
    floor: AHashSet<GridCoord>,
    boundary: AHashSet<GridCoord>,
    doors: AHashSet<DoorId>,
}

impl RoomBuilder {
    fn add_floor(&mut self, coord: GridCoord) {
        if self.floor.insert(coord) {
            self.room.floor.push(coord);
        }
    }

    fn add_boundary(&mut self, coord: GridCoord) {
        if self.boundary.insert(coord) {
            self.room.boundary.push(coord);
        }
    }

    fn attach_door(&mut self, door: DoorId) {
        if self.doors.insert(door) {
            self.room.doors.push(door);
        }
    }
}

/// Optional per-cell material ids for floors and ceilings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceLayers<'a> {
    /// One-based floor material ids, parallel to the grid.
    pub floor: Option<&'a MaterialLayer>,
    /// One-based ceiling material ids, parallel to the grid.
    pub ceiling: Option<&'a MaterialLayer>,
}

impl SurfaceLayers<'_> {
    fn validate(&self, grid: &GridMap) -> Result<(), LevelError> {
        let expected = (grid.rows(), grid.cols());
        for (layer, name) in [(self.floor, "floor"), (self.ceiling, "ceiling")] {
            if let Some(layer) = layer {
                if layer.dimensions() != expected {
                    log::warn!("Rejecting {name} layer: dimensions do not match the grid");
                    return Err(LevelError::LayerMismatch {
                        layer: name,
                        expected,
                        found: layer.dimensions(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Partitions `grid` using the default floor and ceiling materials.
pub fn partition(grid: &GridMap, settings: &PartitionSettings) -> Result<Level, LevelError> {
    partition_with_layers(grid, SurfaceLayers::default(), settings)
}

/// Partitions `grid`, taking floor and ceiling materials from `layers` where given.
///
/// # Errors
///
/// Returns [`LevelError::LayerMismatch`] when a layer's dimensions differ from
/// the grid's.
pub fn partition_with_layers(
    grid: &GridMap,
    layers: SurfaceLayers<'_>,
    settings: &PartitionSettings,
) -> Result<Level, LevelError> {
    layers.validate(grid)?;

    let exposure = compute_exposure_mask(grid);
    let mut visited: AHashSet<GridCoord> = AHashSet::new();
    let mut registry: AHashMap<GridCoord, DoorId> = AHashMap::new();
    let mut doors: Vec<Door> = Vec::new();
    let mut rooms: Vec<Room> = Vec::new();

    let mut scan_from = GridCoord::new(0, 0);

    while let Some(seed) = find_unvisited_seed(grid, &visited, scan_from) {
        scan_from = seed;
        // Doors are entered again from the other side.
        for door in registry.keys() {
            visited.remove(door);
        }

        let mut room = RoomBuilder::default();
        let mut frontier = VecDeque::from([seed]);
        while let Some(coord) = frontier.pop_front() {
            if !visited.insert(coord) {
                continue;
            }
            let on_door = grid.get(coord) == Some(Cell::Door);

            let neighbors = EXPANSION_ORDER
                .iter()
                .filter_map(|&direction| grid.neighbor(coord, direction));
            for candidate in std::iter::once(coord).chain(neighbors) {
                let Some(cell) = grid.get(candidate) else {
                    continue;
                };
                if on_door && candidate != coord && !cell.is_solid() {
                    continue;
                }
                match cell {
                    Cell::Wall(_) => room.add_boundary(candidate),
                    Cell::Empty => {
                        if !visited.contains(&candidate) {
                            frontier.push_back(candidate);
                        }
                        room.add_floor(candidate);
                    }
                    Cell::Door => {
                        if !visited.contains(&candidate) {
                            frontier.push_back(candidate);
                        }
                        let id = *registry.entry(candidate).or_insert_with(|| {
                            doors.push(build_door(grid, candidate, settings.door_material));
                            DoorId(doors.len() - 1)
                        });
                        room.attach_door(id);
                    }
                }
            }
        }

        build_room_geometry(grid, &exposure, layers, settings, &mut room);
        let room = room.room;
        log::debug!(
            "Room {} seeded at {seed}: {} floor cells, {} boundary cells, {} doors, {} planes",
            rooms.len(),
            room.floor.len(),
            room.boundary.len(),
            room.doors.len(),
            room.planes.len()
        );
        rooms.push(room);
    }

    let level = Level::new(rooms, doors, exposure);
    log::info!(
        "Partitioned {}x{} grid into {} rooms and {} doors ({} planes)",
        grid.rows(),
        grid.cols(),
        level.rooms().len(),
        level.doors().len(),
        level.plane_count()
    );
    Ok(level)
}

/// Returns the first empty cell at or after `from`, in row-major order, that
/// has not been visited.
///
/// Empty cells never leave the visited set, so a partition resumes each scan
/// from the previous seed.
pub fn find_unvisited_seed(
    grid: &GridMap,
    visited: &AHashSet<GridCoord>,
    from: GridCoord,
) -> Option<GridCoord> {
    let cols = grid.cols();
    let start = from.row * cols + from.col;
    (start..grid.rows() * cols)
        .map(|i| GridCoord::new(i / cols, i % cols))
        .find(|coord| grid.get(*coord) == Some(Cell::Empty) && !visited.contains(coord))
}

/// Builds a door's frame and the two faces that close it against its walls.
fn build_door(grid: &GridMap, coord: GridCoord, material: u32) -> Door {
    let (row, col) = (coord.row as i64, coord.col as i64);
    let orientation = if grid.is_solid_at(row + 1, col) {
        DoorOrientation::Horizontal
    } else {
        DoorOrientation::Vertical
    };

    let mut door = Door::new(coord, orientation);
    for direction in Direction::ALL {
        make_wall(direction, row, col, material, &mut door);
    }
    make_ceiling(row, col, material, &mut door);
    make_floor(row, col, material, &mut door);

    match orientation {
        DoorOrientation::Horizontal => {
            make_wall(Direction::North, row + 1, col, material, &mut door);
            make_wall(Direction::South, row - 1, col, material, &mut door);
        }
        DoorOrientation::Vertical => {
            make_wall(Direction::East, row, col - 1, material, &mut door);
            make_wall(Direction::West, row, col + 1, material, &mut door);
        }
    }
    door
}

/// Emits the visible wall faces around the room, then its floor and ceiling.
fn build_room_geometry(
    grid: &GridMap,
    exposure: &ExposureMask,
    layers: SurfaceLayers<'_>,
    settings: &PartitionSettings,
    builder: &mut RoomBuilder,
) {
    let RoomBuilder { room, floor, .. } = builder;
    for &coord in &room.boundary {
        let Some(Cell::Wall(id)) = grid.get(coord) else {
            continue;
        };
        for direction in Direction::ALL {
            if !exposure.is_exposed(coord, direction) {
                continue;
            }
            let faces_room = grid
                .neighbor(coord, direction)
                .is_some_and(|n| floor.contains(&n));
            if faces_room {
                make_wall(
                    direction,
                    coord.row as i64,
                    coord.col as i64,
                    id.saturating_sub(1),
                    &mut room.planes,
                );
            }
        }
    }

    for &coord in &room.floor {
        let (row, col) = (coord.row as i64, coord.col as i64);
        let floor_id = layers
            .floor
            .and_then(|layer| layer.get(coord))
            .unwrap_or(settings.default_floor_material);
        let ceiling_id = layers
            .ceiling
            .and_then(|layer| layer.get(coord))
            .unwrap_or(settings.default_ceiling_material);
        make_floor(row, col, floor_id.saturating_sub(1), &mut room.planes);
        make_ceiling(row, col, ceiling_id.saturating_sub(1), &mut room.planes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlight_core::level::RoomId;

    fn parse(text: &str) -> GridMap {
        GridMap::from_rows(rows_from_text(text)).unwrap()
    }

    fn rows_from_text(text: &str) -> Vec<Vec<Cell>> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|tok| match tok {
                        "d" => Cell::Door,
                        "0" => Cell::Empty,
                        n => Cell::Wall(n.parse().unwrap()),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_open_grid_is_one_room() {
        let grid = parse("0 0 0\n0 0 0\n0 0 0");
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        assert_eq!(level.rooms().len(), 1);
        assert_eq!(level.rooms()[0].floor.len(), 9);
        assert!(level.doors().is_empty());
        // No walls: one floor and one ceiling per cell.
        assert_eq!(level.rooms()[0].planes.len(), 18);
    }

    #[test]
    fn test_door_is_shared_between_rooms() {
        let grid = parse("0 d 0");
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        assert_eq!(level.rooms().len(), 2);
        assert_eq!(level.doors().len(), 1);
        assert_eq!(level.doors()[0].coordinate, GridCoord::new(0, 1));
        for room in level.rooms() {
            assert_eq!(room.floor.len(), 1);
            assert_eq!(room.doors, vec![DoorId(0)]);
        }
        assert_eq!(level.rooms()[0].floor, vec![GridCoord::new(0, 0)]);
        assert_eq!(level.rooms()[1].floor, vec![GridCoord::new(0, 2)]);
    }

    #[test]
    fn test_door_geometry() {
        let grid = parse("1 1 1 1 1\n1 0 d 0 1\n1 1 1 1 1");
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        let door = &level.doors()[0];
        assert_eq!(door.orientation, DoorOrientation::Horizontal);
        assert_eq!(door.planes.len(), 8);
        assert!(door.planes.iter().all(|p| p.material_index == 7));

        let grid = parse("1 0 1\n1 d 1\n1 0 1");
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        assert_eq!(level.doors()[0].orientation, DoorOrientation::Vertical);
        assert_eq!(level.doors()[0].planes.len(), 8);
    }

    #[test]
    fn test_door_on_the_last_row_is_vertical() {
        let grid = parse("0 1\n0 d");
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        assert_eq!(level.doors()[0].orientation, DoorOrientation::Vertical);
    }

    #[test]
    fn test_room_walls_face_only_their_own_floor() {
        // Two rooms split by a wall column with a door in it.
        let grid = parse("2 2 2 2 2\n2 0 3 0 2\n2 0 d 0 2\n2 2 2 2 2");
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        assert_eq!(level.rooms().len(), 2);
        let left = &level.rooms()[0];
        let right = &level.rooms()[1];
        assert_eq!(left.floor, vec![GridCoord::new(1, 1), GridCoord::new(2, 1)]);
        assert_eq!(right.floor, vec![GridCoord::new(1, 3), GridCoord::new(2, 3)]);

        // Left room: north 1, west 2, south 1, east 1 (the `3` block) = 5 walls.
        let walls = |room: &Room| room.planes.len() - 2 * room.floor.len();
        assert_eq!(walls(left), 5);
        assert_eq!(walls(right), 5);
        assert!(left.planes.iter().any(|p| p.material_index == 2));
        assert!(left.planes.iter().all(|p| p.center.x <= 2.0));
    }

    #[test]
    fn test_every_empty_cell_belongs_to_one_room() {
        let grid = parse(
            "1 1 1 1 1 1
             1 0 0 1 0 1
             1 0 1 d 0 1
             1 d 1 1 0 1
             1 0 0 1 1 1",
        );
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        let floors: usize = level.rooms().iter().map(|r| r.floor.len()).sum();
        let empty = grid.count(|c| c == Cell::Empty);
        let door_cells = grid.count(|c| c == Cell::Door);
        assert_eq!(floors, empty);
        assert_eq!(level.doors().len(), door_cells);

        let mut seen = AHashSet::new();
        for room in level.rooms() {
            for coord in &room.floor {
                assert!(seen.insert(*coord), "{coord} is in two rooms");
            }
        }
    }

    #[test]
    fn test_floor_and_ceiling_layers() {
        let grid = parse("0 0");
        let floor = MaterialLayer::from_rows(vec![vec![3, 4]]).unwrap();
        let layers = SurfaceLayers {
            floor: Some(&floor),
            ceiling: None,
        };
        let settings = PartitionSettings {
            default_ceiling_material: 6,
            ..PartitionSettings::default()
        };
        let level = partition_with_layers(&grid, layers, &settings).unwrap();
        let materials: Vec<u32> = level.rooms()[0]
            .planes
            .iter()
            .map(|p| p.material_index)
            .collect();
        assert_eq!(materials, vec![2, 5, 3, 5]);
    }

    #[test]
    fn test_mismatched_layer_is_rejected() {
        let grid = parse("0 0");
        let ceiling = MaterialLayer::from_rows(vec![vec![1], vec![1]]).unwrap();
        let layers = SurfaceLayers {
            floor: None,
            ceiling: Some(&ceiling),
        };
        let err = partition_with_layers(&grid, layers, &PartitionSettings::default()).unwrap_err();
        assert_eq!(
            err,
            LevelError::LayerMismatch {
                layer: "ceiling",
                expected: (1, 2),
                found: (2, 1),
            }
        );
    }

    #[test]
    fn test_seed_scan_resumes_after_previous_seed() {
        let grid = parse("0 1 0\n1 1 0");
        let mut visited = AHashSet::new();
        assert_eq!(
            find_unvisited_seed(&grid, &visited, GridCoord::new(0, 0)),
            Some(GridCoord::new(0, 0))
        );
        assert_eq!(
            find_unvisited_seed(&grid, &visited, GridCoord::new(0, 1)),
            Some(GridCoord::new(0, 2))
        );
        visited.insert(GridCoord::new(0, 2));
        assert_eq!(
            find_unvisited_seed(&grid, &visited, GridCoord::new(0, 1)),
            Some(GridCoord::new(1, 2))
        );
        visited.insert(GridCoord::new(1, 2));
        assert_eq!(find_unvisited_seed(&grid, &visited, GridCoord::new(0, 1)), None);
    }

    #[test]
    fn test_room_lists_have_no_repeats() {
        // Every floor cell is offered by up to four neighbors, every wall by up to two.
        let grid = parse("1 1 1 1\n1 0 0 1\n1 0 0 d\n1 1 1 1");
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        let room = &level.rooms()[0];
        assert_eq!(room.floor.len(), 4);
        assert_eq!(room.boundary.len(), 8);
        assert_eq!(room.doors, vec![DoorId(0)]);
    }

    #[test]
    fn test_large_open_grid_partitions_quickly() {
        let n = 300;
        let grid = GridMap::from_rows(vec![vec![Cell::Empty; n]; n]).unwrap();
        let start = std::time::Instant::now();
        let level = partition(&grid, &PartitionSettings::default()).unwrap();
        let elapsed = start.elapsed();

        assert_eq!(level.rooms().len(), 1);
        assert_eq!(level.rooms()[0].floor.len(), n * n);
        assert_eq!(level.rooms()[0].planes.len(), 2 * n * n);
        assert_eq!(level.room_at(GridCoord::new(n - 1, n - 1)), Some(RoomId(0)));
        assert!(
            elapsed < std::time::Duration::from_secs(3),
            "partitioning {n}x{n} took {elapsed:?}"
        );
    }

    #[test]
    fn test_partition_is_deterministic() {
        let grid = parse("0 d 0 1\n1 1 d 1\n0 0 0 0");
        let a = partition(&grid, &PartitionSettings::default()).unwrap();
        let b = partition(&grid, &PartitionSettings::default()).unwrap();
        assert_eq!(a, b);
    }
}

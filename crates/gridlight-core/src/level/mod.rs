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

//! The partitioned form of a grid map: rooms, the shared door arena, and the
//! wall exposure mask.
//!
//! A [`Level`] is produced once at load time. Rooms refer to doors through
//! [`DoorId`] indices into [`Level::doors`], so a door bordering two rooms is a
//! single object that both rooms point at. Cell lookups go through indexes
//! built once in [`Level::new`].

mod error;

pub use error::LevelError;

use crate::grid::{Direction, GridCoord};
use crate::scene::{Light, Plane, Sphere};
use ahash::AHashMap;
use std::fmt;

/// Index of a room inside [`Level::rooms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// Index of a door inside [`Level::doors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoorId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door#{}", self.0)
    }
}

/// Anything geometry can be appended to.
pub trait PlaneSink {
    /// The plane list new faces are pushed onto.
    fn planes_mut(&mut self) -> &mut Vec<Plane>;
}

impl PlaneSink for Vec<Plane> {
    fn planes_mut(&mut self) -> &mut Vec<Plane> {
        self
    }
}

/// How a door is set into its wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorOrientation {
    /// Walls above and below: the door is passed through along the X axis.
    Horizontal,
    /// Walls left and right: the door is passed through along the Y axis.
    Vertical,
}

/// A traversable cell shared by the rooms on either side of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    /// The door's grid cell.
    pub coordinate: GridCoord,
    /// How the door sits in its wall.
    pub orientation: DoorOrientation,
    /// Frame and flanking wall geometry.
    pub planes: Vec<Plane>,
}

impl Door {
    /// Creates a door with no geometry yet.
    pub fn new(coordinate: GridCoord, orientation: DoorOrientation) -> Self {
        Self {
            coordinate,
            orientation,
            planes: Vec::new(),
        }
    }
}

impl PlaneSink for Door {
    fn planes_mut(&mut self) -> &mut Vec<Plane> {
        &mut self.planes
    }
}

/// A maximal connected region of floor cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    /// Empty cells owned by this room, in discovery order.
    pub floor: Vec<GridCoord>,
    /// Wall cells bordering the room, in discovery order.
    pub boundary: Vec<GridCoord>,
    /// Wall, floor and ceiling geometry of the room itself.
    pub planes: Vec<Plane>,
    /// Doors bordering the room, in discovery order.
    pub doors: Vec<DoorId>,
    /// Spheres placed in the room by the level designer.
    pub spheres: Vec<Sphere>,
    /// Lights placed in the room by the level designer.
    pub lights: Vec<Light>,
}

impl Room {
    /// Creates an empty room.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaneSink for Room {
    fn planes_mut(&mut self) -> &mut Vec<Plane> {
        &mut self.planes
    }
}

/// Per-cell bitmask of wall faces that face open space.
///
/// Bits: 1 = north, 2 = east, 4 = south, 8 = west. Non-solid cells are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureMask {
    rows: usize,
    cols: usize,
    bits: Vec<u8>,
}

impl ExposureMask {
    /// Creates an all-zero mask of the given size.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![0; rows * cols],
        }
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the mask at `coord` (0 outside the mask).
    pub fn get(&self, coord: GridCoord) -> u8 {
        if coord.row < self.rows && coord.col < self.cols {
            self.bits[coord.row * self.cols + coord.col]
        } else {
            0
        }
    }

    /// Sets the mask at `coord`. Values are truncated to the low four bits.
    ///
    /// # Panics
    /// Panics if `coord` is outside the mask.
    pub fn set(&mut self, coord: GridCoord, bits: u8) {
        assert!(coord.row < self.rows && coord.col < self.cols);
        self.bits[coord.row * self.cols + coord.col] = bits & 0b1111;
    }

    /// Returns `true` if the face of `coord` in `direction` should be rendered.
    pub fn is_exposed(&self, coord: GridCoord, direction: Direction) -> bool {
        self.get(coord) & direction.bit() != 0
    }

    /// The mask as rows of integers, parallel to the grid.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.bits.chunks(self.cols.max(1)).map(|r| r.to_vec()).collect()
    }
}

/// Rooms, doors and the exposure mask derived from one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    rooms: Vec<Room>,
    doors: Vec<Door>,
    exposure: ExposureMask,
    floor_owner: AHashMap<GridCoord, RoomId>,
    door_index: AHashMap<GridCoord, DoorId>,
    door_rooms: Vec<Vec<RoomId>>,
}

impl Level {
    /// Assembles a level from its parts and indexes floor cells and doors.
    ///
    /// A floor cell listed by several rooms is owned by the first of them.
    pub fn new(rooms: Vec<Room>, doors: Vec<Door>, exposure: ExposureMask) -> Self {
        let mut floor_owner = AHashMap::with_capacity(rooms.iter().map(|r| r.floor.len()).sum());
        let mut door_rooms = vec![Vec::new(); doors.len()];
        for (i, room) in rooms.iter().enumerate() {
            for coord in &room.floor {
                floor_owner.entry(*coord).or_insert(RoomId(i));
            }
            for door in &room.doors {
                if let Some(sharing) = door_rooms.get_mut(door.0) {
                    if sharing.last() != Some(&RoomId(i)) {
                        sharing.push(RoomId(i));
                    }
                }
            }
        }

        let mut door_index = AHashMap::with_capacity(doors.len());
        for (i, door) in doors.iter().enumerate() {
            door_index.entry(door.coordinate).or_insert(DoorId(i));
        }

        Self {
            rooms,
            doors,
            exposure,
            floor_owner,
            door_index,
            door_rooms,
        }
    }

    /// All rooms in discovery order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The door arena.
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// The wall exposure mask.
    pub fn exposure(&self) -> &ExposureMask {
        &self.exposure
    }

    /// Looks up a room.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Looks up a room for editing its props.
    ///
    /// The cell indexes are not rebuilt, so `floor` and `doors` should be left
    /// as partitioned.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Looks up a door.
    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.0)
    }

    /// Iterates `(RoomId, &Room)` pairs.
    pub fn room_ids(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// The room owning the floor cell at `coord`, if any.
    pub fn room_at(&self, coord: GridCoord) -> Option<RoomId> {
        self.floor_owner.get(&coord).copied()
    }

    /// The door at `coord`, if any.
    pub fn door_at(&self, coord: GridCoord) -> Option<DoorId> {
        self.door_index.get(&coord).copied()
    }

    /// Every room that references `door`, in room order.
    pub fn rooms_sharing_door(&self, door: DoorId) -> Vec<RoomId> {
        self.door_rooms.get(door.0).cloned().unwrap_or_default()
    }

    /// Rooms reachable from `room` through one of its doors, without duplicates.
    pub fn neighbors(&self, room: RoomId) -> Vec<RoomId> {
        let Some(r) = self.room(room) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for door in &r.doors {
            let sharing = self.door_rooms.get(door.0).map(Vec::as_slice).unwrap_or_default();
            for &other in sharing {
                if other != room && !out.contains(&other) {
                    out.push(other);
                }
            }
        }
        out
    }

    /// Total number of planes owned by rooms and doors.
    pub fn plane_count(&self) -> usize {
        self.rooms.iter().map(|r| r.planes.len()).sum::<usize>()
            + self.doors.iter().map(|d| d.planes.len()).sum::<usize>()
    }
}

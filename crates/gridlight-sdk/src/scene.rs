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

//! The runtime scene: a partitioned level, its props, the active room set and
//! the viewer.

use crate::error::EngineError;
use gridlight_core::grid::GridCoord;
use gridlight_core::level::{Level, Room, RoomId};
use gridlight_core::renderer::{ObjectBuffer, ObjectCounts, PackError};
use gridlight_core::scene::{Camera, GlobalPrimitives, Light, Sphere};
use gridlight_lanes::pack_level;

/// Everything the renderer needs to know about the world.
///
/// Changes to what gets packed (the active room set or any prop list) set the
/// out-of-date flag. Moving the camera does not, since the viewer is uploaded
/// every frame anyway.
#[derive(Debug, Clone)]
pub struct Scene {
    level: Level,
    global: GlobalPrimitives,
    active: Vec<RoomId>,
    camera: Camera,
    out_of_date: bool,
}

impl Scene {
    /// Creates a scene with no active rooms. It starts out of date.
    pub fn new(level: Level, global: GlobalPrimitives) -> Self {
        Self {
            level,
            global,
            active: Vec::new(),
            camera: Camera::default(),
            out_of_date: true,
        }
    }

    /// The partitioned level.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Primitives packed regardless of the active set.
    pub fn global(&self) -> &GlobalPrimitives {
        &self.global
    }

    /// Rooms currently packed, in packing order.
    pub fn active_rooms(&self) -> &[RoomId] {
        &self.active
    }

    /// The viewer.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The viewer, for moving it.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Returns `true` if the object buffer must be repacked.
    pub fn is_dirty(&self) -> bool {
        self.out_of_date
    }

    /// Requests a repack on the next frame.
    pub fn mark_dirty(&mut self) {
        self.out_of_date = true;
    }

    /// Acknowledges that the packed buffer matches the scene.
    pub fn clear_dirty(&mut self) {
        self.out_of_date = false;
    }

    /// Replaces the active room set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownRoom`] if any id is outside the level. The
    /// active set is unchanged in that case.
    pub fn set_active_rooms(&mut self, rooms: Vec<RoomId>) -> Result<(), EngineError> {
        if let Some(bad) = rooms.iter().find(|id| self.level.room(**id).is_none()) {
            return Err(EngineError::UnknownRoom { room: bad.0 });
        }
        if rooms != self.active {
            self.active = rooms;
            self.mark_dirty();
        }
        Ok(())
    }

    /// Activates the room owning `coord` and every room sharing a door with it.
    ///
    /// Returns `false` and keeps the current set when no room owns `coord`,
    /// which is the case for door and wall cells.
    pub fn focus_on(&mut self, coord: GridCoord) -> bool {
        let Some(room) = self.level.room_at(coord) else {
            return false;
        };
        let mut rooms = vec![room];
        rooms.extend(self.level.neighbors(room));
        if rooms != self.active {
            log::debug!("Active rooms now {rooms:?}");
            self.active = rooms;
            self.mark_dirty();
        }
        true
    }

    /// Runs [`Scene::focus_on`] for the cell under the camera.
    pub fn focus_on_camera(&mut self) -> bool {
        let p = self.camera.position;
        if p.x < 0.0 || p.y < 0.0 {
            return false;
        }
        self.focus_on(GridCoord::new(p.y as usize, p.x as usize))
    }

    /// Adds a sphere that is always packed.
    pub fn add_global_sphere(&mut self, sphere: Sphere) {
        self.global.push(sphere);
        self.mark_dirty();
    }

    /// Adds a light that is always packed.
    pub fn add_global_light(&mut self, light: Light) {
        self.global.push(light);
        self.mark_dirty();
    }

    /// Adds a sphere to a room.
    pub fn add_room_sphere(&mut self, room: RoomId, sphere: Sphere) -> Result<(), EngineError> {
        self.room_props(room)?.spheres.push(sphere);
        self.mark_dirty();
        Ok(())
    }

    /// Adds a light to a room.
    pub fn add_room_light(&mut self, room: RoomId, light: Light) -> Result<(), EngineError> {
        self.room_props(room)?.lights.push(light);
        self.mark_dirty();
        Ok(())
    }

    /// Removes every sphere and light from a room.
    pub fn clear_room_props(&mut self, room: RoomId) -> Result<(), EngineError> {
        let props = self.room_props(room)?;
        props.spheres.clear();
        props.lights.clear();
        self.mark_dirty();
        Ok(())
    }

    /// Packs the global primitives and the active rooms into `buffer`.
    pub fn pack_into(&self, buffer: &mut ObjectBuffer) -> Result<ObjectCounts, PackError> {
        pack_level(buffer, &self.global, &self.level, &self.active)
    }

    fn room_props(&mut self, room: RoomId) -> Result<&mut Room, EngineError> {
        self.level
            .room_mut(room)
            .ok_or(EngineError::UnknownRoom { room: room.0 })
    }
}

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

//! Scene-update lane: flattens the visible part of a scene into the object buffer.
//!
//! The buffer is split into three contiguous regions: spheres, then planes,
//! then lights. Inside each region the global primitives come first, followed
//! by the active rooms in the order given. A room's planes are followed by the
//! planes of each of its doors, so a door shared by two active rooms is
//! written once per room.

use gridlight_core::level::{Door, Level, Room, RoomId};
use gridlight_core::renderer::{ObjectBuffer, ObjectCounts, ObjectSlot, PackError};
use gridlight_core::scene::{GlobalPrimitives, Primitive};

/// Writes `global` and `active_rooms` into `buffer` and returns the per-type counts.
///
/// Every call rewrites the whole buffer: slots after the last primitive are
/// zeroed, so packing the same scene twice yields identical bytes.
///
/// # Errors
///
/// Returns [`PackError::UnknownDoor`] when a room references a door that is not
/// in `doors`, and [`PackError::CapacityExceeded`] when the primitives do not
/// fit. In both cases `buffer` is left untouched.
pub fn pack(
    buffer: &mut ObjectBuffer,
    global: &GlobalPrimitives,
    active_rooms: &[&Room],
    doors: &[Door],
) -> Result<ObjectCounts, PackError> {
    let mut sphere_count = global.spheres.len();
    let mut plane_count = global.planes.len();
    let mut light_count = global.lights.len();
    for room in active_rooms {
        sphere_count += room.spheres.len();
        light_count += room.lights.len();
        plane_count += room.planes.len();
        for id in &room.doors {
            let door = doors
                .get(id.0)
                .ok_or(PackError::UnknownDoor { door: id.0 })?;
            plane_count += door.planes.len();
        }
    }

    let required = sphere_count + plane_count + light_count;
    if required > buffer.capacity() {
        log::warn!(
            "Scene needs {required} object slots but the buffer holds {}",
            buffer.capacity()
        );
        return Err(PackError::CapacityExceeded {
            required,
            capacity: buffer.capacity(),
        });
    }

    let mut cursor = 0;
    let mut emit = |primitive: Primitive| {
        buffer.write(cursor, ObjectSlot::from_primitive(&primitive));
        cursor += 1;
    };

    for sphere in global
        .spheres
        .iter()
        .chain(active_rooms.iter().flat_map(|r| r.spheres.iter()))
    {
        emit((*sphere).into());
    }

    for plane in &global.planes {
        emit((*plane).into());
    }
    for room in active_rooms {
        for plane in &room.planes {
            emit((*plane).into());
        }
        // Door ids were checked while counting.
        for door in room.doors.iter().filter_map(|id| doors.get(id.0)) {
            for plane in &door.planes {
                emit((*plane).into());
            }
        }
    }

    for light in global
        .lights
        .iter()
        .chain(active_rooms.iter().flat_map(|r| r.lights.iter()))
    {
        emit((*light).into());
    }

    buffer.clear_from(required);

    let counts = ObjectCounts::new(sphere_count as u32, plane_count as u32, light_count as u32);
    log::debug!(
        "Packed {} rooms: {} spheres, {} planes, {} lights",
        active_rooms.len(),
        counts.sphere_count,
        counts.plane_count,
        counts.light_count
    );
    Ok(counts)
}

/// Resolves `active` against `level` and packs the result.
///
/// # Errors
///
/// Returns [`PackError::UnknownRoom`] for an id outside the level, otherwise
/// the errors of [`pack`].
pub fn pack_level(
    buffer: &mut ObjectBuffer,
    global: &GlobalPrimitives,
    level: &Level,
    active: &[RoomId],
) -> Result<ObjectCounts, PackError> {
    let rooms = active
        .iter()
        .map(|id| level.room(*id).ok_or(PackError::UnknownRoom { room: id.0 }))
        .collect::<Result<Vec<_>, _>>()?;
    pack(buffer, global, &rooms, level.doors())
}

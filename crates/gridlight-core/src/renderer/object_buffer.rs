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

//! The fixed-capacity object buffer shared with the compute renderer.
//!
//! # Memory Layout
//!
//! The buffer holds [`OBJECT_CAPACITY`] slots of five `vec4<f32>` groups each
//! (20 floats, 80 bytes). A slot carries no type tag: the renderer knows the
//! type of slot `i` from the three counts alone, because the packer always
//! writes every sphere first, then every plane, then every light.
//!
//! ```text
//! Sphere: (cx cy cz radius) (r g b roughness) (- - - -)     (- - - -)              (- - - -)
//! Plane:  (cx cy cz tx)     (ty tz bx by)     (bz nx ny nz) (umin umax vmin vmax)  (material - - -)
//! Light:  (x y z strength)  (r g b -)         (- - - -)     (- - - -)              (- - - -)
//! ```
//!
//! Unused components are always zero.

use crate::scene::{Light, Plane, Primitive, Sphere};
use bytemuck::{Pod, Zeroable};

/// Number of object slots in the buffer. Part of the renderer contract.
pub const OBJECT_CAPACITY: usize = 1024;

/// Number of `f32` values in a single slot.
pub const FLOATS_PER_SLOT: usize = 20;

/// One 80-byte record of the object buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ObjectSlot {
    /// The five `vec4` groups of the record.
    pub groups: [[f32; 4]; 5],
}

impl ObjectSlot {
    /// An all-zero slot.
    pub const EMPTY: Self = Self {
        groups: [[0.0; 4]; 5],
    };

    /// Serializes any primitive into its slot layout.
    pub fn from_primitive(primitive: &Primitive) -> Self {
        match primitive {
            Primitive::Sphere(s) => s.into(),
            Primitive::Plane(p) => p.into(),
            Primitive::Light(l) => l.into(),
        }
    }

    /// Returns the slot as a flat array of 20 floats.
    pub fn as_floats(&self) -> &[f32; FLOATS_PER_SLOT] {
        bytemuck::cast_ref(&self.groups)
    }
}

impl Default for ObjectSlot {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<&Sphere> for ObjectSlot {
    fn from(s: &Sphere) -> Self {
        let mut slot = Self::EMPTY;
        slot.groups[0] = [s.center.x, s.center.y, s.center.z, s.radius];
        slot.groups[1] = [s.color.r, s.color.g, s.color.b, s.roughness];
        slot
    }
}

impl From<&Plane> for ObjectSlot {
    fn from(p: &Plane) -> Self {
        let mut slot = Self::EMPTY;
        slot.groups[0] = [p.center.x, p.center.y, p.center.z, p.tangent.x];
        slot.groups[1] = [p.tangent.y, p.tangent.z, p.bitangent.x, p.bitangent.y];
        slot.groups[2] = [p.bitangent.z, p.normal.x, p.normal.y, p.normal.z];
        slot.groups[3] = [p.u_min, p.u_max, p.v_min, p.v_max];
        slot.groups[4][0] = p.material_index as f32;
        slot
    }
}

impl From<&Light> for ObjectSlot {
    fn from(l: &Light) -> Self {
        let mut slot = Self::EMPTY;
        slot.groups[0] = [l.position.x, l.position.y, l.position.z, l.strength];
        slot.groups[1] = [l.color.r, l.color.g, l.color.b, 0.0];
        slot
    }
}

/// Per-type object counts handed to the renderer alongside the buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct ObjectCounts {
    /// Number of sphere slots, starting at slot 0.
    pub sphere_count: u32,
    /// Number of plane slots, starting right after the spheres.
    pub plane_count: u32,
    /// Number of light slots, starting right after the planes.
    pub light_count: u32,
    /// Padding for 16-byte alignment.
    pub _padding: u32,
}

impl ObjectCounts {
    /// Creates a new set of counts.
    pub const fn new(sphere_count: u32, plane_count: u32, light_count: u32) -> Self {
        Self {
            sphere_count,
            plane_count,
            light_count,
            _padding: 0,
        }
    }

    /// Total number of occupied slots.
    pub const fn total(&self) -> usize {
        self.sphere_count as usize + self.plane_count as usize + self.light_count as usize
    }

    /// Index of the first plane slot.
    pub const fn plane_offset(&self) -> usize {
        self.sphere_count as usize
    }

    /// Index of the first light slot.
    pub const fn light_offset(&self) -> usize {
        self.sphere_count as usize + self.plane_count as usize
    }
}

/// The CPU-side copy of the object buffer.
///
/// It always holds exactly [`OBJECT_CAPACITY`] slots so that it can be
/// uploaded in one bulk write.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBuffer {
    slots: Box<[ObjectSlot]>,
}

impl ObjectBuffer {
    /// Creates a zeroed buffer.
    pub fn new() -> Self {
        Self {
            slots: vec![ObjectSlot::EMPTY; OBJECT_CAPACITY].into_boxed_slice(),
        }
    }

    /// Number of slots (always [`OBJECT_CAPACITY`]).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot at `index`.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&ObjectSlot> {
        self.slots.get(index)
    }

    /// Returns every slot.
    #[inline]
    pub fn slots(&self) -> &[ObjectSlot] {
        &self.slots
    }

    /// Overwrites the slot at `index`.
    ///
    /// # Panics
    /// Panics if `index >= OBJECT_CAPACITY`. Callers check capacity up front.
    #[inline]
    pub fn write(&mut self, index: usize, slot: ObjectSlot) {
        self.slots[index] = slot;
    }

    /// Zeroes every slot from `start` to the end of the buffer.
    pub fn clear_from(&mut self, start: usize) {
        if let Some(tail) = self.slots.get_mut(start..) {
            tail.fill(ObjectSlot::EMPTY);
        }
    }

    /// The buffer viewed as a flat float array (`OBJECT_CAPACITY * 20` values).
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.slots)
    }

    /// The raw bytes to upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.slots)
    }
}

impl Default for ObjectBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rgb, Vec3};

    #[test]
    fn test_slot_is_twenty_floats() {
        assert_eq!(std::mem::size_of::<ObjectSlot>(), FLOATS_PER_SLOT * 4);
        assert_eq!(std::mem::size_of::<ObjectCounts>() % 16, 0);
    }

    #[test]
    fn test_buffer_byte_size() {
        let buffer = ObjectBuffer::new();
        assert_eq!(buffer.capacity(), OBJECT_CAPACITY);
        assert_eq!(buffer.as_bytes().len(), OBJECT_CAPACITY * FLOATS_PER_SLOT * 4);
        assert!(buffer.as_floats().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_sphere_layout() {
        let sphere = Sphere {
            center: Vec3::new(1.0, 2.0, 3.0),
            radius: 0.5,
            color: Rgb::new(0.1, 0.2, 0.3),
            roughness: 0.7,
        };
        let slot = ObjectSlot::from(&sphere);
        let f = slot.as_floats();
        assert_eq!(&f[0..8], &[1.0, 2.0, 3.0, 0.5, 0.1, 0.2, 0.3, 0.7]);
        assert!(f[8..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_plane_layout() {
        let plane = Plane {
            center: Vec3::new(1.0, 2.0, 3.0),
            tangent: Vec3::new(4.0, 5.0, 6.0),
            bitangent: Vec3::new(7.0, 8.0, 9.0),
            normal: Vec3::new(10.0, 11.0, 12.0),
            u_min: 13.0,
            u_max: 14.0,
            v_min: 15.0,
            v_max: 16.0,
            material_index: 17,
        };
        let f = *ObjectSlot::from(&plane).as_floats();
        let expected: Vec<f32> = (1..=17).map(|v| v as f32).collect();
        assert_eq!(&f[..17], expected.as_slice());
        assert_eq!(&f[17..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_light_layout() {
        let light = Light {
            position: Vec3::new(1.0, 2.0, 3.0),
            strength: 4.0,
            color: Rgb::new(0.5, 0.6, 0.7),
        };
        let f = *ObjectSlot::from_primitive(&light.into()).as_floats();
        assert_eq!(&f[0..8], &[1.0, 2.0, 3.0, 4.0, 0.5, 0.6, 0.7, 0.0]);
        assert!(f[8..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_count_offsets() {
        let counts = ObjectCounts::new(2, 5, 1);
        assert_eq!(counts.total(), 8);
        assert_eq!(counts.plane_offset(), 2);
        assert_eq!(counts.light_offset(), 7);
    }

    #[test]
    fn test_clear_from_zeroes_tail() {
        let mut buffer = ObjectBuffer::new();
        let mut slot = ObjectSlot::EMPTY;
        slot.groups[0][0] = 1.0;
        buffer.write(0, slot);
        buffer.write(1, slot);
        buffer.clear_from(1);
        assert_eq!(buffer.slot(0), Some(&slot));
        assert_eq!(buffer.slot(1), Some(&ObjectSlot::EMPTY));
        buffer.clear_from(OBJECT_CAPACITY + 5);
    }
}

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

//! Passive records describing the three kinds of object the renderer traces.

use crate::math::{Rgb, Vec3};
use serde::{Deserialize, Serialize};

/// A textured rectangle in 3D space.
///
/// `tangent`, `bitangent` and `normal` are unit vectors that are mutually
/// orthogonal. The rectangle spans `[u_min, u_max]` along the tangent and
/// `[v_min, v_max]` along the bitangent, measured from `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Center of the rectangle.
    pub center: Vec3,
    /// First in-plane axis.
    pub tangent: Vec3,
    /// Second in-plane axis.
    pub bitangent: Vec3,
    /// Outward-facing normal.
    pub normal: Vec3,
    /// Lower bound along the tangent.
    pub u_min: f32,
    /// Upper bound along the tangent.
    pub u_max: f32,
    /// Lower bound along the bitangent.
    pub v_min: f32,
    /// Upper bound along the bitangent.
    pub v_max: f32,
    /// Index into the renderer's material table.
    pub material_index: u32,
}

impl Plane {
    /// Creates a unit quad (`[-0.5, 0.5]` on both axes) with the given basis.
    pub const fn unit_quad(
        center: Vec3,
        tangent: Vec3,
        bitangent: Vec3,
        normal: Vec3,
        material_index: u32,
    ) -> Self {
        Self {
            center,
            tangent,
            bitangent,
            normal,
            u_min: -0.5,
            u_max: 0.5,
            v_min: -0.5,
            v_max: 0.5,
            material_index,
        }
    }
}

/// A sphere with a flat color and a roughness term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius, expected to be positive.
    pub radius: f32,
    /// Surface color.
    pub color: Rgb,
    /// Roughness in `[0, 1]`.
    pub roughness: f32,
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Position of the light.
    pub position: Vec3,
    /// Intensity multiplier.
    pub strength: f32,
    /// Emitted color.
    pub color: Rgb,
}

/// Primitives that are packed every frame regardless of which rooms are active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalPrimitives {
    /// Global spheres.
    pub spheres: Vec<Sphere>,
    /// Global planes.
    pub planes: Vec<Plane>,
    /// Global lights.
    pub lights: Vec<Light>,
}

impl GlobalPrimitives {
    /// Total number of primitives.
    pub fn len(&self) -> usize {
        self.spheres.len() + self.planes.len() + self.lights.len()
    }

    /// Returns `true` when there are no global primitives.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a primitive to the list matching its kind.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        match primitive.into() {
            Primitive::Sphere(s) => self.spheres.push(s),
            Primitive::Plane(p) => self.planes.push(p),
            Primitive::Light(l) => self.lights.push(l),
        }
    }
}

/// Any primitive the object buffer can hold.
///
/// The object buffer itself carries no per-slot type tag; the variant only
/// exists until a primitive is serialized into its slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// A sphere.
    Sphere(Sphere),
    /// A textured plane.
    Plane(Plane),
    /// A point light.
    Light(Light),
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Primitive::Plane(p)
    }
}

impl From<Light> for Primitive {
    fn from(l: Light) -> Self {
        Primitive::Light(l)
    }
}

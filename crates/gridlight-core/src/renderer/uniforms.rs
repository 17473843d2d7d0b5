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

//! Per-frame uniforms.

use crate::math::Vec3;

/// Camera basis read by the renderer every frame, independent of the object buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewerUniforms {
    /// Viewer position (xyz), with padding (w).
    pub position: [f32; 4],
    /// Forward direction (xyz), with padding (w).
    pub forwards: [f32; 4],
    /// Right direction (xyz), with padding (w).
    pub right: [f32; 4],
    /// Up direction (xyz), with padding (w).
    pub up: [f32; 4],
}

impl ViewerUniforms {
    /// Builds the uniforms from a position and an orthonormal basis.
    pub fn new(position: Vec3, forwards: Vec3, right: Vec3, up: Vec3) -> Self {
        let pad = |v: Vec3| [v.x, v.y, v.z, 0.0];
        Self {
            position: pad(position),
            forwards: pad(forwards),
            right: pad(right),
            up: pad(up),
        }
    }
}

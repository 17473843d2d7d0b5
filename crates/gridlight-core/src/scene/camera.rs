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

//! A first-person camera described by a position and two angles.

use crate::math::{degrees_to_radians, Vec3};
use crate::renderer::ViewerUniforms;
use serde::{Deserialize, Serialize};

/// The viewer.
///
/// `theta` is the yaw around the world Z axis and `phi` the pitch above the
/// floor plane, both in degrees. With `theta = 0` and `phi = 0` the camera
/// looks along +X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World-space position.
    pub position: Vec3,
    /// Yaw in degrees.
    pub theta: f32,
    /// Pitch in degrees.
    pub phi: f32,
}

impl Camera {
    /// Creates a camera at `position` looking along `theta`/`phi`.
    pub fn new(position: Vec3, theta: f32, phi: f32) -> Self {
        Self {
            position,
            theta,
            phi,
        }
    }

    /// The unit view direction.
    pub fn forwards(&self) -> Vec3 {
        let theta = degrees_to_radians(self.theta);
        let phi = degrees_to_radians(self.phi);
        Vec3::new(
            theta.cos() * phi.cos(),
            theta.sin() * phi.cos(),
            phi.sin(),
        )
    }

    /// Returns `(forwards, right, up)`.
    ///
    /// Looking straight up or down leaves `right` undefined; it collapses to
    /// zero in that case.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forwards = self.forwards();
        let right = forwards.cross(Vec3::Z).normalize();
        let up = right.cross(forwards);
        (forwards, right, up)
    }

    /// Moves the camera by `delta` in world space.
    pub fn translate(&mut self, delta: Vec3) {
        self.position = self.position + delta;
    }

    /// Adds to the yaw and pitch, clamping the pitch short of the poles.
    pub fn spin(&mut self, d_theta: f32, d_phi: f32) {
        self.theta = (self.theta + d_theta).rem_euclid(360.0);
        self.phi = (self.phi + d_phi).clamp(-89.0, 89.0);
    }

    /// Packs the viewer uniforms the renderer reads every frame.
    pub fn uniforms(&self) -> ViewerUniforms {
        let (forwards, right, up) = self.basis();
        ViewerUniforms::new(self.position, forwards, right, up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.5, 0.5, 0.5), 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_basis_is_axis_aligned() {
        let (f, r, u) = Camera::default().basis();
        assert_relative_eq!(f.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(r.y, -1.0, epsilon = 1e-6);
        assert_relative_eq!(u.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let cam = Camera::new(Vec3::ZERO, 37.0, 21.0);
        let (f, r, u) = cam.basis();
        assert_relative_eq!(f.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(r.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(u.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(f.dot(r), 0.0, epsilon = 1e-5);
        assert_relative_eq!(f.dot(u), 0.0, epsilon = 1e-5);
        assert_relative_eq!(r.dot(u), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_spin_clamps_pitch() {
        let mut cam = Camera::default();
        cam.spin(-30.0, 200.0);
        assert_eq!(cam.phi, 89.0);
        assert_eq!(cam.theta, 330.0);
    }
}

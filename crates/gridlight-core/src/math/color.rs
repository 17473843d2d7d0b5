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

//! Defines the `Rgb` color type stored in sphere and light records.

use serde::{Deserialize, Serialize};

/// A color with red, green and blue components, each expected in `[0, 1]`.
///
/// The renderer reads these values verbatim from the object buffer, so no
/// color-space conversion is applied here.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Rgb {
    /// The red component.
    pub r: f32,
    /// The green component.
    pub g: f32,
    /// The blue component.
    pub b: f32,
}

impl Rgb {
    /// Pure white (`[1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new color from its components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    /// Returns white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

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

//! The public-facing API of Gridlight.
//!
//! Load a [`LevelDescription`], turn it into a [`Scene`], and hand frames to a
//! [`FrameDriver`] wrapping your [`RenderBackend`].

#![warn(missing_docs)]

pub mod backend;
pub mod description;
pub mod driver;
pub mod error;
pub mod scene;

pub use backend::RenderBackend;
pub use description::{LevelDescription, RoomProps};
pub use driver::{FrameDriver, FrameReport};
pub use error::EngineError;
pub use scene::Scene;

/// The types most applications need.
pub mod prelude {
    pub use crate::{
        EngineError, FrameDriver, FrameReport, LevelDescription, RenderBackend, Scene,
    };
    pub use gridlight_core::grid::{Cell, GridCoord, GridMap};
    pub use gridlight_core::level::{DoorId, Level, RoomId};
    pub use gridlight_core::math::{Extent2D, Rgb, Vec3};
    pub use gridlight_core::renderer::{BackendError, ObjectCounts, ViewerUniforms};
    pub use gridlight_core::scene::{Camera, GlobalPrimitives, Light, Plane, Sphere};
    pub use gridlight_core::{PartitionSettings, RenderSettings};
}

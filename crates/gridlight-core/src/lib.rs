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

//! # Gridlight Core
//!
//! Foundational crate containing the math primitives, grid map types, scene
//! primitives, and the fixed GPU object layout shared by every other
//! Gridlight crate.

#![warn(missing_docs)]

pub mod grid;
pub mod level;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use grid::{Cell, Direction, GridCoord, GridMap, MaterialLayer};
pub use level::{
    Door, DoorId, DoorOrientation, ExposureMask, Level, LevelError, PlaneSink, Room, RoomId,
};
pub use settings::{PartitionSettings, RenderSettings};

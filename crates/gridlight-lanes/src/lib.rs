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

//! # Gridlight Lanes
//!
//! The hot paths of Gridlight. `level_lane` turns a tagged grid into rooms,
//! doors and their geometry once per level load. `pack_lane` flattens the
//! active part of a scene into the fixed object buffer whenever the scene
//! changes.

#![warn(missing_docs)]

pub mod level_lane;
pub mod pack_lane;

pub use level_lane::{compute_exposure_mask, partition};
pub use pack_lane::{pack, pack_level};

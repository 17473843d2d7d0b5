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

//! Load-time lane: grid partitioning and geometry synthesis.

mod exposure;
mod partition;
pub mod synthesizer;

pub use exposure::compute_exposure_mask;
pub use partition::{find_unvisited_seed, partition, partition_with_layers, SurfaceLayers};
pub use synthesizer::{make_ceiling, make_floor, make_wall};

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

//! # Gridlight Control
//!
//! Keeps the frame rate near its target by moving along a precomputed ladder
//! of render resolutions. The [`FrameRateMeter`] turns frame times into
//! frames-per-second samples, and [`AdaptiveResolution`] reacts to each sample.

#![warn(missing_docs)]

pub mod adaptive;
pub mod ladder;
pub mod meter;

pub use adaptive::AdaptiveResolution;
pub use ladder::ResolutionLadder;
pub use meter::{FrameRateMeter, RingBuffer};

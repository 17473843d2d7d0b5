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

//! Moves along the resolution ladder to keep the frame rate near its target.

use crate::ladder::ResolutionLadder;
use gridlight_core::math::Extent2D;
use gridlight_core::RenderSettings;

/// Picks the active ladder level from observed frame rates.
///
/// The controller starts at the coarsest level and sharpens while frames are
/// comfortably fast. Inside the `target ± margin` band the level holds still.
#[derive(Debug, Clone)]
pub struct AdaptiveResolution {
    ladder: ResolutionLadder,
    target_frame_rate: f32,
    margin: f32,
    level: usize,
}

impl AdaptiveResolution {
    /// Creates a controller over `ladder`, starting at its coarsest level.
    pub fn new(ladder: ResolutionLadder, target_frame_rate: f32, margin: f32) -> Self {
        let level = ladder.coarsest();
        Self {
            ladder,
            target_frame_rate,
            margin,
            level,
        }
    }

    /// Creates a controller from render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(
            ResolutionLadder::new(settings.native_resolution),
            settings.target_frame_rate,
            settings.frame_rate_margin,
        )
    }

    /// Feeds one frame-rate sample and returns the active `(level, extent)`.
    pub fn adapt(&mut self, fps: f32) -> (usize, Extent2D) {
        let previous = self.level;
        if fps > self.target_frame_rate + self.margin && self.level > 0 {
            self.level -= 1;
        } else if fps < self.target_frame_rate - self.margin && self.level < self.ladder.coarsest() {
            self.level += 1;
        }

        if self.level != previous {
            let extent = self.extent();
            log::info!(
                "{fps:.1} fps: resolution level {previous} -> {} ({}x{})",
                self.level,
                extent.width,
                extent.height
            );
        }
        self.current()
    }

    /// The active `(level, extent)`.
    pub fn current(&self) -> (usize, Extent2D) {
        (self.level, self.extent())
    }

    /// The active level index. 0 is native.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The active render extent.
    pub fn extent(&self) -> Extent2D {
        self.ladder.levels()[self.level]
    }

    /// The ladder being walked.
    pub fn ladder(&self) -> &ResolutionLadder {
        &self.ladder
    }
}

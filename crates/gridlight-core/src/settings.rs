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

//! Tunable settings for level partitioning and frame rendering.

use crate::math::Extent2D;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings that drive the render loop and its adaptive resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// The finest resolution of the ladder, usually the window size.
    pub native_resolution: Extent2D,
    /// The frame rate the adaptive controller aims for.
    pub target_frame_rate: f32,
    /// Tolerance around the target before the resolution is changed.
    pub frame_rate_margin: f32,
    /// Length in milliseconds of one frame-rate sampling window.
    pub sample_window_ms: u64,
}

impl RenderSettings {
    /// The sampling window as a [`Duration`].
    pub fn sample_window(&self) -> Duration {
        Duration::from_millis(self.sample_window_ms)
    }

    /// Replaces nonsensical values with their defaults, logging each fix.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.native_resolution.width == 0 || self.native_resolution.height == 0 {
            log::warn!(
                "Native resolution {}x{} is degenerate, using {}x{}",
                self.native_resolution.width,
                self.native_resolution.height,
                defaults.native_resolution.width,
                defaults.native_resolution.height
            );
            self.native_resolution = defaults.native_resolution;
        }
        if self.target_frame_rate.is_nan() || self.target_frame_rate <= 0.0 {
            log::warn!(
                "Target frame rate {} is not positive, using {}",
                self.target_frame_rate,
                defaults.target_frame_rate
            );
            self.target_frame_rate = defaults.target_frame_rate;
        }
        if self.frame_rate_margin.is_nan() || self.frame_rate_margin < 0.0 {
            log::warn!(
                "Frame rate margin {} is negative, using {}",
                self.frame_rate_margin,
                defaults.frame_rate_margin
            );
            self.frame_rate_margin = defaults.frame_rate_margin;
        }
        if self.sample_window_ms == 0 {
            log::warn!(
                "Sample window of 0 ms, using {} ms",
                defaults.sample_window_ms
            );
            self.sample_window_ms = defaults.sample_window_ms;
        }
        self
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            native_resolution: Extent2D::new(800, 600),
            target_frame_rate: 60.0,
            frame_rate_margin: 10.0,
            sample_window_ms: 1000,
        }
    }
}

/// Settings used while turning a grid into rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionSettings {
    /// Material index of every door frame face.
    pub door_material: u32,
    /// One-based floor material id used when no floor layer is given.
    pub default_floor_material: u32,
    /// One-based ceiling material id used when no ceiling layer is given.
    pub default_ceiling_material: u32,
}

impl Default for PartitionSettings {
    fn default() -> Self {
        Self {
            door_material: 7,
            default_floor_material: 1,
            default_ceiling_material: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_settings_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.native_resolution, Extent2D::new(800, 600));
        assert_eq!(settings.sample_window(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{ "target_frame_rate": 30.0 }"#).unwrap();
        assert_eq!(settings.target_frame_rate, 30.0);
        assert_eq!(settings.frame_rate_margin, 10.0);

        let partition: PartitionSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(partition, PartitionSettings::default());
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let settings = RenderSettings {
            native_resolution: Extent2D::new(0, 600),
            target_frame_rate: -5.0,
            frame_rate_margin: f32::NAN,
            sample_window_ms: 0,
        }
        .sanitized();
        assert_eq!(settings, RenderSettings::default());
    }
}

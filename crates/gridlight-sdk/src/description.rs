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

//! On-disk level descriptions.
//!
//! A level is authored as JSON:
//!
//! ```json
//! {
//!   "grid": [[1, 1, 1], [1, 0, 1], [1, 1, 1]],
//!   "floor": [[0, 2, 0], [0, 2, 0], [0, 2, 0]],
//!   "globals": { "lights": [{ "position": {"x": 1.5, "y": 1.5, "z": 0.9}, "strength": 1.0, "color": {"r": 1.0, "g": 1.0, "b": 1.0} }] },
//!   "rooms": [{ "at": {"row": 1, "col": 1}, "spheres": [] }]
//! }
//! ```
//!
//! Room props are anchored to one of the room's floor cells rather than to a
//! room index, since indices follow from the traversal order.

use crate::error::EngineError;
use crate::scene::Scene;
use anyhow::Context;
use gridlight_core::grid::{GridCoord, GridMap, MaterialLayer};
use gridlight_core::scene::{Camera, GlobalPrimitives, Light, Sphere};
use gridlight_core::{PartitionSettings, RenderSettings};
use gridlight_lanes::level_lane::{partition_with_layers, SurfaceLayers};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Props placed in whichever room owns the cell `at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomProps {
    /// A floor cell of the target room.
    pub at: GridCoord,
    /// Spheres to add.
    #[serde(default)]
    pub spheres: Vec<Sphere>,
    /// Lights to add.
    #[serde(default)]
    pub lights: Vec<Light>,
}

/// A complete level as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescription {
    /// The tagged grid.
    pub grid: GridMap,
    /// Optional per-cell floor material ids.
    #[serde(default)]
    pub floor: Option<MaterialLayer>,
    /// Optional per-cell ceiling material ids.
    #[serde(default)]
    pub ceiling: Option<MaterialLayer>,
    /// Primitives packed regardless of the active rooms.
    #[serde(default)]
    pub globals: GlobalPrimitives,
    /// Per-room props.
    #[serde(default)]
    pub rooms: Vec<RoomProps>,
    /// Starting viewer. Defaults to the center of cell (0, 0).
    #[serde(default)]
    pub camera: Option<Camera>,
    /// Partitioning settings.
    #[serde(default)]
    pub partition: PartitionSettings,
    /// Render loop settings.
    #[serde(default)]
    pub render: RenderSettings,
}

impl LevelDescription {
    /// Parses a description from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads and parses a description file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read level file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse level file {}", path.display()))
    }

    /// Partitions the grid, places the props and sets up the camera.
    ///
    /// The camera's room and its neighbors start out active.
    pub fn build_scene(&self) -> Result<Scene, EngineError> {
        let layers = SurfaceLayers {
            floor: self.floor.as_ref(),
            ceiling: self.ceiling.as_ref(),
        };
        let level = partition_with_layers(&self.grid, layers, &self.partition)?;
        let mut scene = Scene::new(level, self.globals.clone());

        for props in &self.rooms {
            let room = scene
                .level()
                .room_at(props.at)
                .ok_or(EngineError::NoRoomAt { coord: props.at })?;
            for sphere in &props.spheres {
                scene.add_room_sphere(room, *sphere)?;
            }
            for light in &props.lights {
                scene.add_room_light(room, *light)?;
            }
        }

        if let Some(camera) = self.camera {
            *scene.camera_mut() = camera;
        }
        if !scene.focus_on_camera() {
            log::warn!("The camera does not start inside a room; no rooms are active");
        }
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlight_core::level::RoomId;
    use gridlight_core::LevelError;

    const TWO_ROOMS: &str = r#"{
        "grid": [
            [1, 1, 1, 1, 1],
            [1, 0, "d", 0, 1],
            [1, 1, 1, 1, 1]
        ],
        "rooms": [
            {
                "at": { "row": 1, "col": 3 },
                "spheres": [
                    {
                        "center": { "x": 3.5, "y": 1.5, "z": 0.3 },
                        "radius": 0.3,
                        "color": { "r": 0.9, "g": 0.1, "b": 0.1 },
                        "roughness": 0.2
                    }
                ]
            }
        ],
        "camera": { "position": { "x": 1.5, "y": 1.5, "z": 0.5 }, "theta": 0.0, "phi": 0.0 }
    }"#;

    #[test]
    fn test_build_scene_from_json() {
        let description = LevelDescription::from_json(TWO_ROOMS).unwrap();
        assert_eq!(description.partition, PartitionSettings::default());

        let scene = description.build_scene().unwrap();
        assert_eq!(scene.level().rooms().len(), 2);
        assert_eq!(scene.level().rooms()[1].spheres.len(), 1);
        assert_eq!(scene.active_rooms(), &[RoomId(0), RoomId(1)]);
        assert!(scene.is_dirty());
    }

    #[test]
    fn test_props_on_a_wall_are_rejected() {
        let mut description = LevelDescription::from_json(TWO_ROOMS).unwrap();
        description.rooms[0].at = GridCoord::new(0, 0);
        assert_eq!(
            description.build_scene().unwrap_err(),
            EngineError::NoRoomAt {
                coord: GridCoord::new(0, 0)
            }
        );
    }

    #[test]
    fn test_ragged_grid_fails_to_parse() {
        let err = LevelDescription::from_json(r#"{ "grid": [[0, 0], [0]] }"#).unwrap_err();
        assert!(err.to_string().contains("Row 1 has 1 cells"));
    }

    #[test]
    fn test_mismatched_layer_fails_to_build() {
        let mut description = LevelDescription::from_json(TWO_ROOMS).unwrap();
        description.floor = Some(MaterialLayer::from_rows(vec![vec![1]]).unwrap());
        assert!(matches!(
            description.build_scene(),
            Err(EngineError::Level(LevelError::LayerMismatch { layer: "floor", .. }))
        ));
    }
}

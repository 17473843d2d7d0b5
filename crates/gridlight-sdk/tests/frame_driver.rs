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

use gridlight_sdk::prelude::*;
use std::time::Duration;

#[derive(Debug, Default)]
struct RecordingBackend {
    targets: Vec<Extent2D>,
    uploads: Vec<ObjectCounts>,
    last_bytes: Vec<u8>,
    viewers: usize,
    dispatches: Vec<(usize, Extent2D)>,
    fail_uploads: bool,
}

impl RenderBackend for RecordingBackend {
    fn create_targets(&mut self, extents: &[Extent2D]) -> Result<(), BackendError> {
        self.targets = extents.to_vec();
        Ok(())
    }

    fn upload_objects(&mut self, bytes: &[u8], counts: ObjectCounts) -> Result<(), BackendError> {
        if self.fail_uploads {
            return Err(BackendError::UploadFailed("device lost".into()));
        }
        self.last_bytes = bytes.to_vec();
        self.uploads.push(counts);
        Ok(())
    }

    fn set_viewer(&mut self, _viewer: &ViewerUniforms) -> Result<(), BackendError> {
        self.viewers += 1;
        Ok(())
    }

    fn dispatch(&mut self, level: usize, extent: Extent2D) -> Result<(), BackendError> {
        if level >= self.targets.len() {
            return Err(BackendError::MissingTarget { level });
        }
        self.dispatches.push((level, extent));
        Ok(())
    }
}

const LEVEL: &str = r#"{
    "grid": [
        [1, 1, 1, 1, 1, 1, 1],
        [1, 0, 0, "d", 0, 0, 1],
        [1, 0, 0, 1, 0, 0, 1],
        [1, 1, 1, 1, 1, 1, 1]
    ],
    "globals": {
        "lights": [
            { "position": { "x": 3.5, "y": 2.0, "z": 0.9 }, "strength": 2.0, "color": { "r": 1.0, "g": 0.9, "b": 0.8 } }
        ]
    },
    "camera": { "position": { "x": 1.5, "y": 1.5, "z": 0.5 }, "theta": 0.0, "phi": 0.0 },
    "render": { "native_resolution": { "width": 320, "height": 240 }, "sample_window_ms": 100 }
}"#;

fn setup() -> (Scene, FrameDriver<RecordingBackend>) {
    let description = LevelDescription::from_json(LEVEL).unwrap();
    let scene = description.build_scene().unwrap();
    let driver = FrameDriver::new(RecordingBackend::default(), &description.render).unwrap();
    (scene, driver)
}

#[test]
fn packs_only_when_dirty() {
    let (mut scene, mut driver) = setup();

    let first = driver.render_frame(&mut scene).unwrap();
    assert!(first.repacked);
    assert!(!scene.is_dirty());
    assert_eq!(first.counts.light_count, 1);
    // Both rooms are active and each packs the shared door.
    assert_eq!(first.counts.plane_count as usize, scene.level().plane_count() + 8);

    let second = driver.render_frame(&mut scene).unwrap();
    assert!(!second.repacked);
    assert_eq!(second.counts, first.counts);

    let backend = driver.backend();
    assert_eq!(backend.uploads.len(), 1);
    assert_eq!(backend.viewers, 2);
    assert_eq!(backend.dispatches.len(), 2);
    assert_eq!(backend.last_bytes, driver.buffer().as_bytes());
}

#[test]
fn prop_changes_trigger_a_repack() {
    let (mut scene, mut driver) = setup();
    driver.render_frame(&mut scene).unwrap();

    scene.add_global_sphere(Sphere {
        center: Vec3::new(4.5, 1.5, 0.25),
        radius: 0.25,
        color: Rgb::new(0.2, 0.4, 0.8),
        roughness: 0.6,
    });
    let report = driver.render_frame(&mut scene).unwrap();
    assert!(report.repacked);
    assert_eq!(report.counts.sphere_count, 1);
    assert_eq!(driver.backend().uploads.len(), 2);
}

#[test]
fn failed_upload_keeps_the_scene_dirty() {
    let (mut scene, mut driver) = setup();
    driver.backend_mut().fail_uploads = true;
    let err = driver.render_frame(&mut scene).unwrap_err();
    assert!(matches!(err, EngineError::Backend(BackendError::UploadFailed(_))));
    assert!(scene.is_dirty());

    driver.backend_mut().fail_uploads = false;
    assert!(driver.render_frame(&mut scene).unwrap().repacked);
}

#[test]
fn resolution_follows_frame_rate() {
    let (mut scene, mut driver) = setup();
    let targets = driver.backend().targets.clone();
    assert_eq!(targets[0], Extent2D::new(320, 240));
    assert_eq!(driver.resolution().0, targets.len() - 1);

    // Fast frames sharpen one level per 100 ms window.
    let mut changes = 0;
    for _ in 0..100 {
        driver.render_frame(&mut scene).unwrap();
        if driver.end_frame(Duration::from_millis(5)).is_some() {
            changes += 1;
        }
    }
    assert_eq!(changes, 5);
    assert_eq!(driver.resolution().0, targets.len() - 1 - 5);
    let (level, extent) = *driver.backend().dispatches.last().unwrap();
    assert_eq!(extent, targets[level]);
}

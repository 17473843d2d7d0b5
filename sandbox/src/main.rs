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

// Gridlight Sandbox
// Headless demo: walks the camera through a level and drives a simulated renderer.

use std::time::Duration;

use anyhow::{Context, Result};
use gridlight_sdk::prelude::*;

const DEMO_LEVEL: &str = include_str!("../levels/demo.json");
const FRAMES: usize = 1200;

/// A stand-in for a GPU backend that logs what it would do and fakes frame times.
#[derive(Default)]
struct LoggingBackend {
    targets: Vec<Extent2D>,
    occupied_slots: usize,
    current: Extent2D,
}

impl LoggingBackend {
    /// Fixed overhead plus a cost per traced pixel and occupied slot.
    fn simulated_frame_time(&self) -> Duration {
        let pixels = self.current.area() as f64;
        let per_pixel = 1.0e-7 * (1.0 + self.occupied_slots as f64 / 64.0);
        Duration::from_secs_f64(0.002 + pixels * per_pixel)
    }
}

impl RenderBackend for LoggingBackend {
    fn create_targets(&mut self, extents: &[Extent2D]) -> Result<(), BackendError> {
        for (level, extent) in extents.iter().enumerate() {
            log::debug!("Target {level}: {}x{}", extent.width, extent.height);
        }
        self.targets = extents.to_vec();
        Ok(())
    }

    fn upload_objects(&mut self, bytes: &[u8], counts: ObjectCounts) -> Result<(), BackendError> {
        let slots: &[[f32; 20]] = bytemuck::try_cast_slice(bytes)
            .map_err(|e| BackendError::UploadFailed(e.to_string()))?;
        self.occupied_slots = slots
            .iter()
            .take_while(|slot| slot.iter().any(|v| *v != 0.0))
            .count();
        log::info!(
            "Upload: {} spheres, {} planes, {} lights ({} of {} slots in use)",
            counts.sphere_count,
            counts.plane_count,
            counts.light_count,
            counts.total(),
            slots.len()
        );
        Ok(())
    }

    fn set_viewer(&mut self, _viewer: &ViewerUniforms) -> Result<(), BackendError> {
        Ok(())
    }

    fn dispatch(&mut self, level: usize, extent: Extent2D) -> Result<(), BackendError> {
        if level >= self.targets.len() {
            return Err(BackendError::MissingTarget { level });
        }
        self.current = extent;
        Ok(())
    }
}

fn load_description() -> Result<LevelDescription> {
    match std::env::args().nth(1) {
        Some(path) => LevelDescription::from_path(&path),
        None => LevelDescription::from_json(DEMO_LEVEL).context("Built-in demo level is invalid"),
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let description = load_description()?;
    let mut scene = description
        .build_scene()
        .context("Failed to build the scene")?;
    let mut driver = FrameDriver::new(LoggingBackend::default(), &description.render)
        .context("Failed to create the frame driver")?;

    let cols = scene.level().exposure().dimensions().1 as f32;
    let step = Vec3::new(0.01, 0.0, 0.0);
    for _ in 0..FRAMES {
        {
            let camera = scene.camera_mut();
            camera.translate(step);
            camera.spin(0.3, 0.0);
            if camera.position.x > cols - 1.5 {
                camera.position.x = 1.5;
            }
        }
        scene.focus_on_camera();

        driver.render_frame(&mut scene)?;
        let frame_time = driver.backend().simulated_frame_time();
        if let Some((level, extent)) = driver.end_frame(frame_time) {
            log::debug!("Now rendering level {level} at {}x{}", extent.width, extent.height);
        }
    }

    let (level, extent) = driver.resolution();
    let history = driver.meter().history();
    log::info!(
        "{} frames, settled at level {level} ({}x{}), {:.1} fps average, {:.1} fps worst",
        driver.frames(),
        extent.width,
        extent.height,
        history.average(),
        history.min()
    );
    Ok(())
}

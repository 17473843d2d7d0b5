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

//! Drives one backend frame by frame.

use crate::backend::RenderBackend;
use crate::error::EngineError;
use crate::scene::Scene;
use gridlight_control::{AdaptiveResolution, FrameRateMeter};
use gridlight_core::math::Extent2D;
use gridlight_core::renderer::{ObjectBuffer, ObjectCounts};
use gridlight_core::RenderSettings;
use std::time::Duration;

/// What happened during one call to [`FrameDriver::render_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// `true` if the object buffer was repacked and uploaded.
    pub repacked: bool,
    /// Counts currently held by the backend.
    pub counts: ObjectCounts,
    /// Resolution level the frame was dispatched at.
    pub level: usize,
    /// Extent of that level.
    pub extent: Extent2D,
}

/// Owns the object buffer and the resolution controller for one backend.
pub struct FrameDriver<B: RenderBackend> {
    backend: B,
    buffer: ObjectBuffer,
    counts: ObjectCounts,
    controller: AdaptiveResolution,
    meter: FrameRateMeter,
    frames: u64,
}

impl<B: RenderBackend> FrameDriver<B> {
    /// Creates a driver and lets the backend allocate one target per ladder level.
    pub fn new(mut backend: B, settings: &RenderSettings) -> Result<Self, EngineError> {
        let settings = settings.clone().sanitized();
        let controller = AdaptiveResolution::from_settings(&settings);
        backend.create_targets(controller.ladder().levels())?;
        log::info!(
            "Frame driver ready: {} resolution levels from {}x{}, starting at level {}",
            controller.ladder().len(),
            settings.native_resolution.width,
            settings.native_resolution.height,
            controller.level()
        );
        Ok(Self {
            backend,
            buffer: ObjectBuffer::new(),
            counts: ObjectCounts::default(),
            controller,
            meter: FrameRateMeter::new(settings.sample_window()),
            frames: 0,
        })
    }

    /// Renders one frame of `scene`.
    ///
    /// The viewer is uploaded every frame. The object buffer is repacked and
    /// uploaded only when the scene is out of date, and the flag is cleared
    /// once the upload succeeded.
    pub fn render_frame(&mut self, scene: &mut Scene) -> Result<FrameReport, EngineError> {
        self.backend.set_viewer(&scene.camera().uniforms())?;

        let repacked = scene.is_dirty();
        if repacked {
            let counts = scene.pack_into(&mut self.buffer)?;
            self.backend.upload_objects(self.buffer.as_bytes(), counts)?;
            self.counts = counts;
            scene.clear_dirty();
        }

        let (level, extent) = self.controller.current();
        self.backend.dispatch(level, extent)?;
        self.frames += 1;

        Ok(FrameReport {
            repacked,
            counts: self.counts,
            level,
            extent,
        })
    }

    /// Reports how long the last frame took and adapts the resolution.
    ///
    /// Returns the new `(level, extent)` whenever a sampling window closed.
    pub fn end_frame(&mut self, frame_time: Duration) -> Option<(usize, Extent2D)> {
        let fps = self.meter.record(frame_time)?;
        log::debug!("{fps:.1} fps over the last window");
        Some(self.controller.adapt(fps))
    }

    /// Counts last uploaded to the backend.
    pub fn counts(&self) -> ObjectCounts {
        self.counts
    }

    /// The CPU copy of the object buffer.
    pub fn buffer(&self) -> &ObjectBuffer {
        &self.buffer
    }

    /// The active `(level, extent)`.
    pub fn resolution(&self) -> (usize, Extent2D) {
        self.controller.current()
    }

    /// The frame-rate meter.
    pub fn meter(&self) -> &FrameRateMeter {
        &self.meter
    }

    /// Number of frames dispatched so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the driver and returns the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

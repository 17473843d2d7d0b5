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

//! The contract between the frame driver and a GPU implementation.

use gridlight_core::math::Extent2D;
use gridlight_core::renderer::{BackendError, ObjectCounts, ViewerUniforms};

/// A renderer that traces the packed object buffer.
///
/// Implementations own every GPU resource. The driver calls
/// [`RenderBackend::create_targets`] once, then each frame calls
/// [`RenderBackend::set_viewer`], optionally [`RenderBackend::upload_objects`],
/// and finally [`RenderBackend::dispatch`].
pub trait RenderBackend {
    /// Allocates one output target per resolution level, finest first.
    fn create_targets(&mut self, extents: &[Extent2D]) -> Result<(), BackendError> {
        let _ = extents;
        Ok(())
    }

    /// Replaces the object buffer contents and the per-type counts.
    ///
    /// `bytes` always covers the whole buffer.
    fn upload_objects(&mut self, bytes: &[u8], counts: ObjectCounts) -> Result<(), BackendError>;

    /// Updates the viewer uniforms for the coming dispatch.
    fn set_viewer(&mut self, viewer: &ViewerUniforms) -> Result<(), BackendError>;

    /// Traces one frame into the target of resolution `level`.
    fn dispatch(&mut self, level: usize, extent: Extent2D) -> Result<(), BackendError>;
}

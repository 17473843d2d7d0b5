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

//! Renderer-facing contracts: the object buffer wire layout, the per-frame
//! uniforms, and the errors raised at the renderer boundary.

pub mod error;
mod object_buffer;
mod uniforms;

pub use error::{BackendError, PackError};
pub use object_buffer::{ObjectBuffer, ObjectCounts, ObjectSlot, FLOATS_PER_SLOT, OBJECT_CAPACITY};
pub use uniforms::ViewerUniforms;

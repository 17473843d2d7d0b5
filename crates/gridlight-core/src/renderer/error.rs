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

//! Defines the error types raised at the packing and renderer boundaries.

use std::fmt;

/// An error raised while serializing the scene into the object buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// The scene holds more primitives than the buffer has slots.
    ///
    /// The buffer is left untouched when this is returned.
    CapacityExceeded {
        /// Number of slots the scene would need.
        required: usize,
        /// Number of slots available.
        capacity: usize,
    },
    /// An active room id does not exist in the level.
    UnknownRoom {
        /// The offending room index.
        room: usize,
    },
    /// A room references a door id that does not exist in the level.
    UnknownDoor {
        /// The offending door index.
        door: usize,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::CapacityExceeded { required, capacity } => write!(
                f,
                "Scene needs {required} object slots but the buffer only holds {capacity}"
            ),
            PackError::UnknownRoom { room } => write!(f, "Active room {room} does not exist"),
            PackError::UnknownDoor { door } => write!(f, "Door {door} does not exist"),
        }
    }
}

impl std::error::Error for PackError {}

/// An error reported by a rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The bulk upload of the object buffer failed.
    UploadFailed(String),
    /// The compute dispatch for the frame failed.
    DispatchFailed(String),
    /// The backend has no output target for the requested resolution level.
    MissingTarget {
        /// The requested level index.
        level: usize,
    },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::UploadFailed(msg) => write!(f, "Object buffer upload failed: {msg}"),
            BackendError::DispatchFailed(msg) => write!(f, "Render dispatch failed: {msg}"),
            BackendError::MissingTarget { level } => {
                write!(f, "No output target for resolution level {level}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_error_display() {
        let err = PackError::CapacityExceeded {
            required: 1030,
            capacity: 1024,
        };
        assert_eq!(
            format!("{err}"),
            "Scene needs 1030 object slots but the buffer only holds 1024"
        );
    }

    #[test]
    fn backend_error_display() {
        let err = BackendError::MissingTarget { level: 3 };
        assert_eq!(format!("{err}"), "No output target for resolution level 3");
    }
}

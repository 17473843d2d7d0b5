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

//! The top-level error type of the SDK.

use gridlight_core::grid::GridCoord;
use gridlight_core::level::LevelError;
use gridlight_core::renderer::{BackendError, PackError};
use std::fmt;

/// Any error raised while building or rendering a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The level could not be partitioned.
    Level(LevelError),
    /// The scene could not be packed into the object buffer.
    Pack(PackError),
    /// The rendering backend failed.
    Backend(BackendError),
    /// A room index is outside the level.
    UnknownRoom {
        /// The offending room index.
        room: usize,
    },
    /// Room props were placed on a cell that belongs to no room.
    NoRoomAt {
        /// The cell the props were placed on.
        coord: GridCoord,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Level(err) => write!(f, "Level error: {err}"),
            EngineError::Pack(err) => write!(f, "Packing error: {err}"),
            EngineError::Backend(err) => write!(f, "Backend error: {err}"),
            EngineError::UnknownRoom { room } => write!(f, "Room {room} does not exist"),
            EngineError::NoRoomAt { coord } => write!(f, "No room owns the floor cell {coord}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Level(err) => Some(err),
            EngineError::Pack(err) => Some(err),
            EngineError::Backend(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LevelError> for EngineError {
    fn from(err: LevelError) -> Self {
        EngineError::Level(err)
    }
}

impl From<PackError> for EngineError {
    fn from(err: PackError) -> Self {
        EngineError::Pack(err)
    }
}

impl From<BackendError> for EngineError {
    fn from(err: BackendError) -> Self {
        EngineError::Backend(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_wrapping_keeps_the_source() {
        let err: EngineError = PackError::CapacityExceeded {
            required: 1100,
            capacity: 1024,
        }
        .into();
        assert_eq!(
            format!("{err}"),
            "Packing error: Scene needs 1100 object slots but the buffer only holds 1024"
        );
        assert!(err.source().is_some());
        assert!(EngineError::UnknownRoom { room: 4 }.source().is_none());
    }
}

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

//! Defines the errors raised while validating and partitioning a level.

use std::fmt;

/// An error raised while building a grid or partitioning it into rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The grid has no rows or no columns.
    EmptyGrid,
    /// A row's length differs from the first row's.
    RaggedGrid {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A material layer does not have the same dimensions as the grid.
    LayerMismatch {
        /// Which layer was rejected (e.g. `"floor"`).
        layer: &'static str,
        /// The grid's `(rows, cols)`.
        expected: (usize, usize),
        /// The layer's `(rows, cols)`.
        found: (usize, usize),
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::EmptyGrid => write!(f, "The grid has no cells"),
            LevelError::RaggedGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {row} has {found} cells but the grid is {expected} cells wide"
            ),
            LevelError::LayerMismatch {
                layer,
                expected,
                found,
            } => write!(
                f,
                "The {layer} layer is {}x{} but the grid is {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for LevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_error_display() {
        let err = LevelError::RaggedGrid {
            row: 2,
            expected: 5,
            found: 4,
        };
        assert_eq!(
            format!("{err}"),
            "Row 2 has 4 cells but the grid is 5 cells wide"
        );

        let err = LevelError::LayerMismatch {
            layer: "floor",
            expected: (3, 4),
            found: (3, 3),
        };
        assert_eq!(
            format!("{err}"),
            "The floor layer is 3x3 but the grid is 3x4"
        );
    }
}

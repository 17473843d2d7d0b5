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

//! Tagged grid maps: the level-authoring input that the partitioner consumes.
//!
//! A grid is a rectangular array of [`Cell`]s. It is serialized as a JSON array
//! of rows in which every cell is `0` (empty floor), a positive integer (solid
//! wall, the value is its material id) or the string `"d"` (door).

use crate::level::LevelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The string marker used for door cells in serialized grids.
pub const DOOR_MARKER: &str = "d";

/// One cell of a tagged grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub enum Cell {
    /// Traversable floor that has not been assigned to a room yet.
    Empty,
    /// A solid wall block carrying a one-based material id.
    Wall(u32),
    /// A traversable cell shared by the rooms on either side of it.
    Door,
}

impl Cell {
    /// Returns `true` for wall blocks.
    #[inline]
    pub const fn is_solid(&self) -> bool {
        matches!(self, Cell::Wall(_))
    }

    /// Returns `true` for cells the flood fill may walk through.
    #[inline]
    pub const fn is_traversable(&self) -> bool {
        !self.is_solid()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "0"),
            Cell::Wall(id) => write!(f, "{id}"),
            Cell::Door => write!(f, "{DOOR_MARKER}"),
        }
    }
}

/// The on-disk shape of a cell before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Id(u32),
    Marker(String),
}

impl TryFrom<RawCell> for Cell {
    type Error = String;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        match raw {
            RawCell::Id(0) => Ok(Cell::Empty),
            RawCell::Id(id) => Ok(Cell::Wall(id)),
            RawCell::Marker(m) if m == DOOR_MARKER => Ok(Cell::Door),
            RawCell::Marker(m) => Err(format!("unknown cell marker '{m}'")),
        }
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => RawCell::Id(0),
            Cell::Wall(id) => RawCell::Id(id),
            Cell::Door => RawCell::Marker(DOOR_MARKER.to_string()),
        }
    }
}

/// A `(row, col)` position inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index, growing southwards.
    pub row: usize,
    /// Column index, growing eastwards.
    pub col: usize,
}

impl GridCoord {
    /// Creates a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal faces of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards `row - 1`.
    North,
    /// Towards `col + 1`.
    East,
    /// Towards `row + 1`.
    South,
    /// Towards `col - 1`.
    West,
}

impl Direction {
    /// All directions in exposure-bit order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The bit this face occupies in an exposure mask.
    #[inline]
    pub const fn bit(&self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 4,
            Direction::West => 8,
        }
    }

    /// The `(row, col)` step towards the neighbor on this side.
    #[inline]
    pub const fn offset(&self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// A validated rectangular grid of [`Cell`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct GridMap {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Builds a grid from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::EmptyGrid`] when there are no rows or no columns and
    /// [`LevelError::RaggedGrid`] when a row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, LevelError> {
        let cols = check_rectangular(&rows)?;
        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `coord`, or `None` when it lies outside the grid.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<Cell> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(self.cells[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    /// Returns the cell at a signed position, or `None` when it lies outside the grid.
    #[inline]
    pub fn get_signed(&self, row: i64, col: i64) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(GridCoord::new(row as usize, col as usize))
    }

    /// Returns `true` when the signed position is inside the grid and holds a wall.
    ///
    /// Positions outside the grid are never solid.
    #[inline]
    pub fn is_solid_at(&self, row: i64, col: i64) -> bool {
        self.get_signed(row, col).is_some_and(|c| c.is_solid())
    }

    /// Returns the in-grid neighbor of `coord` in `direction`.
    pub fn neighbor(&self, coord: GridCoord, direction: Direction) -> Option<GridCoord> {
        let (dr, dc) = direction.offset();
        let row = coord.row as i64 + dr;
        let col = coord.col as i64 + dc;
        self.get_signed(row, col)
            .map(|_| GridCoord::new(row as usize, col as usize))
    }

    /// Iterates every coordinate in row-major order (top-to-bottom, left-to-right).
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| GridCoord::new(row, col)))
    }

    /// Counts the cells matching `predicate`.
    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| predicate(**c)).count()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for GridMap {
    type Error = LevelError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<GridMap> for Vec<Vec<Cell>> {
    fn from(grid: GridMap) -> Self {
        grid.cells.chunks(grid.cols).map(|r| r.to_vec()).collect()
    }
}

/// A per-cell layer of one-based material ids, parallel to a [`GridMap`].
///
/// Levels use these layers to give floors and ceilings their own materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct MaterialLayer {
    rows: usize,
    cols: usize,
    ids: Vec<u32>,
}

impl MaterialLayer {
    /// Builds a layer from its rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, LevelError> {
        let cols = check_rectangular(&rows)?;
        let row_count = rows.len();
        Ok(Self {
            rows: row_count,
            cols,
            ids: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the material id at `coord`, or `None` outside the layer.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<u32> {
        (coord.row < self.rows && coord.col < self.cols)
            .then(|| self.ids[coord.row * self.cols + coord.col])
    }
}

impl TryFrom<Vec<Vec<u32>>> for MaterialLayer {
    type Error = LevelError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<MaterialLayer> for Vec<Vec<u32>> {
    fn from(layer: MaterialLayer) -> Self {
        layer.ids.chunks(layer.cols).map(|r| r.to_vec()).collect()
    }
}

fn check_rectangular<T>(rows: &[Vec<T>]) -> Result<usize, LevelError> {
    let cols = rows.first().map(Vec::len).unwrap_or(0);
    if cols == 0 {
        return Err(LevelError::EmptyGrid);
    }
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, len)| *len != cols)
    {
        return Err(LevelError::RaggedGrid {
            row,
            expected: cols,
            found,
        });
    }
    Ok(cols)
}

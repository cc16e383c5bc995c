//! Room tile grids
//!
//! A room is a 16x16 grid of tile ids, stored flat in row-major order.
//! Json and yaml write it as 16 rows of 16 ids.

use super::Id;
use serde::{Deserialize, Serialize};

pub const ROOM_SIZE: usize = 16;
pub const ROOM_CELLS: usize = ROOM_SIZE * ROOM_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("expected 256 cells, found {0}")]
    CellCount(usize),
    #[error("row {row}: expected 16 cells, found {width}")]
    RowWidth { row: usize, width: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Id>>", into = "Vec<Vec<Id>>")]
pub struct RoomGrid(Vec<Id>);

impl RoomGrid {
    /// A grid referencing tile 0 everywhere.
    pub fn empty() -> Self {
        RoomGrid(vec![0; ROOM_CELLS])
    }

    pub fn from_cells(cells: Vec<Id>) -> Result<Self, GridError> {
        if cells.len() != ROOM_CELLS {
            return Err(GridError::CellCount(cells.len()));
        }
        Ok(RoomGrid(cells))
    }

    pub fn cells(&self) -> &[Id] {
        &self.0
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Id> {
        (x < ROOM_SIZE && y < ROOM_SIZE).then(|| self.0[x + y * ROOM_SIZE])
    }

    /// Copy of this grid with one cell changed. Out of range coordinates are ignored.
    pub fn with_cell(mut self, x: usize, y: usize, tile: Id) -> Self {
        if x < ROOM_SIZE && y < ROOM_SIZE {
            self.0[x + y * ROOM_SIZE] = tile;
        }
        self
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Id]> {
        self.0.chunks(ROOM_SIZE)
    }

    /// Whether any cell references the given tile.
    pub fn uses_tile(&self, tile: Id) -> bool {
        self.0.contains(&tile)
    }
}

impl Default for RoomGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Vec<Id>>> for RoomGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Id>>) -> Result<Self, Self::Error> {
        if rows.len() != ROOM_SIZE {
            return Err(GridError::CellCount(rows.iter().map(Vec::len).sum()));
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != ROOM_SIZE)
        {
            return Err(GridError::RowWidth {
                row,
                width: cells.len(),
            });
        }
        RoomGrid::from_cells(rows.into_iter().flatten().collect())
    }
}

impl From<RoomGrid> for Vec<Vec<Id>> {
    fn from(grid: RoomGrid) -> Self {
        grid.rows().map(<[Id]>::to_vec).collect()
    }
}

#![no_std]

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod geometry;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord2,
}

impl GridConfig {
    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new((size_x, size_y): Coord2) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        Self::new_unchecked((size_x, size_y))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new_unchecked((3, 3))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlaceOutcome {
    NoChange,
    Placed,
    Completed,
}

impl PlaceOutcome {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        use PlaceOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Completed => true,
        }
    }
}

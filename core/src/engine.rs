use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board-level state for one round: the cell grid, whose turn it is, and how
/// many cells have been filled so far.
///
/// Reset and restart both rebuild the engine through [`BoardEngine::new`];
/// there is no in-place reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    config: GridConfig,
    grid: Array2<CellState>,
    active_mark: Mark,
    filled_count: Saturating<CellCount>,
}

impl BoardEngine {
    pub fn new(config: GridConfig, start_mark: Mark) -> Self {
        Self {
            grid: Array2::default(config.size.to_nd_index()),
            config,
            active_mark: start_mark,
            filled_count: Saturating(0),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.grid[coords.to_nd_index()]
    }

    /// The mark the next accepted placement will write.
    pub fn active_mark(&self) -> Mark {
        self.active_mark
    }

    pub fn filled_count(&self) -> CellCount {
        self.filled_count.0
    }

    /// The round-complete signal: every cell is filled. No winner or loser is
    /// computed.
    pub fn is_complete(&self) -> bool {
        self.filled_count.0 == self.total_cells()
    }

    /// Writes the active mark into the cell at `coords` and flips the turn.
    ///
    /// Already-marked cells are a `NoChange` no-op; the placement that fills
    /// the last cell reports `Completed`.
    pub fn place(&mut self, coords: Coord2) -> Result<PlaceOutcome> {
        use CellState::*;
        use PlaceOutcome::*;

        let coords = self.validate_coords(coords)?;
        self.check_open()?;

        Ok(match self.grid[coords.to_nd_index()] {
            Marked(_) => NoChange,
            Empty => {
                self.grid[coords.to_nd_index()] = Marked(self.active_mark);
                log::debug!("cell {:?} marked {:?}", coords, self.active_mark);
                self.active_mark = self.active_mark.other();
                self.filled_count += 1;
                if self.is_complete() {
                    Completed
                } else {
                    Placed
                }
            }
        })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.config.size;
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn check_open(&self) -> Result<()> {
        if self.is_complete() {
            Err(GameError::RoundOver)
        } else {
            Ok(())
        }
    }
}

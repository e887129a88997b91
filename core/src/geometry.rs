use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2, GridConfig, Px};

/// Pixel layout of the board: each cell occupies `cell_size` pixels and cell
/// origins repeat every `pitch()` pixels, leaving a `padding` gutter between
/// cells and around the board edge.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardMetrics {
    pub cell_size: Px,
    pub padding: Px,
}

impl BoardMetrics {
    pub const fn new_unchecked(cell_size: Px, padding: Px) -> Self {
        Self { cell_size, padding }
    }

    pub fn new(cell_size: Px, padding: Px) -> Self {
        Self::new_unchecked(cell_size.max(1), padding)
    }

    /// Distance between adjacent cell origins, gutter included.
    pub const fn pitch(&self) -> Px {
        self.cell_size + self.padding
    }

    /// Width and height of the shared drawable surface, with a trailing gutter
    /// so the board is framed on all sides.
    pub fn surface_size(&self, config: &GridConfig) -> (Px, Px) {
        let (cols, rows) = config.size;
        (
            Px::from(cols) * self.pitch() + self.padding,
            Px::from(rows) * self.pitch() + self.padding,
        )
    }

    /// Pixel origin of a cell on the shared surface.
    pub fn cell_origin(&self, (x, y): Coord2) -> (Px, Px) {
        (
            Px::from(x) * self.pitch() + self.padding,
            Px::from(y) * self.pitch() + self.padding,
        )
    }

    /// Resolves raw pointer coordinates to the cell under them.
    ///
    /// Returns `None` for pointer positions in the padding gutter (on either
    /// axis) and for positions beyond the grid, so callers can treat both as
    /// a plain no-op.
    pub fn hit_test(&self, config: &GridConfig, x: i32, y: i32) -> Option<Coord2> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as Px, y as Px);

        let pitch = self.pitch();
        if x % pitch < self.padding || y % pitch < self.padding {
            return None;
        }

        let (cols, rows) = config.size;
        let cell_x = x / pitch;
        let cell_y = y / pitch;
        if cell_x >= Px::from(cols) || cell_y >= Px::from(rows) {
            return None;
        }

        Some((cell_x as Coord, cell_y as Coord))
    }
}

impl Default for BoardMetrics {
    fn default() -> Self {
        Self::new_unchecked(100, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> BoardMetrics {
        BoardMetrics::default()
    }

    fn config() -> GridConfig {
        GridConfig::default()
    }

    #[test]
    fn default_layout_matches_the_classic_board() {
        let m = metrics();
        assert_eq!(m.pitch(), 120);
        assert_eq!(m.surface_size(&config()), (380, 380));
        assert_eq!(m.cell_origin((0, 0)), (20, 20));
        assert_eq!(m.cell_origin((2, 1)), (260, 140));
    }

    #[test]
    fn hit_test_resolves_every_cell_deterministically() {
        let (m, c) = (metrics(), config());
        for cell_y in 0..3 {
            for cell_x in 0..3 {
                let (ox, oy) = m.cell_origin((cell_x, cell_y));
                // first and last pixel of the playable span
                for (px, py) in [
                    (ox, oy),
                    (ox + m.cell_size - 1, oy + m.cell_size - 1),
                    (ox + 50, oy + 50),
                ] {
                    assert_eq!(
                        m.hit_test(&c, px as i32, py as i32),
                        Some((cell_x, cell_y))
                    );
                }
            }
        }
    }

    #[test]
    fn gutter_positions_resolve_to_no_cell() {
        let (m, c) = (metrics(), config());
        // leading gutter, inter-cell gutter on each axis, trailing gutter
        assert_eq!(m.hit_test(&c, 10, 50), None);
        assert_eq!(m.hit_test(&c, 50, 10), None);
        assert_eq!(m.hit_test(&c, 125, 50), None);
        assert_eq!(m.hit_test(&c, 50, 125), None);
        assert_eq!(m.hit_test(&c, 365, 50), None);
        assert_eq!(m.hit_test(&c, 19, 19), None);
    }

    #[test]
    fn positions_beyond_the_grid_resolve_to_no_cell() {
        let (m, c) = (metrics(), config());
        assert_eq!(m.hit_test(&c, -1, 50), None);
        assert_eq!(m.hit_test(&c, 50, -7), None);
        assert_eq!(m.hit_test(&c, 500, 50), None);
        assert_eq!(m.hit_test(&c, 50, 500), None);
    }

    #[test]
    fn resolved_cells_are_always_in_range() {
        let (m, c) = (metrics(), config());
        let (cols, rows) = c.size;
        for x in 0..400 {
            for y in 0..400 {
                if let Some((cell_x, cell_y)) = m.hit_test(&c, x, y) {
                    assert!(cell_x < cols);
                    assert!(cell_y < rows);
                }
            }
        }
    }
}

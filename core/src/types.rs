/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for filled-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional grid coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Pixel distance on the drawable surface.
pub type Px = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

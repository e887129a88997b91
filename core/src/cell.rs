use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::GameError;

/// One of the two marks a player writes into a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Nought,
    Cross,
}

impl Mark {
    /// The mark of the other player.
    pub const fn other(self) -> Self {
        match self {
            Self::Nought => Self::Cross,
            Self::Cross => Self::Nought,
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Nought => "O",
            Self::Cross => "X",
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::Nought
    }
}

impl FromStr for Mark {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("nought") || name.eq_ignore_ascii_case("o") {
            Ok(Self::Nought)
        } else if name.eq_ignore_ascii_case("cross") || name.eq_ignore_ascii_case("x") {
            Ok(Self::Cross)
        } else {
            Err(GameError::UnknownMark)
        }
    }
}

/// Canonical per-cell state stored by the board engine.
///
/// Within a round a cell only ever moves Empty -> Marked; the whole grid is
/// rebuilt on reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Marked(Mark),
}

impl CellState {
    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Marked(_))
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips_between_the_two_marks() {
        assert_eq!(Mark::Nought.other(), Mark::Cross);
        assert_eq!(Mark::Cross.other(), Mark::Nought);
    }

    #[test]
    fn mark_names_parse_case_insensitively() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::Cross));
        assert_eq!("CROSS".parse::<Mark>(), Ok(Mark::Cross));
        assert_eq!("o".parse::<Mark>(), Ok(Mark::Nought));
        assert_eq!("Nought".parse::<Mark>(), Ok(Mark::Nought));
        assert_eq!("b".parse::<Mark>(), Err(GameError::UnknownMark));
    }

    #[test]
    fn empty_is_the_default_and_not_marked() {
        assert_eq!(CellState::default(), CellState::Empty);
        assert!(!CellState::Empty.is_marked());
        assert!(CellState::Marked(Mark::Cross).is_marked());
        assert_eq!(CellState::Marked(Mark::Cross).mark(), Some(Mark::Cross));
    }
}

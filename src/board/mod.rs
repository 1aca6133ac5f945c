pub mod fen;

pub use fen::{EMPTY_FEN, START_FEN, parse_rank};

use crate::core::*;

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board representation
///
/// An 8×8 grid of [`Cell`]s, addressed by [`Square`]. Produced fresh by
/// [`Board::from_fen`] and immutable afterwards; the renderer consumes it
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; Square::NUM],
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for Board {
    fn default() -> Board {
        Board::from_fen(START_FEN).unwrap()
    }
}

impl Board {
    /// Returns a board with every cell empty
    pub fn empty() -> Board {
        Board {
            cells: [Cell::Empty; Square::NUM],
        }
    }

    /// Returns the cell on a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use diagram::{Board, Cell, Square};
    ///
    /// let board = Board::default();
    /// assert_eq!(board.on(Square::E1), Cell::WhiteKing);
    /// assert_eq!(board.on(Square::E4), Cell::Empty);
    /// ```
    #[inline]
    pub fn on(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank as u8 + 1)?;

            for file in File::iter() {
                let cell = self.on(Square::from_parts(file, rank));
                write!(f, " {} |", cell.code().unwrap_or(' '))?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Fen: {}", self.fen())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

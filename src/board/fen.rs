use super::Board;

use crate::core::*;

/******************************************\
|==========================================|
|            Useful fen strings            |
|==========================================|
\******************************************/

/// Starting position, piece placement only.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Board with no pieces.
pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8";

/// Separator between rank descriptors.
const DELIMITER: char = '/';

/******************************************\
|==========================================|
|                Parse Rank                |
|==========================================|
\******************************************/

/// Parses one rank descriptor into 8 cells.
///
/// The descriptor is scanned left to right with a file cursor: piece codes
/// fill one file each, digits `1`-`8` skip that many empty files. The cursor
/// must land on exactly 8 files when the text runs out. A digit may exactly
/// fill the files remaining in the rank.
///
/// ## Examples
///
/// ```
/// use diagram::board::parse_rank;
/// use diagram::core::Cell;
///
/// let row = parse_rank("r3k2r").unwrap();
/// assert_eq!(row[0], Cell::BlackRook);
/// assert_eq!(row[1], Cell::Empty);
/// assert_eq!(row[4], Cell::BlackKing);
/// assert!(parse_rank("r3k2").is_err());
/// ```
pub fn parse_rank(text: &str) -> Result<[Cell; File::NUM], ParseError> {
    let mut cells = [Cell::Empty; File::NUM];
    let mut file = 0;

    for (i, c) in text.chars().enumerate() {
        if file >= File::NUM {
            return Err(ParseError::EndOfRank {
                rest: text.chars().skip(i).collect(),
            });
        }

        match c {
            '1'..='8' => {
                let run = c as usize - '0' as usize;

                if file + run > File::NUM {
                    return Err(ParseError::InvalidDigit {
                        digit: run,
                        position: i,
                        left: File::NUM - file,
                    });
                }

                // The row starts out empty, so a run of empties is a skip.
                file += run;
            }

            piece_char => match Cell::from_code(piece_char) {
                Some(cell) => {
                    cells[file] = cell;
                    file += 1;
                }
                None => {
                    return Err(ParseError::Position {
                        position: i,
                        source: Box::new(ParseError::UnknownPiece(piece_char)),
                    });
                }
            },
        }
    }

    if file < File::NUM {
        return Err(ParseError::IncompleteRank);
    }

    Ok(cells)
}

/******************************************\
|==========================================|
|               Parse Board                |
|==========================================|
\******************************************/

impl Board {
    /// Parses a full position string of exactly 8 `/`-delimited rank
    /// descriptors, the topmost rank (rank 8) first.
    ///
    /// Splitting keeps empty segments, so `"8/8/8/8/8/8/8/"` still counts 8
    /// ranks and fails inside rank validation rather than as a miscount.
    /// Rank-level failures are wrapped with the board rank number they
    /// occurred in; the first failure aborts the parse.
    ///
    /// ## Examples
    ///
    /// ```
    /// use diagram::{Board, Cell, Square};
    /// use diagram::board::START_FEN;
    ///
    /// let board = Board::from_fen(START_FEN).unwrap();
    /// assert_eq!(board.on(Square::A8), Cell::BlackRook);
    /// assert!(Board::from_fen("8/8/8").is_err());
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let ranks: Vec<&str> = fen.split(DELIMITER).collect();

        if ranks.len() < Rank::NUM {
            return Err(ParseError::InsufficientRanks {
                found: ranks.len(),
                expected: Rank::NUM,
            });
        }
        if ranks.len() > Rank::NUM {
            return Err(ParseError::TooManyRanks {
                found: ranks.len(),
                expected: Rank::NUM,
            });
        }

        let mut board = Board::empty();

        // Segment 0 describes rank 8, the topmost displayed row.
        for (rank, text) in Rank::iter().rev().zip(ranks) {
            let row = parse_rank(text).map_err(|source| ParseError::Rank {
                rank: rank.index() + 1,
                source: Box::new(source),
            })?;

            for (file, cell) in File::iter().zip(row) {
                board.cells[Square::from_parts(file, rank).index()] = cell;
            }
        }

        Ok(board)
    }

    /// Re-encodes the board as a position string, rank 8 first, with
    /// run-length digits for empty stretches. Inverse of [`Board::from_fen`].
    pub fn fen(&self) -> String {
        let mut fen = String::new();

        for rank in Rank::iter().rev() {
            let mut empty_count = 0;
            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                match self.on(square).code() {
                    Some(code) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(code);
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank != Rank::Rank1 {
                fen.push(DELIMITER);
            }
        }

        fen
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    const TRICKY_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

    #[test]
    fn test_parse_start_fen() {
        let board = Board::from_fen(START_FEN).unwrap();

        assert_eq!(board.on(Square::A1), Cell::WhiteRook);
        assert_eq!(board.on(Square::E1), Cell::WhiteKing);
        assert_eq!(board.on(Square::E2), Cell::WhitePawn);
        assert_eq!(board.on(Square::E4), Cell::Empty);
        assert_eq!(board.on(Square::D8), Cell::BlackQueen);
        assert_eq!(board.on(Square::E7), Cell::BlackPawn);
        assert_eq!(board.on(Square::H8), Cell::BlackRook);
        assert_eq!(board.fen(), START_FEN);
    }

    #[test]
    fn test_parse_empty_fen() {
        let board = Board::from_fen(EMPTY_FEN).unwrap();
        assert_eq!(board, Board::empty());
        assert_eq!(board.fen(), EMPTY_FEN);
    }

    #[test]
    fn test_parse_tricky_fen() {
        let board = Board::from_fen(TRICKY_FEN).unwrap();

        assert_eq!(board.on(Square::A8), Cell::BlackRook);
        assert_eq!(board.on(Square::E8), Cell::BlackKing);
        assert_eq!(board.on(Square::F3), Cell::WhiteQueen);
        assert_eq!(board.on(Square::C3), Cell::WhiteKnight);
        assert_eq!(board.on(Square::H3), Cell::BlackPawn);
        assert_eq!(board.fen(), TRICKY_FEN);
    }

    #[test]
    fn test_parse_rank_exact_fill_digits() {
        // 4 + 4 lands exactly on 8 files, which is legal.
        let row = parse_rank("44").unwrap();
        assert_eq!(row, [Cell::Empty; File::NUM]);

        assert_eq!(parse_rank("8").unwrap(), [Cell::Empty; File::NUM]);
        assert_eq!(parse_rank("p7").unwrap()[0], Cell::BlackPawn);
    }

    #[test]
    fn test_parse_rank_digit_overflow() {
        assert_eq!(
            parse_rank("45"),
            Err(ParseError::InvalidDigit {
                digit: 5,
                position: 1,
                left: 4,
            })
        );

        assert_eq!(
            parse_rank("pppp6"),
            Err(ParseError::InvalidDigit {
                digit: 6,
                position: 4,
                left: 4,
            })
        );
    }

    #[test]
    fn test_parse_rank_end_of_rank() {
        assert_eq!(
            parse_rank("KQRBNPkqq"),
            Err(ParseError::EndOfRank {
                rest: "q".to_string(),
            })
        );

        // All files consumed by a digit; every trailing character is excess.
        assert_eq!(
            parse_rank("8pp"),
            Err(ParseError::EndOfRank {
                rest: "pp".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rank_incomplete() {
        assert_eq!(parse_rank(""), Err(ParseError::IncompleteRank));
        assert_eq!(parse_rank("7"), Err(ParseError::IncompleteRank));
        assert_eq!(parse_rank("rnb"), Err(ParseError::IncompleteRank));
        assert_eq!(parse_rank("PPPPPPP"), Err(ParseError::IncompleteRank));
    }

    #[test]
    fn test_parse_rank_unknown_piece() {
        assert_eq!(
            parse_rank("rnbqxbnr"),
            Err(ParseError::Position {
                position: 4,
                source: Box::new(ParseError::UnknownPiece('x')),
            })
        );
    }

    #[test]
    fn test_parse_rank_digits_out_of_range_are_unknown() {
        // '9' and '0' are not run-length digits; they fall through to the
        // piece table and fail there.
        assert_eq!(
            parse_rank("9ppppppp"),
            Err(ParseError::Position {
                position: 0,
                source: Box::new(ParseError::UnknownPiece('9')),
            })
        );

        assert_eq!(
            parse_rank("ppppppp0"),
            Err(ParseError::Position {
                position: 7,
                source: Box::new(ParseError::UnknownPiece('0')),
            })
        );
    }

    #[test]
    fn test_insufficient_ranks() {
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8"),
            Err(ParseError::InsufficientRanks {
                found: 7,
                expected: 8,
            })
        );

        assert_eq!(
            Board::from_fen(""),
            Err(ParseError::InsufficientRanks {
                found: 1,
                expected: 8,
            })
        );
    }

    #[test]
    fn test_too_many_ranks() {
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/8/8"),
            Err(ParseError::TooManyRanks {
                found: 9,
                expected: 8,
            })
        );
    }

    #[test]
    fn test_trailing_empty_segment_counts_as_rank() {
        // The trailing '/' yields an eighth, empty segment; the count check
        // passes and the empty rank itself is rejected.
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/"),
            Err(ParseError::Rank {
                rank: 1,
                source: Box::new(ParseError::IncompleteRank),
            })
        );
    }

    #[test]
    fn test_short_first_rank() {
        // 8 segments, but the topmost rank only fills 7 files.
        assert_eq!(
            Board::from_fen("7/8/8/8/8/8/8/8"),
            Err(ParseError::Rank {
                rank: 8,
                source: Box::new(ParseError::IncompleteRank),
            })
        );
    }

    #[test]
    fn test_embedded_empty_segment() {
        assert_eq!(
            Board::from_fen("8/8//8/8/8/8/8"),
            Err(ParseError::Rank {
                rank: 6,
                source: Box::new(ParseError::IncompleteRank),
            })
        );
    }

    #[test]
    fn test_rank_errors_carry_board_rank_number() {
        let err = Board::from_fen("8/8/8/xxxxxxxx/8/8/8/8").unwrap_err();

        assert_eq!(
            err,
            ParseError::Rank {
                rank: 5,
                source: Box::new(ParseError::Position {
                    position: 0,
                    source: Box::new(ParseError::UnknownPiece('x')),
                }),
            }
        );

        assert_eq!(
            err.report(),
            "Problem at rank 5\nCharacter at position 0\nUnknown piece: x"
        );
    }

    #[test]
    fn test_trailing_fen_fields_are_rejected() {
        // Side-to-move and friends are not supported; they ride along in the
        // last rank segment and fail as excess rank text.
        let err = Board::from_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        )
        .unwrap_err();

        assert_eq!(
            err,
            ParseError::Rank {
                rank: 1,
                source: Box::new(ParseError::EndOfRank {
                    rest: " w KQkq - 0 1".to_string(),
                }),
            }
        );
    }

    #[test]
    fn test_first_failing_rank_wins() {
        // Both rank 7 and rank 2 are malformed; parsing stops at rank 7.
        let err = Board::from_fen("8/ppp/8/8/8/8/PPP/8").unwrap_err();
        assert!(matches!(err, ParseError::Rank { rank: 7, .. }));
    }

    #[test]
    fn test_fen_roundtrip() {
        for fen in [START_FEN, EMPTY_FEN, TRICKY_FEN, "7k/8/8/8/8/8/8/K7"] {
            let board = Board::from_fen(fen).unwrap();
            assert_eq!(board.fen(), fen);
            assert_eq!(Board::from_fen(&board.fen()).unwrap(), board);
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(Board::from_fen(START_FEN), Board::from_fen(START_FEN));
        assert_eq!(
            Board::from_fen("8/8/8/8/45/8/8/8"),
            Board::from_fen("8/8/8/8/45/8/8/8")
        );
    }
}

//! Error types for position-string parsing.
//!
//! Failures form a cause chain: the board parser wraps rank-level failures
//! with the board rank number, and the rank parser wraps unknown characters
//! with their position, so a caller can report exactly where an input broke.

use thiserror::Error;

/******************************************\
|==========================================|
|               Parse Errors               |
|==========================================|
\******************************************/

/// Errors produced while parsing a rank-notation position string.
///
/// The `Rank` and `Position` variants are pure context wrappers; their boxed
/// source carries the underlying failure. Walking [`std::error::Error::source`]
/// from the outermost error reaches the root cause last.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than the required number of rank segments in the input.
    #[error("Insufficient number of ranks ({found} < {expected})")]
    InsufficientRanks { found: usize, expected: usize },

    /// More than the required number of rank segments in the input.
    #[error("Too many ranks ({found} > {expected})")]
    TooManyRanks { found: usize, expected: usize },

    /// The rank text ran out before all files were filled.
    #[error("End of input but rank incomplete")]
    IncompleteRank,

    /// All files were filled but rank text remains unconsumed.
    #[error("End of rank but {} character(s) left (\"{}\")", .rest.chars().count(), .rest)]
    EndOfRank { rest: String },

    /// A run-length digit would overflow the files remaining in the rank.
    #[error("Invalid digit {digit} at position {position} ({left} field(s) left)")]
    InvalidDigit {
        digit: usize,
        position: usize,
        left: usize,
    },

    /// A character that is neither a run-length digit nor a piece code.
    #[error("Unknown piece: {0}")]
    UnknownPiece(char),

    /// Context wrapper: the character position within a rank.
    #[error("Character at position {position}")]
    Position {
        position: usize,
        #[source]
        source: Box<ParseError>,
    },

    /// Context wrapper: the board rank (8 = topmost) a failure occurred in.
    #[error("Problem at rank {rank}")]
    Rank {
        rank: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Renders the full cause chain, one message per line, root cause last.
    pub fn report(&self) -> String {
        report(self)
    }
}

/// Renders any error and its cause chain, one message per line, root cause
/// last. Presentation is the caller's job; the parser itself never prints.
pub fn report(err: &dyn std::error::Error) -> String {
    let mut out = String::new();
    let mut next = Some(err);
    while let Some(err) = next {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&err.to_string());
        next = err.source();
    }
    out
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
